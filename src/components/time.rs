//! This module implements `PlainTime`.

use alloc::string::String;
use core::str::FromStr;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    iso::IsoTime,
    parsers::{self, FormattableTime, Precision},
    TemporalError, TemporalResult,
};

/// A wall-clock time of day with second resolution.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainTime {
    pub(crate) iso: IsoTime,
}

impl PlainTime {
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(iso: IsoTime) -> Self {
        Self { iso }
    }

    /// Creates a new `PlainTime`. Hours are 24-hour and leap seconds are rejected.
    pub fn try_new(hour: u8, minute: u8, second: u8) -> TemporalResult<Self> {
        IsoTime::try_new(hour, minute, second).map(Self::new_unchecked)
    }

    #[inline]
    #[must_use]
    pub const fn iso(&self) -> IsoTime {
        self.iso
    }

    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.iso.hour
    }

    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.iso.minute
    }

    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.iso.second
    }

    /// Returns the `HH:MM:SS` text of this time.
    pub fn to_ixdtf_string(&self) -> String {
        self.write_to_string().into_owned()
    }

    fn formattable(&self) -> FormattableTime {
        FormattableTime {
            hour: self.iso.hour,
            minute: self.iso.minute,
            second: self.iso.second,
            nanosecond: 0,
            precision: Precision::Second,
        }
    }
}

impl From<IsoTime> for PlainTime {
    fn from(iso: IsoTime) -> Self {
        Self::new_unchecked(iso)
    }
}

impl Writeable for PlainTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.formattable().write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(8)
    }
}

impl_display_with_writeable!(PlainTime);

impl FromStr for PlainTime {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::parse_time(s).map(Self::new_unchecked)
    }
}

#[cfg(test)]
mod tests {
    use super::PlainTime;
    use alloc::format;
    use writeable::assert_writeable_eq;

    #[test]
    fn zero_padded() {
        assert_writeable_eq!(PlainTime::try_new(7, 5, 3).unwrap(), "07:05:03");
        assert_writeable_eq!(PlainTime::try_new(23, 59, 59).unwrap(), "23:59:59");
    }

    #[test]
    fn from_str() {
        let time: PlainTime = "13:45:07".parse().unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (13, 45, 7));
        assert!("13:45".parse::<PlainTime>().is_err());
        assert!("T13:45:07".parse::<PlainTime>().is_err());
    }
}
