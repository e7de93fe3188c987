//! This module implements `PlainDateTime`.

use alloc::string::String;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    iso::IsoDateTime,
    parsers::{IxdtfStringBuilder, Precision},
    PlainDate, PlainTime, TemporalResult,
};

/// A date and a wall-clock time with nanosecond precision and no zone.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainDateTime {
    pub(crate) iso: IsoDateTime,
}

impl PlainDateTime {
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(iso: IsoDateTime) -> Self {
        Self { iso }
    }

    /// Creates a new `PlainDateTime`. `nanosecond` must be below one second.
    pub fn try_new(date: PlainDate, time: PlainTime, nanosecond: u32) -> TemporalResult<Self> {
        IsoDateTime::try_new(date.iso, time.iso, nanosecond).map(Self::new_unchecked)
    }

    #[inline]
    #[must_use]
    pub const fn iso(&self) -> IsoDateTime {
        self.iso
    }

    #[inline]
    #[must_use]
    pub const fn date(&self) -> PlainDate {
        PlainDate::new_unchecked(self.iso.date)
    }

    #[inline]
    #[must_use]
    pub const fn time(&self) -> PlainTime {
        PlainTime::new_unchecked(self.iso.time)
    }

    #[inline]
    #[must_use]
    pub const fn nanosecond(&self) -> u32 {
        self.iso.nanosecond
    }

    /// Returns the `YYYY-MM-DDTHH:MM:SS[.fraction]` text of this value.
    pub fn to_ixdtf_string(&self) -> String {
        self.builder().build()
    }

    fn builder(&self) -> IxdtfStringBuilder<'static> {
        IxdtfStringBuilder::default()
            .with_date(self.iso.date)
            .with_time(self.iso.time, self.iso.nanosecond, Precision::Auto)
    }
}

impl Writeable for PlainDateTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.builder().write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.builder().writeable_length_hint()
    }
}

impl_display_with_writeable!(PlainDateTime);

#[cfg(test)]
mod tests {
    use super::PlainDateTime;
    use crate::{PlainDate, PlainTime};
    use alloc::format;
    use writeable::assert_writeable_eq;

    #[test]
    fn accessors() {
        let date = PlainDate::try_new(2024, 1, 2).unwrap();
        let time = PlainTime::try_new(13, 45, 7).unwrap();
        let dt = PlainDateTime::try_new(date, time, 42).unwrap();
        assert_eq!(dt.date(), date);
        assert_eq!(dt.time(), time);
        assert_eq!(dt.nanosecond(), 42);
        assert_writeable_eq!(dt, "2024-01-02T13:45:07.000000042");
        assert!(PlainDateTime::try_new(date, time, 1_000_000_000).is_err());
    }
}
