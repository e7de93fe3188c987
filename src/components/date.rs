//! This module implements `PlainDate`.

use alloc::string::String;
use core::str::FromStr;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{iso::IsoDate, parsers, TemporalError, TemporalResult};

/// A calendar date with no time and no zone.
///
/// ```rust
/// use iso_codec::PlainDate;
///
/// let date: PlainDate = "2024-01-02".parse().unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (2024, 1, 2));
/// assert_eq!(date.to_string(), "2024-01-02");
/// ```
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainDate {
    pub(crate) iso: IsoDate,
}

impl PlainDate {
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(iso: IsoDate) -> Self {
        Self { iso }
    }

    /// Creates a new `PlainDate`, rejecting out of range fields.
    pub fn try_new(year: i32, month: u8, day: u8) -> TemporalResult<Self> {
        IsoDate::try_new(year, month, day).map(Self::new_unchecked)
    }

    /// Returns the underlying `IsoDate`.
    #[inline]
    #[must_use]
    pub const fn iso(&self) -> IsoDate {
        self.iso
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.iso.year
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.iso.month
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.iso.day
    }

    /// Returns the `YYYY-MM-DD` text of this date.
    pub fn to_ixdtf_string(&self) -> String {
        self.write_to_string().into_owned()
    }
}

impl From<IsoDate> for PlainDate {
    fn from(iso: IsoDate) -> Self {
        Self::new_unchecked(iso)
    }
}

impl Writeable for PlainDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        parsers::FormattableDate(self.iso.year, self.iso.month, self.iso.day).write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        parsers::FormattableDate(self.iso.year, self.iso.month, self.iso.day)
            .writeable_length_hint()
    }
}

impl_display_with_writeable!(PlainDate);

impl FromStr for PlainDate {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::parse_date(s).map(Self::new_unchecked)
    }
}
