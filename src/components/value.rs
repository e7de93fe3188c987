//! This module implements `TemporalValue`, the tagged union of all shapes.

use core::str::FromStr;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    error::Shape, parsers, PlainDate, PlainDateTime, PlainTime, TemporalError, ZonedDateTime,
};

/// A temporal value of exactly one shape.
///
/// ```rust
/// use iso_codec::{TemporalValue, error::Shape};
///
/// let value: TemporalValue = "2024-01-02 13:45:07.120".parse().unwrap();
/// assert_eq!(value.shape(), Shape::DateTime);
/// assert_eq!(value.to_string(), "2024-01-02T13:45:07.12");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemporalValue {
    Date(PlainDate),
    Time(PlainTime),
    DateTime(PlainDateTime),
    Zoned(ZonedDateTime),
}

impl TemporalValue {
    /// Returns the shape of this value.
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Date(_) => Shape::Date,
            Self::Time(_) => Shape::Time,
            Self::DateTime(_) => Shape::DateTime,
            Self::Zoned(_) => Shape::ZonedDateTime,
        }
    }

    /// Returns the date component, if this value has one.
    pub fn date(&self) -> Option<PlainDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Time(_) => None,
            Self::DateTime(dt) => Some(dt.date()),
            Self::Zoned(zoned) => Some(zoned.datetime().date()),
        }
    }

    /// Returns the time component, if this value has one.
    pub fn time(&self) -> Option<PlainTime> {
        match self {
            Self::Date(_) => None,
            Self::Time(time) => Some(*time),
            Self::DateTime(dt) => Some(dt.time()),
            Self::Zoned(zoned) => Some(zoned.datetime().time()),
        }
    }
}

impl From<PlainDate> for TemporalValue {
    fn from(value: PlainDate) -> Self {
        Self::Date(value)
    }
}

impl From<PlainTime> for TemporalValue {
    fn from(value: PlainTime) -> Self {
        Self::Time(value)
    }
}

impl From<PlainDateTime> for TemporalValue {
    fn from(value: PlainDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<ZonedDateTime> for TemporalValue {
    fn from(value: ZonedDateTime) -> Self {
        Self::Zoned(value)
    }
}

impl Writeable for TemporalValue {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        match self {
            Self::Date(date) => date.write_to(sink),
            Self::Time(time) => time.write_to(sink),
            Self::DateTime(dt) => dt.write_to(sink),
            Self::Zoned(zoned) => zoned.write_to(sink),
        }
    }

    fn writeable_length_hint(&self) -> LengthHint {
        match self {
            Self::Date(date) => date.writeable_length_hint(),
            Self::Time(time) => time.writeable_length_hint(),
            Self::DateTime(dt) => dt.writeable_length_hint(),
            Self::Zoned(zoned) => zoned.writeable_length_hint(),
        }
    }
}

impl_display_with_writeable!(TemporalValue);

impl FromStr for TemporalValue {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::TemporalValue;
    use crate::{format, PlainDate, PlainTime};

    #[test]
    fn components() {
        let value: TemporalValue = "2024-01-02T13:45:07+02:00".parse().unwrap();
        assert_eq!(value.date(), PlainDate::try_new(2024, 1, 2).ok());
        assert_eq!(value.time(), PlainTime::try_new(13, 45, 7).ok());

        let value: TemporalValue = "13:45:07".parse().unwrap();
        assert_eq!(value.date(), None);
    }

    #[test]
    fn absent_input_stays_absent() {
        let text: Option<&str> = None;
        let parsed = text.map(str::parse::<TemporalValue>).transpose().unwrap();
        assert_eq!(parsed, None);
        assert_eq!(parsed.as_ref().map(format), None);
    }
}
