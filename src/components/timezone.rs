//! This module implements `TimeZone` and `UtcOffset`.
//!
//! Zone arithmetic (wall-clock to instant and back) is delegated to `jiff`,
//! which carries the bundled tz database.

use alloc::{format, string::String};
use core::str::FromStr;
use jiff::{civil, tz, Timestamp};
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    iso::{IsoDate, IsoDateTime, IsoTime},
    parsers::{self, FormattableOffset, FormattableTime, Precision},
    Sign, TemporalError, TemporalResult,
};

const SECONDS_PER_DAY: i32 = 86_400;

/// A fixed offset from UTC with second resolution.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffset(i32);

impl UtcOffset {
    /// The zero offset, written `Z` in source text.
    pub const UTC: Self = Self(0);

    /// Creates an offset of `seconds`, which must be strictly within one day.
    pub fn from_seconds(seconds: i32) -> TemporalResult<Self> {
        if seconds.abs() >= SECONDS_PER_DAY {
            return Err(TemporalError::range().with_message("UTC offset must be under 24 hours."));
        }
        Ok(Self(seconds))
    }

    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i32 {
        self.0
    }

    pub(crate) fn to_formattable(self) -> FormattableOffset {
        let sign = if self.0 < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        let abs = self.0.unsigned_abs();
        let precision = if abs % 60 == 0 {
            Precision::Minute
        } else {
            Precision::Second
        };
        FormattableOffset {
            sign,
            time: FormattableTime {
                hour: (abs / 3600) as u8,
                minute: ((abs / 60) % 60) as u8,
                second: (abs % 60) as u8,
                nanosecond: 0,
                precision,
            },
        }
    }
}

impl Writeable for UtcOffset {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.to_formattable().write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.to_formattable().writeable_length_hint()
    }
}

impl_display_with_writeable!(UtcOffset);

/// A zone: either a fixed offset or an IANA identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeZone {
    Offset(UtcOffset),
    Iana(String),
}

impl TimeZone {
    /// Parses `Z`, `±HH:MM[:SS]`, or an IANA identifier.
    ///
    /// IANA identifiers are only checked for shape here; an unknown name is
    /// reported once the zone is actually used.
    pub fn try_from_str(source: &str) -> TemporalResult<Self> {
        parsers::timezone::parse_identifier(source)
    }

    /// Returns this zone's identifier.
    pub fn identifier(&self) -> String {
        match self {
            Self::Iana(identifier) => identifier.clone(),
            Self::Offset(offset) => offset.write_to_string().into_owned(),
        }
    }

    fn to_jiff(&self) -> TemporalResult<tz::TimeZone> {
        match self {
            Self::Offset(offset) => tz::Offset::from_seconds(offset.seconds())
                .map(tz::TimeZone::fixed)
                .map_err(zone_error),
            Self::Iana(identifier) => tz::TimeZone::get(identifier).map_err(|e| {
                TemporalError::range().with_message(format!("Unknown time zone '{identifier}': {e}"))
            }),
        }
    }

    /// Returns the epoch second of the wall-clock `iso` in this zone, ignoring
    /// the nanosecond field.
    ///
    /// Wall-clock times repeated by a transition resolve to the earlier
    /// offset; times skipped by a transition are pushed forward by the gap.
    pub(crate) fn epoch_second_for(&self, iso: &IsoDateTime) -> TemporalResult<i64> {
        let zone = self.to_jiff()?;
        let datetime = to_civil(iso)?;
        zone.to_ambiguous_timestamp(datetime)
            .compatible()
            .map(|timestamp| timestamp.as_second())
            .map_err(zone_error)
    }

    /// Returns the wall-clock date and time at `epoch_second` in this zone,
    /// along with the offset in effect.
    pub(crate) fn wall_clock_for(
        &self,
        epoch_second: i64,
    ) -> TemporalResult<(IsoDate, IsoTime, UtcOffset)> {
        let zone = self.to_jiff()?;
        let timestamp = Timestamp::from_second(epoch_second).map_err(zone_error)?;
        let datetime = zone.to_datetime(timestamp);
        let offset = UtcOffset::from_seconds(zone.to_offset(timestamp).seconds())?;

        let date = IsoDate::try_new(
            i32::from(datetime.year()),
            datetime.month() as u8,
            datetime.day() as u8,
        )?;
        let time = IsoTime::try_new(
            datetime.hour() as u8,
            datetime.minute() as u8,
            datetime.second() as u8,
        )?;
        Ok((date, time, offset))
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::Offset(UtcOffset::UTC)
    }
}

impl From<UtcOffset> for TimeZone {
    fn from(offset: UtcOffset) -> Self {
        Self::Offset(offset)
    }
}

impl FromStr for TimeZone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(s)
    }
}

fn to_civil(iso: &IsoDateTime) -> TemporalResult<civil::DateTime> {
    let year = i16::try_from(iso.date.year).map_err(|_| {
        TemporalError::range().with_message("Year is outside the range supported by zone arithmetic.")
    })?;
    civil::DateTime::new(
        year,
        iso.date.month as i8,
        iso.date.day as i8,
        iso.time.hour as i8,
        iso.time.minute as i8,
        iso.time.second as i8,
        0,
    )
    .map_err(zone_error)
}

fn zone_error(err: jiff::Error) -> TemporalError {
    TemporalError::range().with_message(format!("{err}"))
}

#[cfg(test)]
mod tests {
    use super::{TimeZone, UtcOffset};
    use crate::iso::{IsoDate, IsoDateTime, IsoTime};
    use alloc::format;
    use writeable::assert_writeable_eq;

    fn iso(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> IsoDateTime {
        IsoDateTime::try_new(
            IsoDate::try_new(year, month, day).unwrap(),
            IsoTime::try_new(hour, minute, second).unwrap(),
            0,
        )
        .unwrap()
    }

    #[test]
    fn offset_display() {
        assert_writeable_eq!(UtcOffset::UTC, "+00:00");
        assert_writeable_eq!(UtcOffset::from_seconds(-19_800).unwrap(), "-05:30");
        assert_writeable_eq!(UtcOffset::from_seconds(3_661).unwrap(), "+01:01:01");
        assert!(UtcOffset::from_seconds(86_400).is_err());
    }

    #[test]
    fn fixed_offset_arithmetic() {
        let zone = TimeZone::Offset(UtcOffset::from_seconds(3600).unwrap());
        let epoch = zone.epoch_second_for(&iso(1970, 1, 1, 1, 0, 0)).unwrap();
        assert_eq!(epoch, 0);

        let (date, time, offset) = zone.wall_clock_for(86_399).unwrap();
        assert_eq!(date, IsoDate::try_new(1970, 1, 2).unwrap());
        assert_eq!(time, IsoTime::try_new(0, 59, 59).unwrap());
        assert_eq!(offset.seconds(), 3600);
    }

    #[test]
    fn named_zone_transitions() {
        let zone = TimeZone::Iana("America/New_York".into());
        // 2024-03-10T02:30 does not exist and is pushed forward to 03:30 EDT.
        let gap = zone.epoch_second_for(&iso(2024, 3, 10, 2, 30, 0)).unwrap();
        let (_, time, offset) = zone.wall_clock_for(gap).unwrap();
        assert_eq!(time, IsoTime::try_new(3, 30, 0).unwrap());
        assert_eq!(offset.seconds(), -4 * 3600);

        // 2024-11-03T01:30 happens twice and resolves to the earlier EDT offset.
        let fold = zone.epoch_second_for(&iso(2024, 11, 3, 1, 30, 0)).unwrap();
        assert_eq!(fold, 1_730_611_800);
    }

    #[test]
    fn unknown_zone_is_a_range_error() {
        let zone = TimeZone::Iana("Mars/Olympus_Mons".into());
        let err = zone.epoch_second_for(&iso(2024, 1, 1, 0, 0, 0)).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Range);
    }

    #[test]
    fn identifier() {
        assert_eq!(TimeZone::default().identifier(), "+00:00");
        assert_eq!("Europe/Paris".parse::<TimeZone>().unwrap().identifier(), "Europe/Paris");
    }
}
