//! This module implements the bridge to legacy temporal values.
//!
//! Legacy storage and transport code knows three shapes: a date, a time, and
//! a timestamp. None of them carries a zone; a timestamp is an instant whose
//! wall-clock reading is always taken in the host's default zone.
//!
//! The shape of a legacy value is an explicit tag, `LegacyValue`, and the
//! bridge dispatches on that tag only.
//!
//! ```rust
//! use iso_codec::{
//!     legacy::{LegacyCodec, LegacyValue},
//!     TimeZone, UtcOffset,
//! };
//!
//! let codec = LegacyCodec::new(TimeZone::from(UtcOffset::from_seconds(3600).unwrap()));
//! let LegacyValue::Timestamp(timestamp) = codec.parse_legacy("1970-01-01 01:00:00.5").unwrap() else {
//!     unreachable!()
//! };
//! assert_eq!(timestamp.epoch_second(), 0);
//! assert_eq!(timestamp.nanosecond(), 500_000_000);
//! ```
//!
//! The host zone is consulted even when a caller has its own notion of a
//! "current" zone. Legacy timestamps have always been reconstructed in the
//! process default zone, and keeping that behavior keeps stored values
//! stable.

use alloc::string::String;

use crate::{
    error::{LegacyKind, Shape},
    host::HostTimeZone,
    iso::{IsoDate, IsoDateTime, IsoTime},
    parsers, PlainDate, PlainDateTime, PlainTime, TemporalError, TemporalResult,
    TemporalValue, ZonedDateTime, MS_PER_SECOND, NS_PER_MILLISECOND, NS_PER_SECOND,
};


/// A legacy date value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LegacyDate(IsoDate);

impl LegacyDate {
    pub fn try_new(year: i32, month: u8, day: u8) -> TemporalResult<Self> {
        IsoDate::try_new(year, month, day).map(Self)
    }

    pub const fn year(&self) -> i32 {
        self.0.year
    }

    pub const fn month(&self) -> u8 {
        self.0.month
    }

    pub const fn day(&self) -> u8 {
        self.0.day
    }
}

/// A legacy time-of-day value with second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LegacyTime(IsoTime);

impl LegacyTime {
    pub fn try_new(hour: u8, minute: u8, second: u8) -> TemporalResult<Self> {
        IsoTime::try_new(hour, minute, second).map(Self)
    }

    pub const fn hour(&self) -> u8 {
        self.0.hour
    }

    pub const fn minute(&self) -> u8 {
        self.0.minute
    }

    pub const fn second(&self) -> u8 {
        self.0.second
    }
}

/// A legacy timestamp: an instant at second resolution plus a separately
/// stored nanosecond-of-second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LegacyTimestamp {
    epoch_second: i64,
    nanosecond: u32,
}

impl LegacyTimestamp {
    /// Creates a new `LegacyTimestamp`. `nanosecond` must be below one second.
    pub fn try_new(epoch_second: i64, nanosecond: u32) -> TemporalResult<Self> {
        if nanosecond >= NS_PER_SECOND {
            return Err(TemporalError::range()
                .with_message("timestamp nanosecond must be within 0..=999999999."));
        }
        Ok(Self {
            epoch_second,
            nanosecond,
        })
    }

    /// Seconds since the Unix epoch, rounded towards negative infinity.
    pub const fn epoch_second(&self) -> i64 {
        self.epoch_second
    }

    /// Nanoseconds within `epoch_second`.
    pub const fn nanosecond(&self) -> u32 {
        self.nanosecond
    }

    /// Milliseconds since the Unix epoch, with sub-millisecond digits dropped.
    ///
    /// Fails when the result does not fit in an `i64`.
    pub fn epoch_millisecond(&self) -> TemporalResult<i64> {
        self.epoch_second
            .checked_mul(i64::from(MS_PER_SECOND))
            .and_then(|millis| millis.checked_add(i64::from(self.nanosecond / NS_PER_MILLISECOND)))
            .ok_or_else(|| {
                TemporalError::range().with_message("timestamp is outside the millisecond range.")
            })
    }
}

/// A legacy instant with no declared shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LegacyInstant {
    epoch_millisecond: i64,
}

impl LegacyInstant {
    pub const fn from_epoch_millisecond(epoch_millisecond: i64) -> Self {
        Self { epoch_millisecond }
    }

    pub const fn epoch_millisecond(&self) -> i64 {
        self.epoch_millisecond
    }
}

impl From<LegacyInstant> for LegacyTimestamp {
    fn from(instant: LegacyInstant) -> Self {
        let millis = i64::from(MS_PER_SECOND);
        Self {
            epoch_second: instant.epoch_millisecond.div_euclid(millis),
            nanosecond: instant.epoch_millisecond.rem_euclid(millis) as u32 * NS_PER_MILLISECOND,
        }
    }
}

/// A legacy value of one of the three legacy shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyValue {
    Date(LegacyDate),
    Time(LegacyTime),
    Timestamp(LegacyTimestamp),
}

impl LegacyValue {
    pub const fn kind(&self) -> LegacyKind {
        match self {
            Self::Date(_) => LegacyKind::Date,
            Self::Time(_) => LegacyKind::Time,
            Self::Timestamp(_) => LegacyKind::Timestamp,
        }
    }
}

impl From<LegacyDate> for LegacyValue {
    fn from(value: LegacyDate) -> Self {
        Self::Date(value)
    }
}

impl From<LegacyTime> for LegacyValue {
    fn from(value: LegacyTime) -> Self {
        Self::Time(value)
    }
}

impl From<LegacyTimestamp> for LegacyValue {
    fn from(value: LegacyTimestamp) -> Self {
        Self::Timestamp(value)
    }
}

impl From<LegacyInstant> for LegacyValue {
    fn from(value: LegacyInstant) -> Self {
        Self::Timestamp(value.into())
    }
}

/// Converts between `TemporalValue`s and legacy values, reading the host
/// zone from `H` at call time.
#[derive(Debug, Default, Clone, Copy)]
pub struct LegacyCodec<H> {
    host: H,
}

#[cfg(feature = "sys")]
impl LegacyCodec<crate::sys::LocalHostSystem> {
    /// Returns a codec that uses the operating system's zone.
    pub const fn system() -> Self {
        Self {
            host: crate::sys::LocalHostSystem,
        }
    }
}

impl<H: HostTimeZone> LegacyCodec<H> {
    pub const fn new(host: H) -> Self {
        Self { host }
    }

    /// Projects `value` onto the legacy `kind`.
    ///
    /// Date-times may be projected onto any kind. A zoned value is first
    /// turned into an instant, and its date and time are read from that
    /// instant in the host zone. Dates and times only project onto their own
    /// kind.
    pub fn to_legacy(&self, value: &TemporalValue, kind: LegacyKind) -> TemporalResult<LegacyValue> {
        match (value, kind) {
            (TemporalValue::Date(date), LegacyKind::Date) => Ok(LegacyDate(date.iso()).into()),
            (TemporalValue::Time(time), LegacyKind::Time) => Ok(LegacyTime(time.iso()).into()),
            (TemporalValue::DateTime(dt), LegacyKind::Date) => Ok(LegacyDate(dt.iso().date).into()),
            (TemporalValue::DateTime(dt), LegacyKind::Time) => Ok(LegacyTime(dt.iso().time).into()),
            (TemporalValue::DateTime(dt), LegacyKind::Timestamp) => {
                self.timestamp_from_wall_clock(&dt.iso()).map(Into::into)
            }
            (TemporalValue::Zoned(zoned), kind) => {
                let timestamp = timestamp_from_zoned(zoned)?;
                match kind {
                    LegacyKind::Timestamp => Ok(timestamp.into()),
                    LegacyKind::Date => Ok(LegacyDate(self.wall_clock(&timestamp)?.date).into()),
                    LegacyKind::Time => Ok(LegacyTime(self.wall_clock(&timestamp)?.time).into()),
                }
            }
            (value, kind) => Err(TemporalError::unsupported_projection(kind, value.shape())),
        }
    }

    /// Converts a legacy value by its shape tag.
    ///
    /// A timestamp becomes a `PlainDateTime` read in the host zone, with the
    /// timestamp's nanosecond field carried over unchanged.
    pub fn from_legacy(&self, value: &LegacyValue) -> TemporalResult<TemporalValue> {
        match value {
            LegacyValue::Date(date) => Ok(PlainDate::from(date.0).into()),
            LegacyValue::Time(time) => Ok(PlainTime::from(time.0).into()),
            LegacyValue::Timestamp(timestamp) => self
                .wall_clock(timestamp)
                .map(|iso| PlainDateTime::new_unchecked(iso).into()),
        }
    }

    /// Converts a shapeless legacy instant, treating it as a timestamp.
    pub fn from_instant(&self, instant: LegacyInstant) -> TemporalResult<TemporalValue> {
        self.from_legacy(&LegacyValue::from(instant))
    }

    /// Parses `text` and projects the result onto its matching legacy shape.
    ///
    /// Date-times without a zone are resolved in the host zone.
    pub fn parse_legacy(&self, text: &str) -> TemporalResult<LegacyValue> {
        let value = parsers::parse(text)?;
        let kind = match value.shape() {
            Shape::Date => LegacyKind::Date,
            Shape::Time => LegacyKind::Time,
            Shape::DateTime | Shape::ZonedDateTime => LegacyKind::Timestamp,
        };
        self.to_legacy(&value, kind)
    }

    /// Formats a legacy value in the canonical text of its shape.
    pub fn format_legacy(&self, value: &LegacyValue) -> TemporalResult<String> {
        self.from_legacy(value).map(|value| parsers::format(&value))
    }

    /// Formats a shapeless legacy instant as a timestamp.
    pub fn format_instant(&self, instant: LegacyInstant) -> TemporalResult<String> {
        self.format_legacy(&LegacyValue::from(instant))
    }

    /// Returns `instant` as a `ZonedDateTime` in the host zone.
    pub fn to_zoned_date_time(&self, instant: LegacyInstant) -> TemporalResult<ZonedDateTime> {
        let timestamp = LegacyTimestamp::from(instant);
        let zone = self.host.get_host_time_zone()?;
        let (date, time, offset) = zone.wall_clock_for(timestamp.epoch_second)?;
        let datetime =
            PlainDateTime::new_unchecked(IsoDateTime::try_new(date, time, timestamp.nanosecond)?);
        Ok(ZonedDateTime::with_offset(datetime, offset, zone))
    }

    fn timestamp_from_wall_clock(&self, iso: &IsoDateTime) -> TemporalResult<LegacyTimestamp> {
        let zone = self.host.get_host_time_zone()?;
        LegacyTimestamp::try_new(zone.epoch_second_for(iso)?, iso.nanosecond)
    }

    fn wall_clock(&self, timestamp: &LegacyTimestamp) -> TemporalResult<IsoDateTime> {
        let zone = self.host.get_host_time_zone()?;
        let (date, time, _) = zone.wall_clock_for(timestamp.epoch_second)?;
        IsoDateTime::try_new(date, time, timestamp.nanosecond)
    }
}

fn timestamp_from_zoned(zoned: &ZonedDateTime) -> TemporalResult<LegacyTimestamp> {
    LegacyTimestamp::try_new(zoned.epoch_second()?, zoned.datetime().nanosecond())
}
