//! This module implements the ISO field records.
//!
//! The three records are:
//!   - `IsoDate`
//!   - `IsoTime`
//!   - `IsoDateTime`
//!
//! An `IsoDate` holds a proleptic Gregorian year, month and day. An `IsoTime`
//! holds a 24-hour wall-clock hour, minute and second, without leap seconds.
//! An `IsoDateTime` holds both plus a nanosecond-of-second.
//!
//! All three are plain `Copy` records and are only constructed once their
//! fields have been validated.

use crate::{TemporalError, TemporalResult, NS_PER_SECOND};

/// The smallest year representable by an `IsoDate`.
pub const MIN_ISO_YEAR: i32 = -999_999;
/// The largest year representable by an `IsoDate`.
pub const MAX_ISO_YEAR: i32 = 999_999;

/// `IsoDate` is a validated year, month and day.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `IsoDate`, rejecting any field outside its range.
    pub fn try_new(year: i32, month: u8, day: u8) -> TemporalResult<Self> {
        if !is_valid_date(year, month, day) {
            return Err(TemporalError::range().with_message("Not a valid ISO date."));
        }
        Ok(Self::new_unchecked(year, month, day))
    }
}

/// `IsoTime` is a validated hour, minute and second.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl IsoTime {
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Creates a new `IsoTime`. Leap seconds are rejected.
    pub fn try_new(hour: u8, minute: u8, second: u8) -> TemporalResult<Self> {
        if !is_valid_time(hour, minute, second) {
            return Err(TemporalError::range().with_message("Not a valid ISO time."));
        }
        Ok(Self::new_unchecked(hour, minute, second))
    }
}

/// `IsoDateTime` is the record of an `IsoDate`, an `IsoTime`, and the
/// nanosecond-of-second.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
    pub nanosecond: u32,
}

impl IsoDateTime {
    pub(crate) const fn new_unchecked(date: IsoDate, time: IsoTime, nanosecond: u32) -> Self {
        Self {
            date,
            time,
            nanosecond,
        }
    }

    /// Creates a new `IsoDateTime`. `nanosecond` must be below one second.
    pub fn try_new(date: IsoDate, time: IsoTime, nanosecond: u32) -> TemporalResult<Self> {
        if nanosecond >= NS_PER_SECOND {
            return Err(
                TemporalError::range().with_message("nanosecond must be within 0..=999999999.")
            );
        }
        Ok(Self::new_unchecked(date, time, nanosecond))
    }
}

// ==== ISO field validation ====

#[inline]
pub(crate) fn is_valid_date(year: i32, month: u8, day: u8) -> bool {
    if !(MIN_ISO_YEAR..=MAX_ISO_YEAR).contains(&year) || !(1..=12).contains(&month) {
        return false;
    }
    (1..=iso_days_in_month(year, month)).contains(&day)
}

#[inline]
pub(crate) fn is_valid_time(hour: u8, minute: u8, second: u8) -> bool {
    hour < 24 && minute < 60 && second < 60
}

#[inline]
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub(crate) fn iso_days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
