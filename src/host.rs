//! Trait definitions for accessing values from the host environment.
//!
//! The legacy bridge always reads its zone from a `HostTimeZone`. This is the
//! process default zone, not any zone configured elsewhere by the caller.

use crate::{TemporalResult, TimeZone, UtcOffset};

/// The `HostTimeZone` trait defines the host's default time zone.
pub trait HostTimeZone {
    fn get_host_time_zone(&self) -> TemporalResult<TimeZone>;
}

// The empty host is pinned to UTC.
impl HostTimeZone for () {
    fn get_host_time_zone(&self) -> TemporalResult<TimeZone> {
        Ok(TimeZone::from(UtcOffset::UTC))
    }
}

/// A `TimeZone` acts as a host pinned to itself.
impl HostTimeZone for TimeZone {
    fn get_host_time_zone(&self) -> TemporalResult<TimeZone> {
        Ok(self.clone())
    }
}

impl<T: HostTimeZone + ?Sized> HostTimeZone for &T {
    fn get_host_time_zone(&self) -> TemporalResult<TimeZone> {
        (**self).get_host_time_zone()
    }
}
