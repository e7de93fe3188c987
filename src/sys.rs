use crate::host::HostTimeZone;
use crate::{TemporalResult, TimeZone};

/// A host implementation that reads the operating system's time zone.
///
/// This implementation is backed by [`iana_time_zone`]. The zone is read on
/// every call, so a change to the system zone is observed immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalHostSystem;

impl HostTimeZone for LocalHostSystem {
    fn get_host_time_zone(&self) -> TemporalResult<TimeZone> {
        Ok(get_system_timezone())
    }
}

/// Returns the system zone, falling back to UTC when it cannot be read.
#[inline]
pub(crate) fn get_system_timezone() -> TimeZone {
    match iana_time_zone::get_timezone() {
        Ok(identifier) => {
            #[cfg(feature = "log")]
            log::debug!("using system time zone {identifier}");
            TimeZone::Iana(identifier)
        }
        Err(_err) => {
            #[cfg(feature = "log")]
            log::warn!("unable to read the system time zone, falling back to UTC: {_err}");
            TimeZone::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LocalHostSystem;
    use crate::{host::HostTimeZone, TimeZone};

    #[test]
    fn system_zone_is_available() {
        let zone = LocalHostSystem.get_host_time_zone().unwrap();
        match zone {
            TimeZone::Iana(identifier) => assert!(!identifier.is_empty()),
            TimeZone::Offset(offset) => assert_eq!(offset.seconds(), 0),
        }
    }
}
