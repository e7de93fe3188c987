//! This module implements `ZonedDateTime`.

use alloc::string::String;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    options::ToStringOptions,
    parsers::{IxdtfStringBuilder, Precision},
    PlainDateTime, TemporalResult, TimeZone, UtcOffset,
};

/// A date-time anchored to a zone.
///
/// `offset` holds the offset that was written in the source, if any, and
/// `time_zone` the zone that was derived from it: the bracketed zone
/// identifier when present, otherwise the offset itself.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZonedDateTime {
    datetime: PlainDateTime,
    offset: Option<UtcOffset>,
    time_zone: TimeZone,
}

impl ZonedDateTime {
    #[inline]
    #[must_use]
    pub(crate) fn new_unchecked(
        datetime: PlainDateTime,
        offset: Option<UtcOffset>,
        time_zone: TimeZone,
    ) -> Self {
        Self {
            datetime,
            offset,
            time_zone,
        }
    }

    /// Anchors a wall-clock `datetime` to a caller supplied `time_zone`.
    #[must_use]
    pub fn new(datetime: PlainDateTime, time_zone: TimeZone) -> Self {
        let offset = match &time_zone {
            TimeZone::Offset(offset) => Some(*offset),
            TimeZone::Iana(_) => None,
        };
        Self::new_unchecked(datetime, offset, time_zone)
    }

    /// Anchors `datetime` to `time_zone` with an explicit `offset`.
    #[must_use]
    pub fn with_offset(datetime: PlainDateTime, offset: UtcOffset, time_zone: TimeZone) -> Self {
        Self::new_unchecked(datetime, Some(offset), time_zone)
    }

    #[inline]
    #[must_use]
    pub const fn datetime(&self) -> PlainDateTime {
        self.datetime
    }

    #[inline]
    #[must_use]
    pub const fn offset(&self) -> Option<UtcOffset> {
        self.offset
    }

    #[inline]
    #[must_use]
    pub const fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// Returns the epoch second this value denotes.
    ///
    /// A written offset pins the instant; otherwise the wall-clock time is
    /// resolved in the zone.
    pub fn epoch_second(&self) -> TemporalResult<i64> {
        match self.offset {
            Some(offset) => TimeZone::Offset(offset).epoch_second_for(&self.datetime.iso),
            None => self.time_zone.epoch_second_for(&self.datetime.iso),
        }
    }

    /// Renders the value with its offset and zone annotation.
    pub fn to_ixdtf_string(&self, options: ToStringOptions) -> String {
        self.to_ixdtf_writeable(options).write_to_string().into_owned()
    }

    fn to_ixdtf_writeable(&self, options: ToStringOptions) -> impl Writeable + '_ {
        let mut builder = IxdtfStringBuilder::default()
            .with_date(self.datetime.iso.date)
            .with_time(
                self.datetime.iso.time,
                self.datetime.iso.nanosecond,
                Precision::Auto,
            );
        let offset = self.offset.or(match self.time_zone {
            TimeZone::Offset(offset) => Some(offset),
            TimeZone::Iana(_) => None,
        });
        if let Some(offset) = offset {
            builder = builder.with_offset(offset, options.offset);
        }
        if let TimeZone::Iana(identifier) = &self.time_zone {
            builder = builder.with_timezone(identifier, options.time_zone);
        }
        builder
    }
}

/// Writes the canonical form, which carries no zone.
impl Writeable for ZonedDateTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.datetime.write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.datetime.writeable_length_hint()
    }
}

impl_display_with_writeable!(ZonedDateTime);

#[cfg(test)]
mod tests {
    use super::ZonedDateTime;
    use crate::{
        options::{DisplayOffset, DisplayTimeZone, ToStringOptions},
        parse, PlainDate, PlainDateTime, PlainTime, TemporalValue, TimeZone, UtcOffset,
    };
    use alloc::format;
    use writeable::assert_writeable_eq;

    fn zoned(text: &str) -> ZonedDateTime {
        match parse(text).unwrap() {
            TemporalValue::Zoned(zoned) => zoned,
            other => panic!("expected a zoned value, got {other:?}"),
        }
    }

    #[test]
    fn ixdtf_rendering() {
        let value = zoned("2024-01-02T13:45:07.25+01:00[Europe/Paris]");
        assert_eq!(
            value.to_ixdtf_string(ToStringOptions::default()),
            "2024-01-02T13:45:07.25+01:00[Europe/Paris]"
        );
        assert_eq!(
            value.to_ixdtf_string(ToStringOptions::new(
                DisplayOffset::Never,
                DisplayTimeZone::Critical
            )),
            "2024-01-02T13:45:07.25[!Europe/Paris]"
        );
        assert_writeable_eq!(value, "2024-01-02T13:45:07.25");

        let value = zoned("2024-01-02T13:45:07Z");
        assert_eq!(
            value.to_ixdtf_string(ToStringOptions::default()),
            "2024-01-02T13:45:07+00:00"
        );
    }

    #[test]
    fn caller_supplied_zone() {
        let datetime = PlainDateTime::try_new(
            PlainDate::try_new(2024, 7, 1).unwrap(),
            PlainTime::try_new(12, 0, 0).unwrap(),
            0,
        )
        .unwrap();
        let value = ZonedDateTime::new(datetime, TimeZone::Iana("Europe/Paris".into()));
        assert_eq!(value.offset(), None);
        // 12:00 CEST is 10:00 UTC.
        assert_eq!(value.epoch_second().unwrap(), 1_719_828_000);

        let value = ZonedDateTime::new(datetime, UtcOffset::from_seconds(-3600).unwrap().into());
        assert_eq!(value.epoch_second().unwrap(), 1_719_838_800);
    }

    #[test]
    fn written_offset_pins_the_instant() {
        let value = zoned("2024-07-01T12:00:00+00:00[Europe/Paris]");
        assert_eq!(value.epoch_second().unwrap(), 1_719_835_200);
    }
}
