use alloc::borrow::ToOwned;
use alloc::string::String;
use core::{iter::Peekable, str::Chars};
use ixdtf::{
    encoding::Utf8,
    records::{MinutePrecisionOffset, TimeZoneAnnotation, TimeZoneRecord, UtcOffsetRecord, UtcOffsetRecordOrZ},
};

use crate::{components::UtcOffset, TemporalError, TemporalResult, TimeZone};

/// Converts a parsed offset into a `UtcOffset`.
///
/// Offsets carrying a non-zero sub-second fraction are rejected.
pub(crate) fn offset_from_record(record: UtcOffsetRecordOrZ) -> Option<UtcOffset> {
    let record = match record {
        UtcOffsetRecordOrZ::Z => return Some(UtcOffset::UTC),
        UtcOffsetRecordOrZ::Offset(offset) => offset,
    };
    offset_from_full_record(record)
}

fn offset_from_full_record(record: UtcOffsetRecord) -> Option<UtcOffset> {
    if record
        .fraction()
        .is_some_and(|fraction| fraction.to_nanoseconds() != Some(0))
    {
        return None;
    }
    let seconds = i32::from(record.hour()) * 3600
        + i32::from(record.minute()) * 60
        + i32::from(record.second().unwrap_or(0));
    UtcOffset::from_seconds(seconds * record.sign() as i32).ok()
}

fn offset_from_minute_record(record: MinutePrecisionOffset) -> Option<UtcOffset> {
    let seconds = i32::from(record.hour) * 3600 + i32::from(record.minute) * 60;
    UtcOffset::from_seconds(seconds * record.sign as i32).ok()
}

/// Converts a bracketed zone annotation into a `TimeZone`.
pub(crate) fn time_zone_from_annotation(annotation: TimeZoneAnnotation<'_, Utf8>) -> Option<TimeZone> {
    match annotation.tz {
        TimeZoneRecord::Name(name) => {
            let identifier = core::str::from_utf8(name).ok()?;
            Some(TimeZone::Iana(identifier.to_owned()))
        }
        TimeZoneRecord::Offset(offset) => offset_from_minute_record(offset).map(TimeZone::Offset),
        _ => None,
    }
}

/// Parses a caller supplied zone identifier: `Z`, `±HH:MM[:SS]` or an IANA name.
#[inline]
pub(crate) fn parse_identifier(source: &str) -> TemporalResult<TimeZone> {
    if source == "Z" {
        return Ok(TimeZone::Offset(UtcOffset::UTC));
    }
    let mut cursor = source.chars().peekable();
    if cursor.peek().is_some_and(is_ascii_sign) {
        let offset_seconds = parse_offset(&mut cursor)?;
        if cursor.next().is_some() {
            return Err(invalid_identifier());
        }
        return UtcOffset::from_seconds(offset_seconds).map(TimeZone::Offset);
    } else if parse_iana_component(&mut cursor) {
        return Ok(TimeZone::Iana(String::from(source)));
    }
    Err(invalid_identifier())
}

#[inline]
pub(crate) fn parse_offset(chars: &mut Peekable<Chars<'_>>) -> TemporalResult<i32> {
    let sign = chars.next().map_or(1, |c| if c == '+' { 1 } else { -1 });
    let hours = parse_digit_pair(chars)?;

    let mut seconds = hours * 3600;
    for unit in [60, 1] {
        if chars.peek() != Some(&':') {
            break;
        }
        chars.next();
        seconds += parse_digit_pair(chars)? * unit;
    }

    Ok(seconds * sign)
}

fn parse_digit_pair(chars: &mut Peekable<Chars<'_>>) -> TemporalResult<i32> {
    let mut value = 0;
    for _ in 0..2 {
        let digit = chars
            .next()
            .ok_or_else(abrupt_end)?
            .to_digit(10)
            .ok_or_else(non_ascii_digit)?;
        value = value * 10 + digit as i32;
    }
    Ok(value)
}

fn parse_iana_component(chars: &mut Peekable<Chars<'_>>) -> bool {
    // Confirm leading Tz char
    if !chars.peek().is_some_and(is_tz_leading_char) {
        return false;
    }
    chars.next();

    while chars.peek().is_some_and(is_tz_char) {
        chars.next();
    }

    // Check for sub component and parse
    if chars.peek().is_some_and(is_slash) {
        chars.next();
        return parse_iana_component(chars);
    }

    // Confirm full source text has been parsed.
    chars.peek().is_none()
}

fn invalid_identifier() -> TemporalError {
    TemporalError::range().with_message("Invalid TimeZone Identifier")
}

fn abrupt_end() -> TemporalError {
    TemporalError::range().with_message("Abrupt end while parsing offset string")
}

fn non_ascii_digit() -> TemporalError {
    TemporalError::range().with_message("Non ascii digit found while parsing offset string")
}

fn is_ascii_sign(ch: &char) -> bool {
    *ch == '+' || *ch == '-'
}

fn is_slash(ch: &char) -> bool {
    *ch == '/'
}

fn is_tz_leading_char(ch: &char) -> bool {
    ch.is_ascii_alphabetic() || *ch == '.' || *ch == '_'
}

fn is_tz_char(ch: &char) -> bool {
    is_tz_leading_char(ch) || ch.is_ascii_digit() || *ch == '+' || *ch == '-'
}

#[cfg(test)]
mod tests {
    use super::parse_identifier;
    use crate::{components::UtcOffset, TimeZone};

    #[test]
    fn identifiers() {
        assert_eq!(parse_identifier("Z").unwrap(), TimeZone::Offset(UtcOffset::UTC));
        assert_eq!(
            parse_identifier("+05:30").unwrap(),
            TimeZone::Offset(UtcOffset::from_seconds(19_800).unwrap())
        );
        assert_eq!(
            parse_identifier("-00:00:30").unwrap(),
            TimeZone::Offset(UtcOffset::from_seconds(-30).unwrap())
        );
        assert_eq!(
            parse_identifier("America/Argentina/Buenos_Aires").unwrap(),
            TimeZone::Iana("America/Argentina/Buenos_Aires".into())
        );
        assert!(parse_identifier("+5").is_err());
        assert!(parse_identifier("+05:30x").is_err());
        assert!(parse_identifier("Europe/").is_err());
        assert!(parse_identifier("").is_err());
    }
}
