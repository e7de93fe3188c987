//! This module implements the textual grammars of the codec.
//!
//! Parsing picks a shape by a structural scan of the input before any grammar
//! is applied:
//!
//! 1. No `-` anywhere: a strict `HH:MM:SS` time.
//! 2. No `:` anywhere: a strict `YYYY-MM-DD` date.
//! 3. Otherwise a full date-time, parsed with `ixdtf` after the first
//!    "digit, space, digit" run has had its space replaced by `T`.
//!
//! Formatting is implemented with `Writeable` records that hold nothing but
//! the fields they write, so every formatter here can be shared freely.

use crate::{
    components::{PlainDate, PlainDateTime, PlainTime, TemporalValue, TimeZone, UtcOffset, ZonedDateTime},
    error::Grammar,
    iso::{IsoDate, IsoDateTime, IsoTime},
    options::{DisplayOffset, DisplayTimeZone},
    Sign, TemporalError, TemporalResult,
};
use alloc::{borrow::Cow, string::String, vec::Vec};
use ixdtf::{
    encoding::Utf8,
    parsers::IxdtfParser,
    records::{Annotation, IxdtfParseRecord},
};
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

pub(crate) mod timezone;

/// Parses `text` into the most specific `TemporalValue` it represents.
pub fn parse(text: &str) -> TemporalResult<TemporalValue> {
    if !text.contains('-') {
        return parse_time(text).map(|iso| TemporalValue::Time(PlainTime::new_unchecked(iso)));
    }
    if !text.contains(':') {
        return parse_date(text).map(|iso| TemporalValue::Date(PlainDate::new_unchecked(iso)));
    }

    let parsed = parse_date_time(text)?;
    let datetime = PlainDateTime::new_unchecked(parsed.iso);
    Ok(match parsed.time_zone {
        Some(time_zone) => TemporalValue::Zoned(ZonedDateTime::new_unchecked(
            datetime,
            parsed.offset,
            time_zone,
        )),
        None => TemporalValue::DateTime(datetime),
    })
}

/// Formats `value` into its canonical text.
///
/// Zone information is never written; see `ZonedDateTime::to_ixdtf_string`
/// for a zone-aware rendering.
pub fn format(value: &TemporalValue) -> String {
    value.write_to_string().into_owned()
}

// ==== Strict grammars ====

/// A minimal byte cursor for the strict grammars.
struct Cursor<'a> {
    source: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<u8> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    fn expect(&mut self, expected: u8) -> Option<()> {
        (self.next()? == expected).then_some(())
    }

    /// Reads exactly `count` ASCII digits as a number.
    fn digits(&mut self, count: usize) -> Option<u32> {
        let mut value = 0u32;
        for _ in 0..count {
            let ch = self.next()?;
            if !ch.is_ascii_digit() {
                return None;
            }
            value = value * 10 + u32::from(ch - b'0');
        }
        Some(value)
    }

    fn is_done(&self) -> bool {
        self.pos == self.source.len()
    }
}

/// Parses `YYYY-MM-DD`, or `±YYYYYY-MM-DD` for years outside `0..=9999`.
pub(crate) fn parse_date(text: &str) -> TemporalResult<IsoDate> {
    let malformed = || TemporalError::malformed(text, Grammar::Date);
    let mut cursor = Cursor::new(text);

    let year = match cursor.peek() {
        Some(sign @ (b'+' | b'-')) => {
            cursor.next();
            let digits = cursor.digits(6).ok_or_else(malformed)? as i32;
            // -000000 is not a valid extended year.
            if sign == b'-' && digits == 0 {
                return Err(malformed());
            }
            if sign == b'-' {
                -digits
            } else {
                digits
            }
        }
        _ => cursor.digits(4).ok_or_else(malformed)? as i32,
    };

    let (month, day) = (|| {
        cursor.expect(b'-')?;
        let month = cursor.digits(2)?;
        cursor.expect(b'-')?;
        let day = cursor.digits(2)?;
        cursor.is_done().then_some((month as u8, day as u8))
    })()
    .ok_or_else(malformed)?;

    IsoDate::try_new(year, month, day).map_err(|_| malformed())
}

/// Parses `HH:MM:SS`.
pub(crate) fn parse_time(text: &str) -> TemporalResult<IsoTime> {
    let malformed = || TemporalError::malformed(text, Grammar::Time);
    let mut cursor = Cursor::new(text);

    let (hour, minute, second) = (|| {
        let hour = cursor.digits(2)?;
        cursor.expect(b':')?;
        let minute = cursor.digits(2)?;
        cursor.expect(b':')?;
        let second = cursor.digits(2)?;
        cursor.is_done().then_some((hour as u8, minute as u8, second as u8))
    })()
    .ok_or_else(malformed)?;

    IsoTime::try_new(hour, minute, second).map_err(|_| malformed())
}

// ==== Date-time grammar ====

/// Intermediate result of parsing a date-time string.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParsedDateTime {
    pub(crate) iso: IsoDateTime,
    /// The UTC offset written in the source, if any.
    pub(crate) offset: Option<UtcOffset>,
    /// The zone derived from the source, if any.
    pub(crate) time_zone: Option<TimeZone>,
}

/// Replaces the space of the first "digit, space, digit" run with `T`.
pub(crate) fn normalize_separator(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let position = bytes.windows(3).position(|window| {
        window[0].is_ascii_digit() && window[1] == b' ' && window[2].is_ascii_digit()
    });

    match position {
        Some(index) => {
            let mut normalized: Vec<u8> = bytes.to_vec();
            normalized[index + 1] = b'T';
            // Only an ASCII space was replaced by an ASCII letter.
            Cow::Owned(String::from_utf8_lossy(&normalized).into_owned())
        }
        None => Cow::Borrowed(text),
    }
}

/// Parses a date-time with an optional fraction and an optional zone.
pub(crate) fn parse_date_time(text: &str) -> TemporalResult<ParsedDateTime> {
    let malformed = || TemporalError::malformed(text, Grammar::DateTime);
    // Only `.` introduces a fraction.
    if text.contains(',') {
        return Err(malformed());
    }
    let normalized = normalize_separator(text);

    let record = parse_ixdtf(&normalized).ok_or_else(malformed)?;
    build_date_time(record).ok_or_else(malformed)
}

/// Runs `ixdtf` over `source`, failing on any key-value annotation.
///
/// Only the time zone annotation is part of the grammar; calendars and
/// unknown keys are rejected whether or not they are marked critical.
fn parse_ixdtf(source: &str) -> Option<IxdtfParseRecord<'_, Utf8>> {
    fn cast_handler<'a>(
        _: &mut IxdtfParser<'a, Utf8>,
        handler: impl FnMut(Annotation<'a, Utf8>) -> Option<Annotation<'a, Utf8>>,
    ) -> impl FnMut(Annotation<'a, Utf8>) -> Option<Annotation<'a, Utf8>> {
        handler
    }

    let mut annotated = false;
    let mut parser = IxdtfParser::from_str(source);
    let handler = cast_handler(&mut parser, |_| {
        annotated = true;
        None
    });
    let record = parser.parse_with_annotation_handler(handler).ok()?;

    (!annotated).then_some(record)
}

fn build_date_time(record: IxdtfParseRecord<'_, Utf8>) -> Option<ParsedDateTime> {
    let (date, time) = (record.date?, record.time?);

    let date = IsoDate::try_new(date.year, date.month, date.day).ok()?;
    let iso_time = IsoTime::try_new(time.hour, time.minute, time.second).ok()?;
    let nanosecond = match time.fraction {
        Some(fraction) => fraction.to_nanoseconds()?,
        None => 0,
    };
    let iso = IsoDateTime::try_new(date, iso_time, nanosecond).ok()?;

    let offset = match record.offset {
        Some(offset) => Some(timezone::offset_from_record(offset)?),
        None => None,
    };
    let annotated = match record.tz {
        Some(annotation) => Some(timezone::time_zone_from_annotation(annotation)?),
        None => None,
    };

    Some(ParsedDateTime {
        iso,
        offset,
        time_zone: annotated.or_else(|| offset.map(TimeZone::Offset)),
    })
}

// ==== Formatting records ====

#[derive(Debug, Default)]
pub struct IxdtfStringBuilder<'a> {
    inner: FormattableIxdtf<'a>,
}

impl<'a> IxdtfStringBuilder<'a> {
    pub fn with_date(mut self, iso: IsoDate) -> Self {
        self.inner.date = Some(FormattableDate(iso.year, iso.month, iso.day));
        self
    }

    pub fn with_time(mut self, time: IsoTime, nanosecond: u32, precision: Precision) -> Self {
        self.inner.time = Some(FormattableTime {
            hour: time.hour,
            minute: time.minute,
            second: time.second,
            nanosecond,
            precision,
        });
        self
    }

    pub fn with_offset(mut self, offset: UtcOffset, show: DisplayOffset) -> Self {
        self.inner.utc_offset = Some(FormattableUtcOffset {
            show,
            offset: offset.to_formattable(),
        });
        self
    }

    pub fn with_timezone(mut self, timezone: &'a str, show: DisplayTimeZone) -> Self {
        self.inner.timezone = Some(FormattableTimeZone { show, timezone });
        self
    }

    pub fn build(self) -> String {
        self.inner.write_to_string().into_owned()
    }
}

impl Writeable for IxdtfStringBuilder<'_> {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.inner.write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.inner.writeable_length_hint()
    }
}

/// How much of a time is written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precision {
    /// Seconds, then a fraction with trailing zeros removed if non-zero.
    #[default]
    Auto,
    /// Seconds and no fraction.
    Second,
    /// Hours and minutes only.
    Minute,
}

#[derive(Debug)]
pub struct FormattableTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
    pub precision: Precision,
}

impl Writeable for FormattableTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_padded_u8(self.hour, sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.minute, sink)?;
        if self.precision == Precision::Minute {
            return Ok(());
        }
        sink.write_char(':')?;
        write_padded_u8(self.second, sink)?;
        if self.nanosecond == 0 || self.precision == Precision::Second {
            return Ok(());
        }
        sink.write_char('.')?;
        write_nanosecond(self.nanosecond, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if self.precision == Precision::Minute {
            return LengthHint::exact(5);
        }
        if self.nanosecond == 0 || self.precision == Precision::Second {
            return LengthHint::exact(8);
        }
        LengthHint::between(10, 18)
    }
}

#[derive(Debug)]
pub struct FormattableUtcOffset {
    pub show: DisplayOffset,
    pub offset: FormattableOffset,
}

impl Writeable for FormattableUtcOffset {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if self.show == DisplayOffset::Never {
            return Ok(());
        }
        self.offset.write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if self.show == DisplayOffset::Never {
            return LengthHint::exact(0);
        }
        self.offset.writeable_length_hint()
    }
}

#[derive(Debug)]
pub struct FormattableOffset {
    pub sign: Sign,
    pub time: FormattableTime,
}

impl Writeable for FormattableOffset {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        match self.sign {
            Sign::Negative => sink.write_char('-')?,
            Sign::Positive => sink.write_char('+')?,
        }
        self.time.write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.time.writeable_length_hint() + 1
    }
}

fn write_padded_u8<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

/// Writes the nine nanosecond digits up to the last non-zero digit.
fn write_nanosecond<W: core::fmt::Write + ?Sized>(
    nanoseconds: u32,
    sink: &mut W,
) -> core::fmt::Result {
    let (digits, precision) = u32_to_digits(nanoseconds);
    write_digit_slice_to_precision(digits, 0, precision, sink)
}

/// Splits `value` into nine digits, returning the digits and the count up to
/// and including the last non-zero digit.
pub fn u32_to_digits(mut value: u32) -> ([u8; 9], usize) {
    let mut output = [0; 9];
    let mut precision = 0;
    let mut i = 9;
    while i != 0 {
        let v = (value % 10) as u8;
        value /= 10;
        if precision == 0 && v != 0 {
            precision = i;
        }
        output[i - 1] = v;
        i -= 1;
    }

    (output, precision)
}

pub fn write_digit_slice_to_precision<W: core::fmt::Write + ?Sized>(
    digits: [u8; 9],
    base: usize,
    precision: usize,
    sink: &mut W,
) -> core::fmt::Result {
    for digit in digits.iter().take(precision).skip(base) {
        digit.write_to(sink)?;
    }
    Ok(())
}

#[derive(Debug)]
pub struct FormattableDate(pub i32, pub u8, pub u8);

impl Writeable for FormattableDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_year(self.0, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.1, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.2, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let year_length = if (0..=9999).contains(&self.0) { 4 } else { 7 };

        LengthHint::exact(6 + year_length)
    }
}

fn write_year<W: core::fmt::Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    if (0..=9999).contains(&year) {
        write_four_digit_year(year, sink)
    } else {
        write_extended_year(year, sink)
    }
}

fn write_four_digit_year<W: core::fmt::Write + ?Sized>(
    mut y: i32,
    sink: &mut W,
) -> core::fmt::Result {
    (y / 1_000).write_to(sink)?;
    y %= 1_000;
    (y / 100).write_to(sink)?;
    y %= 100;
    (y / 10).write_to(sink)?;
    y %= 10;
    y.write_to(sink)
}

fn write_extended_year<W: core::fmt::Write + ?Sized>(y: i32, sink: &mut W) -> core::fmt::Result {
    let sign = if y < 0 { '-' } else { '+' };
    sink.write_char(sign)?;
    let (digits, _) = u32_to_digits(y.unsigned_abs());
    write_digit_slice_to_precision(digits, 3, 9, sink)
}

#[derive(Debug)]
pub struct FormattableTimeZone<'a> {
    pub show: DisplayTimeZone,
    pub timezone: &'a str,
}

impl Writeable for FormattableTimeZone<'_> {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if self.show == DisplayTimeZone::Never {
            return Ok(());
        }
        sink.write_char('[')?;
        if self.show == DisplayTimeZone::Critical {
            sink.write_char('!')?;
        }
        sink.write_str(self.timezone)?;
        sink.write_char(']')
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if self.show == DisplayTimeZone::Never {
            return LengthHint::exact(0);
        }
        let critical = (self.show == DisplayTimeZone::Critical) as usize;
        LengthHint::exact(2 + critical + self.timezone.len())
    }
}

#[derive(Debug, Default)]
pub struct FormattableIxdtf<'a> {
    pub date: Option<FormattableDate>,
    pub time: Option<FormattableTime>,
    pub utc_offset: Option<FormattableUtcOffset>,
    pub timezone: Option<FormattableTimeZone<'a>>,
}

impl Writeable for FormattableIxdtf<'_> {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if let Some(date) = &self.date {
            date.write_to(sink)?;
        }
        if let Some(time) = &self.time {
            if self.date.is_some() {
                sink.write_char('T')?;
            }
            time.write_to(sink)?;
        }
        if let Some(offset) = &self.utc_offset {
            offset.write_to(sink)?;
        }
        if let Some(timezone) = &self.timezone {
            timezone.write_to(sink)?;
        }

        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let date_length = self
            .date
            .as_ref()
            .map(|d| d.writeable_length_hint())
            .unwrap_or(LengthHint::exact(0));
        let time_length = self
            .time
            .as_ref()
            .map(|t| {
                let t_present = self.date.is_some() as usize;
                t.writeable_length_hint() + t_present
            })
            .unwrap_or(LengthHint::exact(0));
        let utc_length = self
            .utc_offset
            .as_ref()
            .map(|utc| utc.writeable_length_hint())
            .unwrap_or(LengthHint::exact(0));
        let timezone_length = self
            .timezone
            .as_ref()
            .map(|tz| tz.writeable_length_hint())
            .unwrap_or(LengthHint::exact(0));

        date_length + time_length + utc_length + timezone_length
    }
}

impl_display_with_writeable!(FormattableIxdtf<'_>);
impl_display_with_writeable!(FormattableDate);
impl_display_with_writeable!(FormattableTime);
impl_display_with_writeable!(FormattableUtcOffset);
impl_display_with_writeable!(FormattableOffset);
impl_display_with_writeable!(FormattableTimeZone<'_>);

#[cfg(test)]
mod tests {
    use super::{
        format, normalize_separator, parse, FormattableDate, FormattableOffset, FormattableTime,
        Precision,
    };
    use crate::{
        components::{PlainDate, PlainDateTime, PlainTime, TemporalValue, TimeZone, UtcOffset},
        error::{ErrorKind, Grammar, Shape},
        Sign,
    };
    use alloc::format;
    use writeable::assert_writeable_eq;

    fn date_time(nanosecond: u32) -> TemporalValue {
        TemporalValue::DateTime(
            PlainDateTime::try_new(
                PlainDate::try_new(2024, 1, 2).unwrap(),
                PlainTime::try_new(13, 45, 7).unwrap(),
                nanosecond,
            )
            .unwrap(),
        )
    }

    #[test]
    fn fraction_trimming() {
        assert_eq!(format(&date_time(120_000_000)), "2024-01-02T13:45:07.12");
        assert_eq!(format(&date_time(0)), "2024-01-02T13:45:07");
        assert_eq!(format(&date_time(5)), "2024-01-02T13:45:07.000000005");
        assert_eq!(format(&date_time(123_456_789)), "2024-01-02T13:45:07.123456789");
        assert_eq!(format(&date_time(100)), "2024-01-02T13:45:07.0000001");
    }

    #[test]
    fn date_and_time_format() {
        let date = TemporalValue::Date(PlainDate::try_new(987, 3, 9).unwrap());
        assert_eq!(format(&date), "0987-03-09");
        let time = TemporalValue::Time(PlainTime::try_new(0, 5, 9).unwrap());
        assert_eq!(format(&time), "00:05:09");
    }

    #[test]
    fn shape_disambiguation() {
        assert_eq!(parse("13:45:07").unwrap().shape(), Shape::Time);
        assert_eq!(parse("2024-01-02").unwrap().shape(), Shape::Date);
        assert_eq!(parse("2024-01-02T13:45:07").unwrap().shape(), Shape::DateTime);
        assert_eq!(parse("2024-01-02T13:45:07Z").unwrap().shape(), Shape::ZonedDateTime);
        assert_eq!(
            parse("2024-01-02T13:45:07+01:00").unwrap().shape(),
            Shape::ZonedDateTime
        );
        assert_eq!(
            parse("2024-01-02T13:45:07[Europe/Paris]").unwrap().shape(),
            Shape::ZonedDateTime
        );
    }

    #[test]
    fn legacy_separator_normalization() {
        assert_eq!(
            parse("2024-01-02 13:45:07").unwrap(),
            parse("2024-01-02T13:45:07").unwrap()
        );
        assert_eq!(
            normalize_separator("2024-01-02 13:45:07 extra 1 2"),
            "2024-01-02T13:45:07 extra 1 2"
        );
        assert_eq!(normalize_separator("2024-01-02T13:45:07"), "2024-01-02T13:45:07");
        // Only the first match is replaced, so trailing text stays malformed.
        assert!(parse("2024-01-02 13:45:07 1").is_err());
    }

    #[test]
    fn round_trips() {
        let values = [
            TemporalValue::Date(PlainDate::try_new(2024, 2, 29).unwrap()),
            TemporalValue::Date(PlainDate::try_new(-12, 12, 31).unwrap()),
            TemporalValue::Date(PlainDate::try_new(10_000, 1, 1).unwrap()),
            TemporalValue::Time(PlainTime::try_new(23, 59, 59).unwrap()),
            TemporalValue::Time(PlainTime::try_new(0, 0, 0).unwrap()),
            date_time(0),
            date_time(1),
            date_time(999_999_999),
        ];
        for value in values {
            assert_eq!(parse(&format(&value)).unwrap(), value);
        }
    }

    #[test]
    fn zoned_parsing() {
        let TemporalValue::Zoned(zoned) = parse("2024-01-02T13:45:07.5-05:30").unwrap() else {
            panic!("expected a zoned value");
        };
        let offset = UtcOffset::from_seconds(-(5 * 3600 + 30 * 60)).unwrap();
        assert_eq!(zoned.offset(), Some(offset));
        assert_eq!(zoned.time_zone(), &TimeZone::Offset(offset));
        assert_eq!(zoned.datetime().nanosecond(), 500_000_000);

        let TemporalValue::Zoned(zoned) = parse("2024-01-02T13:45:07+01:00[Europe/Paris]").unwrap()
        else {
            panic!("expected a zoned value");
        };
        assert_eq!(zoned.offset(), UtcOffset::from_seconds(3600).ok());
        assert_eq!(zoned.time_zone(), &TimeZone::Iana("Europe/Paris".into()));

        let TemporalValue::Zoned(zoned) = parse("2024-01-02T13:45:07Z").unwrap() else {
            panic!("expected a zoned value");
        };
        assert_eq!(zoned.time_zone(), &TimeZone::Offset(UtcOffset::UTC));
    }

    #[test]
    fn malformed_literals() {
        let err = parse("not-a-date").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedLiteral);
        assert_eq!(err.literal(), Some("not-a-date"));

        let cases = [
            ("13:45", Grammar::Time),
            ("13:45:07.5", Grammar::Time),
            ("24:00:00", Grammar::Time),
            ("13:45:60", Grammar::Time),
            ("1:45:07", Grammar::Time),
            ("2024-1-02", Grammar::Date),
            ("2024-02-30", Grammar::Date),
            ("2024-13-01", Grammar::Date),
            ("-000000-01-01", Grammar::Date),
            ("2024-01-02T25:00:00", Grammar::DateTime),
            ("2024-01-02T13:45:60", Grammar::DateTime),
            ("2024-01-02T13:45:07.1234567891", Grammar::DateTime),
            ("2024-01-02T13:45:07[u-ca=gregory]", Grammar::DateTime),
            ("2024-01-02T13:45:07[!u-ca=gregory]", Grammar::DateTime),
            ("2024-01-02T13:45:07[foo=bar]", Grammar::DateTime),
            ("2024-01-02T13:45:07[Europe/Paris][foo=bar]", Grammar::DateTime),
            ("2024-01-02T13:45:07,5", Grammar::DateTime),
            ("2024-01-02 13:45:07,5", Grammar::DateTime),
            ("2024-01-02X13:45:07", Grammar::DateTime),
        ];
        for (text, grammar) in cases {
            let err = parse(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedLiteral, "{text}");
            assert_eq!(
                err.context(),
                Some(&crate::error::ErrorContext::Literal {
                    text: text.into(),
                    grammar
                }),
                "{text}"
            );
        }
    }

    #[test]
    fn extended_years() {
        assert_eq!(
            parse("+010000-01-01").unwrap(),
            TemporalValue::Date(PlainDate::try_new(10_000, 1, 1).unwrap())
        );
        assert_eq!(
            parse("-000001-06-15").unwrap(),
            TemporalValue::Date(PlainDate::try_new(-1, 6, 15).unwrap())
        );
    }

    #[test]
    fn offset_string() {
        let offset = FormattableOffset {
            sign: Sign::Positive,
            time: FormattableTime {
                hour: 4,
                minute: 0,
                second: 0,
                nanosecond: 0,
                precision: Precision::Minute,
            },
        };
        assert_writeable_eq!(offset, "+04:00");

        let offset = FormattableOffset {
            sign: Sign::Negative,
            time: FormattableTime {
                hour: 5,
                minute: 0,
                second: 30,
                nanosecond: 0,
                precision: Precision::Second,
            },
        };
        assert_writeable_eq!(offset, "-05:00:30");
    }

    #[test]
    fn time_precision() {
        let time = FormattableTime {
            hour: 5,
            minute: 0,
            second: 0,
            nanosecond: 123_050_000,
            precision: Precision::Auto,
        };
        assert_writeable_eq!(time, "05:00:00.12305");

        let time = FormattableTime {
            hour: 5,
            minute: 0,
            second: 0,
            nanosecond: 123_050_000,
            precision: Precision::Second,
        };
        assert_writeable_eq!(time, "05:00:00");
    }

    #[test]
    fn date_string() {
        let date = FormattableDate(2024, 12, 8);
        assert_writeable_eq!(date, "2024-12-08");

        let date = FormattableDate(987654, 12, 8);
        assert_writeable_eq!(date, "+987654-12-08");

        let date = FormattableDate(-987654, 12, 8);
        assert_writeable_eq!(date, "-987654-12-08");

        let date = FormattableDate(0, 12, 8);
        assert_writeable_eq!(date, "0000-12-08");

        let date = FormattableDate(10_000, 12, 8);
        assert_writeable_eq!(date, "+010000-12-08");
    }
}
