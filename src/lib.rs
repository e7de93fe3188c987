//! The `iso_codec` crate converts between a restricted ISO 8601 text form and
//! typed temporal values, and bridges those values to legacy date, time and
//! timestamp values.
//!
//! ```rust
//! use iso_codec::{format, parse, TemporalValue};
//!
//! let value = parse("2024-01-02 13:45:07.120").unwrap();
//! assert!(matches!(value, TemporalValue::DateTime(_)));
//! assert_eq!(format(&value), "2024-01-02T13:45:07.12");
//!
//! assert!(matches!(parse("13:45:07").unwrap(), TemporalValue::Time(_)));
//! assert!(matches!(parse("2024-01-02").unwrap(), TemporalValue::Date(_)));
//! assert!(matches!(parse("2024-01-02T13:45:07Z").unwrap(), TemporalValue::Zoned(_)));
//! ```
//!
//! Accepted text:
//!
//! ```text
//! date       = YYYY "-" MM "-" DD
//! time       = HH ":" MM ":" SS
//! fraction   = "." 1*9DIGIT
//! datetime   = date ("T" | " ") time [fraction] [zone]
//! zone       = "Z" | ("+"|"-") HH ":" MM | "[" zone-id "]"
//! ```
//!
//! Formatting always writes `date`, `time`, or `date "T" time [fraction]`,
//! where the fraction has its trailing zeros removed and is omitted entirely
//! when zero.
//!
//! Legacy values are handled by [`legacy::LegacyCodec`], which resolves
//! wall-clock times in the host's default zone.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::should_implement_trait
)]

extern crate alloc;
extern crate core;
#[cfg(test)]
extern crate std;

pub mod error;
pub mod host;
pub mod iso;
pub mod legacy;
pub mod options;
pub mod parsers;

#[cfg(feature = "sys")]
pub mod sys;

mod components;

#[doc(inline)]
pub use error::TemporalError;

/// The `iso_codec` result type
pub type TemporalResult<T> = Result<T, TemporalError>;

pub use crate::components::{
    PlainDate, PlainDateTime, PlainTime, TemporalValue, TimeZone, UtcOffset, ZonedDateTime,
};
#[doc(inline)]
pub use crate::parsers::{format, parse};

/// A general Sign type.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    #[default]
    Positive = 1,
    Negative = -1,
}

// Relevant numeric constants
/// Nanoseconds per second constant: 1e+9
pub const NS_PER_SECOND: u32 = 1_000_000_000;
/// Nanoseconds per millisecond constant: 1e+6
pub const NS_PER_MILLISECOND: u32 = 1_000_000;
/// Milliseconds per second constant: 1e+3
pub const MS_PER_SECOND: u32 = 1_000;
