//! The temporal value types handled by the codec.
//!
//! Four mutually exclusive shapes are provided: a `PlainDate`, a `PlainTime`,
//! a `PlainDateTime` with no zone, and a `ZonedDateTime` carrying an offset or
//! a zone identifier. `TemporalValue` is the tagged union over the four.

mod date;
mod datetime;
mod time;
mod timezone;
mod value;
mod zoneddatetime;

#[doc(inline)]
pub use date::PlainDate;
#[doc(inline)]
pub use datetime::PlainDateTime;
#[doc(inline)]
pub use time::PlainTime;
#[doc(inline)]
pub use timezone::{TimeZone, UtcOffset};
#[doc(inline)]
pub use value::TemporalValue;
#[doc(inline)]
pub use zoneddatetime::ZonedDateTime;
