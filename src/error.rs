//! This module implements `TemporalError`.

use alloc::{borrow::Cow, string::String};
use core::fmt;

/// The shape of a `TemporalValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Date,
    Time,
    DateTime,
    ZonedDateTime,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "date-time",
            Self::ZonedDateTime => "zoned date-time",
        })
    }
}

/// The three projections available to legacy values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyKind {
    Date,
    Time,
    Timestamp,
}

impl fmt::Display for LegacyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Date => "legacy date",
            Self::Time => "legacy time",
            Self::Timestamp => "legacy timestamp",
        })
    }
}

/// The grammar a literal was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// `YYYY-MM-DD`
    Date,
    /// `HH:MM:SS`
    Time,
    /// `date ("T" | " ") time [fraction] [zone]`
    DateTime,
}

impl Grammar {
    /// Returns the informal pattern for this grammar.
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Date => "YYYY-MM-DD",
            Self::Time => "HH:MM:SS",
            Self::DateTime => "YYYY-MM-DD'T'HH:MM:SS[.fraction][zone]",
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

/// `TemporalError`'s error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// RangeError.
    Range,
    /// A literal did not match the grammar it was parsed against.
    MalformedLiteral,
    /// A value cannot be projected onto the requested legacy shape.
    UnsupportedProjection,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Range => "RangeError",
            Self::MalformedLiteral => "MalformedTemporalLiteral",
            Self::UnsupportedProjection => "UnsupportedLegacyProjection",
        })
    }
}

/// Structured context attached to an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorContext {
    /// The offending text and the grammar it failed against.
    Literal { text: String, grammar: Grammar },
    /// The requested legacy projection and the shape actually supplied.
    Projection { requested: LegacyKind, actual: Shape },
}

/// The error type for `iso_codec`.
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
    context: Option<ErrorContext>,
}

impl TemporalError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
            context: None,
        }
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create an error for `text` failing to match `grammar`.
    #[must_use]
    pub fn malformed(text: &str, grammar: Grammar) -> Self {
        Self {
            kind: ErrorKind::MalformedLiteral,
            msg: Cow::Owned(alloc::format!(
                "'{text}' does not match the expected format {grammar}"
            )),
            context: Some(ErrorContext::Literal {
                text: text.into(),
                grammar,
            }),
        }
    }

    /// Create an error for an unsupported legacy projection.
    #[must_use]
    pub fn unsupported_projection(requested: LegacyKind, actual: Shape) -> Self {
        Self {
            kind: ErrorKind::UnsupportedProjection,
            msg: Cow::Owned(alloc::format!(
                "a {actual} value cannot be projected to a {requested}"
            )),
            context: Some(ErrorContext::Projection { requested, actual }),
        }
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Returns the structured context of this error, if any.
    #[inline]
    #[must_use]
    pub fn context(&self) -> Option<&ErrorContext> {
        self.context.as_ref()
    }

    /// Returns the offending literal for a `MalformedLiteral` error.
    #[must_use]
    pub fn literal(&self) -> Option<&str> {
        match &self.context {
            Some(ErrorContext::Literal { text, .. }) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for TemporalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for TemporalError {}

#[cfg(test)]
mod tests {
    use super::{ErrorContext, ErrorKind, Grammar, LegacyKind, Shape, TemporalError};
    use alloc::string::ToString;

    #[test]
    fn malformed_carries_text_and_grammar() {
        let err = TemporalError::malformed("not-a-date", Grammar::Date);
        assert_eq!(err.kind(), ErrorKind::MalformedLiteral);
        assert_eq!(err.literal(), Some("not-a-date"));
        assert_eq!(
            err.to_string(),
            "MalformedTemporalLiteral: 'not-a-date' does not match the expected format YYYY-MM-DD"
        );
    }

    #[test]
    fn projection_context() {
        let err = TemporalError::unsupported_projection(LegacyKind::Time, Shape::Date);
        assert_eq!(err.kind(), ErrorKind::UnsupportedProjection);
        assert_eq!(
            err.context(),
            Some(&ErrorContext::Projection {
                requested: LegacyKind::Time,
                actual: Shape::Date
            })
        );
        assert_eq!(err.literal(), None);
    }

    #[test]
    fn bare_kind_display() {
        assert_eq!(TemporalError::range().to_string(), "RangeError");
        assert_eq!(
            TemporalError::range().with_message("out of range").to_string(),
            "RangeError: out of range"
        );
    }
}
