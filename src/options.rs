//! Options for rendering zone-aware values.
//!
//! The canonical codec output never includes a zone. These options only
//! apply to `ZonedDateTime::to_ixdtf_string`.

/// Whether the UTC offset is written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOffset {
    /// Write the offset when one is known.
    #[default]
    Auto,
    /// Never write the offset.
    Never,
}

/// Whether the zone identifier annotation is written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisplayTimeZone {
    /// Write `[zone]` for named zones.
    #[default]
    Auto,
    /// Never write the annotation.
    Never,
    /// Write `[!zone]`.
    Critical,
}

/// Options for `ZonedDateTime::to_ixdtf_string`.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ToStringOptions {
    pub offset: DisplayOffset,
    pub time_zone: DisplayTimeZone,
}

impl ToStringOptions {
    pub const fn new(offset: DisplayOffset, time_zone: DisplayTimeZone) -> Self {
        Self { offset, time_zone }
    }
}
