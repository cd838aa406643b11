//! Status bar output: one JSON record per invocation.

pub mod emitter;
pub mod record;

pub use emitter::{emit, format_tooltip_in};
pub use record::{StatusRecord, ERROR_GLYPH, PLACEHOLDER_GLYPH};
