//! Core library for usage-pie.
//!
//! - `render`: percentage to color tier and pie-chart SVG
//! - `sprite`: sprite sheet layout, stylesheet rules and the composer seam
//! - `usage`: credentials, the usage API client and response types
//! - `status`: the status bar record and the degrading emitter

pub mod error;
pub mod render;
pub mod sprite;
pub mod status;
pub mod usage;

pub use error::{RenderError, UsageError};
