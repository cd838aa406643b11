//! Percentage to visual mapping: color tiers and the pie-chart icon.

pub mod svg;
pub mod tier;

pub use svg::{render_svg, DEFAULT_ICON_SIZE};
pub use tier::{classify, ColorTier, BG_COLOR, STROKE_COLOR};
