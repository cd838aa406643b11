//! Color tier classification.

/// Disk color behind a partially filled wedge
pub const BG_COLOR: &str = "#444";
/// Outline of the background disk
pub const STROKE_COLOR: &str = "#666";

/// Usage severity, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorTier {
    /// Low usage
    Green,
    /// Moderate usage
    Yellow,
    /// Near the limit
    Orange,
    /// Full or over the limit
    Red,
}

/// Inclusive lower bounds, highest first. The first match wins and anything
/// below the last bound (negative and NaN included) falls through to Green.
const THRESHOLDS: [(f64, ColorTier); 3] = [
    (100.0, ColorTier::Red),
    (85.0, ColorTier::Orange),
    (50.0, ColorTier::Yellow),
];

impl ColorTier {
    /// Fill color for this tier
    pub fn color(self) -> &'static str {
        match self {
            ColorTier::Green => "#77dd77",
            ColorTier::Yellow => "#fdfd96",
            ColorTier::Orange => "#ff8347",
            ColorTier::Red => "#ff6961",
        }
    }
}

/// Classify a usage percentage. Total over all `f64` values.
pub fn classify(pct: f64) -> ColorTier {
    THRESHOLDS
        .iter()
        .find(|(bound, _)| pct >= *bound)
        .map(|(_, tier)| *tier)
        .unwrap_or(ColorTier::Green)
}
