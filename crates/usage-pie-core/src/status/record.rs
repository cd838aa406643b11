//! Waybar-compatible status record.

use std::fmt::Display;

use serde::Serialize;

/// Text shown while the sprite background carries the icon
pub const PLACEHOLDER_GLYPH: &str = " ";
/// Text shown when usage could not be determined
pub const ERROR_GLYPH: &str = "?";

/// Custom module output understood by Waybar's `return-type: json`.
///
/// `class` and `percentage` are omitted from JSON on the degraded path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusRecord {
    /// Bar text
    pub text: String,
    /// Hover text
    pub tooltip: String,
    /// Sprite class (e.g. `p40`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Raw utilization as reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

impl StatusRecord {
    /// Record for a successful fetch
    pub fn new(tooltip: impl Into<String>, class: impl Into<String>, percentage: f64) -> Self {
        Self {
            text: PLACEHOLDER_GLYPH.to_string(),
            tooltip: tooltip.into(),
            class: Some(class.into()),
            percentage: Some(percentage),
        }
    }

    /// Record shown when anything on the status path failed
    pub fn degraded(err: &dyn Display) -> Self {
        Self {
            text: ERROR_GLYPH.to_string(),
            tooltip: err.to_string(),
            class: None,
            percentage: None,
        }
    }

    /// Serialize as a single JSON line (no trailing newline)
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            serde_json::json!({
                "text": ERROR_GLYPH,
                "tooltip": format!("serialization failed: {e}"),
            })
            .to_string()
        })
    }
}
