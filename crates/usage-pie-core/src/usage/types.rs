//! Usage API response types.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::UsageError;

/// Response body of the usage endpoint (only the fields we read)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsageResponse {
    /// Five-hour rolling window
    #[serde(default)]
    pub five_hour: Option<UsageWindow>,
}

/// A single rate-limit window
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsageWindow {
    /// Utilization percentage (nominally 0-100)
    #[serde(default)]
    pub utilization: Option<f64>,
    /// ISO 8601 timestamp when the window resets
    #[serde(default)]
    pub resets_at: Option<String>,
}

impl UsageResponse {
    /// Five-hour utilization, 0 when absent
    pub fn utilization(&self) -> f64 {
        self.five_hour
            .as_ref()
            .and_then(|w| w.utilization)
            .unwrap_or(0.0)
    }

    /// Parsed reset time. An absent or empty field is `Ok(None)`.
    pub fn resets_at(&self) -> Result<Option<DateTime<Utc>>, UsageError> {
        let raw = match self.five_hour.as_ref().and_then(|w| w.resets_at.as_deref()) {
            Some(s) if !s.trim().is_empty() => s.trim(),
            _ => return Ok(None),
        };
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| UsageError::ResponseFormat(format!("invalid resets_at {raw:?}: {e}")))
    }
}
