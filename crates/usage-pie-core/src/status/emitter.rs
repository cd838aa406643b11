//! Default run mode: credentials -> fetch -> record.
//!
//! Nothing here returns an error to the caller. Any failure becomes a
//! degraded record so the status bar keeps rendering on an expired token or
//! an offline network.

use std::fmt::Display;
use std::path::Path;

use chrono::{DateTime, Local, TimeZone, Utc};
use tracing::{debug, warn};

use super::record::StatusRecord;
use crate::error::UsageError;
use crate::sprite::{class_name, sprite_percentage};
use crate::usage::{read_token, UsageClient, UsageResponse};

/// Fetch usage and build the status record, degrading on any failure
pub fn emit(credentials: &Path, client: &dyn UsageClient, step: u32) -> StatusRecord {
    match fetch_record(credentials, client, step) {
        Ok(record) => record,
        Err(e) => {
            warn!("Usage unavailable: {}", e);
            StatusRecord::degraded(&e)
        }
    }
}

fn fetch_record(
    credentials: &Path,
    client: &dyn UsageClient,
    step: u32,
) -> Result<StatusRecord, UsageError> {
    let token = read_token(credentials)?;
    let usage = client.fetch(&token)?;
    build_record(&usage, step, &Local)
}

/// Build the record for a decoded response, formatting the reset time in `tz`
fn build_record<Tz>(usage: &UsageResponse, step: u32, tz: &Tz) -> Result<StatusRecord, UsageError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let pct = usage.utilization();
    let reset = usage.resets_at()?;
    let sprite_pct = sprite_percentage(pct, step);
    debug!("Utilization {}% -> sprite {}", pct, sprite_pct);

    Ok(StatusRecord::new(
        format_tooltip_in(pct, reset, tz),
        class_name(sprite_pct),
        pct,
    ))
}

/// `5h: 42%`, plus `\nResets: YYYY-MM-DD HH:MM` in `tz` when a reset is known
pub fn format_tooltip_in<Tz>(pct: f64, reset: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut tooltip = format!("5h: {pct:.0}%");
    if let Some(reset) = reset {
        let local = reset.with_timezone(tz);
        tooltip.push_str(&format!("\nResets: {}", local.format("%Y-%m-%d %H:%M")));
    }
    tooltip
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{ERROR_GLYPH, PLACEHOLDER_GLYPH};
    use chrono::FixedOffset;
    use std::cell::RefCell;
    use std::fs;

    /// Returns a canned response (or error) and remembers the token it saw
    struct MockClient {
        response: Result<&'static str, fn() -> UsageError>,
        seen_token: RefCell<Option<String>>,
    }

    impl MockClient {
        fn ok(body: &'static str) -> Self {
            Self {
                response: Ok(body),
                seen_token: RefCell::new(None),
            }
        }

        fn failing(err: fn() -> UsageError) -> Self {
            Self {
                response: Err(err),
                seen_token: RefCell::new(None),
            }
        }
    }

    impl UsageClient for MockClient {
        fn fetch(&self, token: &str) -> Result<UsageResponse, UsageError> {
            *self.seen_token.borrow_mut() = Some(token.to_string());
            match &self.response {
                Ok(body) => serde_json::from_str(body)
                    .map_err(|e| UsageError::ResponseFormat(e.to_string())),
                Err(make) => Err(make()),
            }
        }
    }

    fn write_credentials(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(".credentials.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_tooltip_without_reset() {
        assert_eq!(format_tooltip_in(42.0, None, &Local), "5h: 42%");
        assert_eq!(format_tooltip_in(0.0, None, &Local), "5h: 0%");
        assert_eq!(format_tooltip_in(99.6, None, &Local), "5h: 100%");
    }

    #[test]
    fn test_tooltip_reset_in_given_zone() {
        let reset = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(
            format_tooltip_in(42.0, Some(reset), &Utc),
            "5h: 42%\nResets: 2025-01-01 12:00"
        );
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(
            format_tooltip_in(42.0, Some(reset), &tokyo),
            "5h: 42%\nResets: 2025-01-01 21:00"
        );
    }

    #[test]
    fn test_emit_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let creds = write_credentials(&dir, r#"{"accessToken":"T"}"#);
        let client = MockClient::ok(
            r#"{"five_hour":{"utilization":42,"resets_at":"2025-01-01T12:00:00Z"}}"#,
        );

        let record = emit(&creds, &client, 5);

        assert_eq!(client.seen_token.borrow().as_deref(), Some("T"));
        assert_eq!(record.text, PLACEHOLDER_GLYPH);
        assert_eq!(record.percentage, Some(42.0));
        assert_eq!(record.class.as_deref(), Some("p40"));
        assert!(record.tooltip.contains("42"));

        let reset = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let local = reset.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string();
        assert!(record.tooltip.contains(&format!("Resets: {local}")));
    }

    #[test]
    fn test_emit_missing_credentials_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let client = MockClient::ok("{}");

        let record = emit(&dir.path().join("nope.json"), &client, 5);

        assert_eq!(record.text, ERROR_GLYPH);
        assert!(record.tooltip.contains("not found"));
        assert_eq!(record.class, None);
        assert_eq!(record.percentage, None);
        assert!(client.seen_token.borrow().is_none());
    }

    #[test]
    fn test_emit_network_error_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let creds = write_credentials(&dir, r#"{"claudeAiOauth":{"accessToken":"T"}}"#);
        let client = MockClient::failing(|| UsageError::Network("http status: 401".to_string()));

        let record = emit(&creds, &client, 5);

        assert_eq!(record.text, ERROR_GLYPH);
        assert_eq!(record.tooltip, "failed to fetch usage: http status: 401");
    }

    #[test]
    fn test_emit_bad_reset_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let creds = write_credentials(&dir, r#"{"token":"T"}"#);
        let client = MockClient::ok(r#"{"five_hour":{"utilization":10,"resets_at":"soon"}}"#);

        let record = emit(&creds, &client, 5);

        assert_eq!(record.text, ERROR_GLYPH);
        assert_eq!(record.class, None);
        assert!(record.tooltip.contains("resets_at"));
    }

    #[test]
    fn test_emit_empty_response_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let creds = write_credentials(&dir, r#"{"token":"T"}"#);
        let client = MockClient::ok("{}");

        let record = emit(&creds, &client, 5);

        assert_eq!(record.percentage, Some(0.0));
        assert_eq!(record.class.as_deref(), Some("p0"));
        assert_eq!(record.tooltip, "5h: 0%");
    }

    #[test]
    fn test_build_record_overflow_clamps_class() {
        let usage: UsageResponse =
            serde_json::from_str(r#"{"five_hour":{"utilization":150}}"#).unwrap();
        let record = build_record(&usage, 5, &Utc).unwrap();
        assert_eq!(record.class.as_deref(), Some("p100"));
        assert_eq!(record.percentage, Some(150.0));
        assert_eq!(record.tooltip, "5h: 150%");
    }
}
