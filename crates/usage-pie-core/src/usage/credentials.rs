//! OAuth token lookup from the Claude Code credentials file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::UsageError;

/// Candidate token locations, tried in order. Each entry is a key path.
const TOKEN_KEYS: &[&[&str]] = &[
    &["accessToken"],
    &["access_token"],
    &["token"],
    &["claudeAiOauth", "accessToken"],
];

/// Read the bearer token from the credentials file at `path`
pub fn read_token(path: &Path) -> Result<String, UsageError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => UsageError::CredentialsNotFound {
            path: path.to_path_buf(),
        },
        _ => UsageError::CredentialsUnreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    debug!("Read credentials from {}", path.display());
    parse_token(&content, path)
}

/// Extract the token from credentials JSON; `path` is only used in errors.
fn parse_token(content: &str, path: &Path) -> Result<String, UsageError> {
    let creds: Value =
        serde_json::from_str(content.trim()).map_err(|e| UsageError::CredentialsMalformed {
            path: path.to_path_buf(),
            source: e,
        })?;

    TOKEN_KEYS
        .iter()
        .find_map(|keys| lookup(&creds, keys))
        .map(str::to_string)
        .ok_or_else(|| UsageError::TokenMissing {
            path: path.to_path_buf(),
        })
}

/// Follow `keys` through nested objects to a non-empty string
fn lookup<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .try_fold(value, |v, key| v.get(key))?
        .as_str()
        .filter(|s| !s.is_empty())
}
