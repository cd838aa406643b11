//! Error types shared by the status emitter and the sprite builder.

use std::path::PathBuf;

use thiserror::Error;

/// Failure on the status path (credentials, network, response decoding).
///
/// Every variant is converted into a degraded status record; none of them
/// ever reaches the process exit code.
#[derive(Debug, Error)]
pub enum UsageError {
    /// The credentials file does not exist
    #[error("credentials file not found: {}", path.display())]
    CredentialsNotFound { path: PathBuf },

    /// The credentials file exists but could not be read
    #[error("failed to read credentials file {}: {source}", path.display())]
    CredentialsUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The credentials file is not valid JSON
    #[error("failed to parse credentials file {}: {source}", path.display())]
    CredentialsMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// None of the known token keys is present
    #[error("no token found in {}", path.display())]
    TokenMissing { path: PathBuf },

    /// DNS, connect, timeout or non-2xx status
    #[error("failed to fetch usage: {0}")]
    Network(String),

    /// The response body (or a field in it) could not be decoded
    #[error("invalid usage response: {0}")]
    ResponseFormat(String),
}

/// Failure while producing the sprite sheet image.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No usable rasterizer binary was found
    #[error("rasterizer not found (tried: {})", tried.join(", "))]
    RasterizerMissing { tried: Vec<String> },

    /// The rasterizer ran but reported failure
    #[error("{program} failed ({status}): {stderr}")]
    RasterizerFailed {
        program: String,
        status: String,
        stderr: String,
    },

    /// The composed image does not have the expected dimensions
    #[error("sprite sheet is {actual_width}x{actual_height}px, expected {expected_width}x{expected_height}px")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// Scratch files or the output directory could not be written
    #[error("sprite I/O error: {0}")]
    Io(#[from] std::io::Error),
}
