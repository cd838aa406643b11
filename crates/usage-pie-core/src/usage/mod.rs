//! Usage monitoring: read the OAuth token and fetch the five-hour window.

pub mod client;
pub mod credentials;
pub mod types;

pub use client::{HttpUsageClient, UsageClient, DEFAULT_TIMEOUT, USAGE_API_URL};
pub use credentials::read_token;
pub use types::{UsageResponse, UsageWindow};
