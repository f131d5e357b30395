// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::error::Result;
use crate::models::ScanConfig;

/// Create a configured asynchronous HTTP client.
///
/// The timeout bounds the whole request, body transfer included.
pub fn create_async_client(config: &ScanConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}
