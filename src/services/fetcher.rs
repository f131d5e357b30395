// src/services/fetcher.rs

//! Single-shot page fetching.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::models::ScanConfig;
use crate::utils::http;

/// Fetches the full body of a URL.
///
/// Implementations make one attempt and never retry. The status code is
/// not inspected: an error page is still a body worth classifying.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetcher backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher whose client enforces the configured timeout.
    pub fn new(config: &ScanConfig) -> Result<Self> {
        Ok(Self::with_client(http::create_async_client(config)?))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let body = self.client.get(url).send().await?.text().await?;
        Ok(body)
    }
}
