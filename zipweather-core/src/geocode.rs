//! Postal code lookups against a Zippopotam-compatible geocoding service.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::fmt::Debug;
use tracing::debug;

use crate::model::PostalQuery;

/// Status and body of a geocoding response, left unclassified so the
/// validator decides what counts as retryable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait GeocodingService: Send + Sync + Debug {
    /// Errors only on transport failures. Any HTTP status is a reply.
    async fn lookup(&self, postal_code: &PostalQuery) -> Result<HttpReply>;
}

#[derive(Debug, Clone)]
pub struct ZippopotamClient {
    base_url: String,
    http: Client,
}

impl ZippopotamClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// `{base}/us/{code}` with the code encoded as a single path segment.
    pub fn lookup_url(&self, postal_code: &PostalQuery) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid geocoding base URL: {}", self.base_url))?;

        url.path_segments_mut()
            .map_err(|_| anyhow!("Geocoding base URL cannot carry a path: {}", self.base_url))?
            .pop_if_empty()
            .push("us")
            .push(postal_code.as_str());

        Ok(url)
    }
}

#[async_trait]
impl GeocodingService for ZippopotamClient {
    async fn lookup(&self, postal_code: &PostalQuery) -> Result<HttpReply> {
        let url = self.lookup_url(postal_code)?;
        debug!(%url, "looking up zip code");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .context("Failed to send request to zip code service")?;

        let status = res.status().as_u16();
        let body = res
            .text()
            .await
            .context("Failed to read zip code service response body")?;

        debug!(status, "zip code service replied");
        Ok(HttpReply { status, body })
    }
}
