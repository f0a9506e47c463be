//! mora.jp catalog provider

use crate::error::{CatalogError, Result};
use crate::provider::CatalogProvider;
use crate::types::{CatalogConfig, MoraResponse};
use async_trait::async_trait;
use hires_core::TrackMetadata;
use reqwest::Client;
use tracing::debug;

/// Searches mora.jp by "title artist" keyword
///
/// Holds no per-search state; one instance can serve any number of lookups.
#[derive(Clone)]
pub struct MoraProvider {
    http: Client,
    config: CatalogConfig,
}

impl MoraProvider {
    /// Create a provider from connection settings
    ///
    /// # Errors
    /// [`CatalogError::InvalidUrl`] when the endpoint is empty or not
    /// http(s); [`CatalogError::Request`] when the HTTP client cannot be
    /// built.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.endpoint.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".to_string()));
        }
        if !config.endpoint.starts_with("http://") && !config.endpoint.starts_with("https://") {
            return Err(CatalogError::InvalidUrl(format!(
                "URL must start with http:// or https://: {}",
                config.endpoint
            )));
        }

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, config })
    }

    /// Search endpoint in use
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    fn build_request(&self, local: &TrackMetadata) -> Result<reqwest::Request> {
        let only_hires = if self.config.only_hires { "1" } else { "0" };
        let request = self
            .http
            .get(&self.config.endpoint)
            .query(&[
                ("keyWord", local.search_keyword().as_str()),
                ("onlyHires", only_hires),
            ])
            .build()?;
        Ok(request)
    }
}

#[async_trait]
impl CatalogProvider for MoraProvider {
    fn name(&self) -> &str {
        "mora"
    }

    async fn search(&self, local: &TrackMetadata) -> Result<Vec<TrackMetadata>> {
        let request = self.build_request(local)?;
        let url = request.url().to_string();
        debug!(url = %url, path = %local.file_path, "Searching mora");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(&url, e))?;
        if !status.is_success() {
            return Err(CatalogError::ServerError {
                url,
                status: status.as_u16(),
                body,
            });
        }

        let envelope: MoraResponse = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(source) => return Err(CatalogError::ParseError { url, body, source }),
        };
        if let Some(head) = &envelope.head {
            debug!(message = %head.message, success = %head.success_flag, "mora response head");
        }
        let Some(results) = envelope.into_track_results() else {
            return Err(CatalogError::MissingData { url, body });
        };

        let mut upgrades = Vec::new();
        for result in &results.list {
            let candidate = result.to_metadata()?;
            if candidate.is_upgrade_over(local) {
                upgrades.push(candidate);
            }
        }

        debug!(
            url = %url,
            total = results.total,
            returned = results.list.len(),
            upgrades = upgrades.len(),
            "mora search complete"
        );

        Ok(upgrades)
    }
}

/// Connect failures and timeouts, whether before the response or while
/// reading its body, mean the catalog is unreachable
fn transport_error(url: &str, e: reqwest::Error) -> CatalogError {
    if e.is_connect() || e.is_timeout() {
        CatalogError::Unreachable {
            url: url.to_string(),
            message: e.to_string(),
        }
    } else {
        CatalogError::Request(e)
    }
}
