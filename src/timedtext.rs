use std::fmt::Debug;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use url::Url;

use crate::app_config::TimedTextConfig;
use crate::errors::SubtitleError;

/// Transport seam for the unofficial timed-text endpoint
///
/// This trait defines the two raw fetches the subtitle services need,
/// allowing the services to be exercised against mock transports. Body
/// content is opaque at this layer; decoding belongs to the parsers.
#[async_trait]
pub trait TimedTextFetcher: Send + Sync + Debug {
    /// Fetch the raw track-list document for a video
    ///
    /// # Arguments
    /// * `video_id` - The video identifier
    ///
    /// # Returns
    /// * `Result<String, SubtitleError>` - The raw response body or an error
    async fn fetch_language_list(&self, video_id: &str) -> Result<String, SubtitleError>;

    /// Fetch the raw transcript document for a video in one language
    ///
    /// # Arguments
    /// * `video_id` - The video identifier
    /// * `language` - The caption language code
    ///
    /// # Returns
    /// * `Result<String, SubtitleError>` - The raw response body or an error
    async fn fetch_track(&self, video_id: &str, language: &str) -> Result<String, SubtitleError>;
}

/// HTTP client for the unofficial timed-text endpoint
///
/// Each call is a single unauthenticated GET with the video id and either
/// `type=list` or a language code interpolated as query parameters. The
/// endpoint is undocumented and carries no stability guarantee; transport
/// failures, timeouts, and non-2xx statuses all surface as
/// `UpstreamUnavailable` and are never retried here.
#[derive(Debug, Clone)]
pub struct TimedTextClient {
    /// HTTP client for endpoint requests
    client: Client,
    /// Endpoint URL the query parameters are appended to
    endpoint: Url,
}

impl TimedTextClient {
    /// Create a new timed-text client from configuration
    pub fn new(config: &TimedTextConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .with_context(|| format!("Invalid timed-text endpoint: {}", config.endpoint))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build timed-text HTTP client")?;

        Ok(Self { client, endpoint })
    }

    /// Issue one GET against the endpoint with the given query parameters
    async fn get(&self, query: &[(&str, &str)]) -> Result<String, SubtitleError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(query);
        debug!("Fetching timed-text document: {}", url);

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            error!("Timed-text request failed: {}", e);
            SubtitleError::UpstreamUnavailable(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Timed-text endpoint answered {} for {}", status, url);
            return Err(SubtitleError::UpstreamUnavailable(format!(
                "endpoint answered {}",
                status
            )));
        }

        response
            .text()
            .await
            .map_err(|e| SubtitleError::UpstreamUnavailable(e.to_string()))
    }
}

#[async_trait]
impl TimedTextFetcher for TimedTextClient {
    async fn fetch_language_list(&self, video_id: &str) -> Result<String, SubtitleError> {
        self.get(&[("type", "list"), ("v", video_id)]).await
    }

    async fn fetch_track(&self, video_id: &str, language: &str) -> Result<String, SubtitleError> {
        self.get(&[("lang", language), ("v", video_id)]).await
    }
}
