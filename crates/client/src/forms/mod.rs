//! Remote form API client.
//!
//! ### Protocol
//!
//! - **Endpoint**: `{base_url}/forms/{formId}/submissions`
//! - **Authentication**: `Authorization: Bearer <api key>`.
//! - **Paging**: `limit` (always 150) and `offset` query parameters; the
//!   response reports the dataset's `pageCount`.
//! - **Failures**: no retries; any non-success status is an error.

pub mod error;
pub mod request;

pub use error::FormsError;
pub use request::SubmissionsRequest;

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header;
use sieve_core::{AppConfig, QueryIdentity, SubmissionPage};
use url::Url;

use crate::source::SubmissionSource;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "sieve/0.1";

/// Remote form API client configuration.
#[derive(Debug, Clone)]
pub struct FormsConfig {
    /// Bearer token for the remote API.
    pub api_key: String,
    /// Base URL (default: https://api.fillout.com/v1/api).
    pub base_url: String,
    /// Request timeout (default: 20s).
    pub timeout: Duration,
    /// User-agent string (default: sieve/0.x).
    pub user_agent: String,
}

impl Default for FormsConfig {
    fn default() -> Self {
        let app = AppConfig::default();
        Self {
            api_key: String::new(),
            base_url: app.base_url,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FormsConfig {
    /// Build the client configuration from the loaded application config.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, FormsError> {
        let api_key = config.require_api_key().map_err(|_| FormsError::MissingApiKey)?;

        Ok(Self {
            api_key: api_key.to_string(),
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
        })
    }
}

/// Remote form API client.
#[derive(Debug, Clone)]
pub struct FormsClient {
    http: reqwest::Client,
    config: FormsConfig,
    base_url: Url,
}

impl FormsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: FormsConfig) -> Result<Self, FormsError> {
        if config.api_key.is_empty() {
            return Err(FormsError::MissingApiKey);
        }

        let base_url = Url::parse(&config.base_url).map_err(|e| FormsError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(FormsError::InvalidUrl(config.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| FormsError::Network(Arc::new(e)))?;

        Ok(Self { http, config, base_url })
    }

    /// URL of the submissions collection for `form_id`.
    pub fn submissions_url(&self, form_id: &str) -> Result<Url, FormsError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FormsError::InvalidUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .extend(["forms", form_id, "submissions"]);
        Ok(url)
    }
}

#[async_trait]
impl SubmissionSource for FormsClient {
    async fn fetch_page(&self, identity: &QueryIdentity, offset: usize) -> Result<SubmissionPage, FormsError> {
        let start = Instant::now();
        let url = self.submissions_url(&identity.form_id)?;
        let request = SubmissionsRequest::page(identity, offset);

        let http_response = self
            .http
            .get(url)
            .bearer_auth(&self.config.api_key)
            .header(header::ACCEPT, "application/json")
            .query(&request)
            .send()
            .await?;

        let status = http_response.status();
        tracing::debug!(form_id = %identity.form_id, offset, %status, "remote page response");

        if status == 401 || status == 403 {
            return Err(FormsError::AuthError);
        }

        if status == 429 {
            return Err(FormsError::RateLimited);
        }

        if !status.is_success() {
            return Err(FormsError::HttpError { status: status.as_u16() });
        }

        let bytes = http_response.bytes().await?;
        let page: SubmissionPage = serde_json::from_slice(&bytes).map_err(|e| FormsError::Parse(e.to_string()))?;

        tracing::debug!(
            "fetched page at offset {} in {:?}, {} records",
            offset,
            start.elapsed(),
            page.responses.len()
        );

        Ok(page)
    }
}
