use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::ApiErrorBody,
    protocol::{ShortenRequest, ShortenResponse, SHORTEN_PATH},
};
use tracing::{debug, warn};

use crate::{config::Settings, error::ShortenError, ports::ShortenerApi};

/// Shortening service reached over HTTP.
pub struct HttpShortenerApi {
    http: Client,
    endpoint: String,
}

impl HttpShortenerApi {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ShortenError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ShortenError::Network(format!("failed to build http client: {err}")))?;
        Ok(Self::with_client(http, endpoint))
    }

    pub fn with_client(http: Client, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self { http, endpoint }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ShortenError> {
        Self::new(&settings.endpoint, settings.request_timeout())
    }

    pub fn shorten_url(&self) -> String {
        format!("{}{SHORTEN_PATH}", self.endpoint)
    }
}

#[async_trait]
impl ShortenerApi for HttpShortenerApi {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ShortenError> {
        let response = self
            .http
            .post(self.shorten_url())
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), body_len = body.len(), "shorten: response received");

        if !status.is_success() {
            let message = match serde_json::from_slice::<ApiErrorBody>(&body) {
                Ok(error_body) => error_body.message_or_fallback(),
                Err(err) => {
                    warn!(status = status.as_u16(), "shorten: unreadable error body: {err}");
                    ApiErrorBody::default().message_or_fallback()
                }
            };
            return Err(ShortenError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice::<ShortenResponse>(&body)
            .map_err(|err| ShortenError::MalformedResponse(err.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod tests;
