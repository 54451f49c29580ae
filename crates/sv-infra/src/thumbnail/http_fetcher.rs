use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Url;
use sv_core::config::ThumbnailConfig;
use sv_core::ports::ThumbnailFetcherPort;
use sv_core::{FetchError, Thumbnail};

use super::decode::decode_thumbnail;

/// Thumbnail fetcher over plain HTTP(S) GET.
///
/// Each call is one request with the client's timeout; there is no retry
/// and no caching. Image decoding runs on the blocking pool so it only
/// suspends the calling task.
#[derive(Debug, Clone)]
pub struct HttpThumbnailFetcher {
    client: reqwest::Client,
    max_edge: u32,
}

impl HttpThumbnailFetcher {
    pub fn new(client: reqwest::Client, max_edge: u32) -> Self {
        Self { client, max_edge }
    }

    pub fn from_config(config: &ThumbnailConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .user_agent(config.user_agent.as_str())
            .build()
            .context("build thumbnail HTTP client")?;
        Ok(Self::new(client, config.max_edge))
    }
}

#[async_trait]
impl ThumbnailFetcherPort for HttpThumbnailFetcher {
    #[tracing::instrument(name = "infra.thumbnail.fetch", skip(self))]
    async fn fetch(&self, url: &str) -> Result<Thumbnail, FetchError> {
        let parsed = parse_thumbnail_url(url)?;

        let network = |err: reqwest::Error| FetchError::NetworkError {
            url: url.to_string(),
            reason: describe_reqwest_error(&err),
        };

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(network)?;
        let bytes = response.bytes().await.map_err(network)?;
        tracing::debug!(len = bytes.len(), "thumbnail bytes received");

        let max_edge = self.max_edge;
        tokio::task::spawn_blocking(move || decode_thumbnail(&bytes, max_edge))
            .await
            .map_err(|err| FetchError::DecodeError {
                url: url.to_string(),
                reason: format!("decode task failed: {err}"),
            })?
            .map_err(|err| FetchError::DecodeError {
                url: url.to_string(),
                reason: format!("{err:#}"),
            })
    }
}

/// Only absolute http(s) URLs with a host are fetched.
fn parse_thumbnail_url(raw: &str) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url)
}

fn describe_reqwest_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "request timed out".to_string()
    } else if let Some(status) = err.status() {
        format!("HTTP status {status}")
    } else {
        err.to_string()
    }
}
