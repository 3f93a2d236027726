pub mod error;
pub mod models;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::AppConfig;

use self::{
    error::{ErrorDetail, FetchError},
    models::{TopTracksRequest, TopTracksResult},
};

pub const TOP_TRACKS_PATH: &str = "/get_top_5_from_playlist";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can turn a playlist link into its top tracks.
#[async_trait]
pub trait TopTracksSource: Send + Sync {
    async fn fetch_top_tracks(&self, playlist_link: &str) -> Result<TopTracksResult, FetchError>;
}

pub struct ApiService {
    client: reqwest::Client,
    endpoint: String,
}

impl ApiService {
    pub fn new(config: &AppConfig) -> color_eyre::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint(TOP_TRACKS_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TopTracksSource for ApiService {
    async fn fetch_top_tracks(&self, playlist_link: &str) -> Result<TopTracksResult, FetchError> {
        info!(endpoint = self.endpoint.as_str(), "top_tracks_request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&TopTracksRequest { playlist_link })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = match response.bytes().await {
                Ok(body) => error_detail(&body),
                Err(_) => ErrorDetail::Unparseable,
            };
            return Err(FetchError::Http {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response.bytes().await?;
        let result: TopTracksResult = serde_json::from_slice(&body)
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;
        debug!(tracks = result.top_tracks.len(), "top_tracks_response");

        Ok(result)
    }
}

/// Picks the `error` field out of an error body. Any JSON is accepted; only
/// a truthy `error` contributes a detail.
fn error_detail(body: &[u8]) -> ErrorDetail {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return ErrorDetail::Unparseable;
    };

    match value.get("error") {
        Some(Value::String(message)) if !message.is_empty() => {
            ErrorDetail::Message(message.clone())
        }
        Some(Value::String(_)) | Some(Value::Null) | None => ErrorDetail::Absent,
        Some(Value::Bool(false)) => ErrorDetail::Absent,
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => ErrorDetail::Absent,
        Some(other) => ErrorDetail::Message(other.to_string()),
    }
}
