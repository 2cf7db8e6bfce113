use crate::config::YouTubeConfig;
use crate::services::youtube_types::{
    ChannelListResponse, PlaylistItemListResponse, SearchListResponse, VideoListResponse,
};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Error)]
pub enum YouTubeError {
    #[error("YouTube API key is not configured")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Response is missing {0}")]
    MissingField(&'static str),
}

impl From<reqwest::Error> for YouTubeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            YouTubeError::Parse(err.to_string())
        } else {
            YouTubeError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for YouTubeError {
    fn from(err: serde_json::Error) -> Self {
        YouTubeError::Parse(err.to_string())
    }
}

impl From<url::ParseError> for YouTubeError {
    fn from(err: url::ParseError) -> Self {
        YouTubeError::Network(format!("invalid request url: {err}"))
    }
}

/// Read-only slice of the YouTube Data API v3 used by the pipeline.
///
/// Every call returns a single page; callers choose the page size.
#[rocket::async_trait]
pub trait YouTubeApi: Send + Sync {
    /// `search.list` restricted to videos, `part=snippet`.
    async fn search(&self, query: &str, max_results: u32)
        -> Result<SearchListResponse, YouTubeError>;

    /// `videos.list` for all `ids` in one request.
    async fn videos(&self, ids: &[String], parts: &[&str])
        -> Result<VideoListResponse, YouTubeError>;

    /// `channels.list` with snippet, statistics and contentDetails.
    async fn channels(&self, channel_id: &str) -> Result<ChannelListResponse, YouTubeError>;

    /// `playlistItems.list`, `part=snippet`.
    async fn playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<PlaylistItemListResponse, YouTubeError>;
}

pub struct ReqwestYouTubeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ReqwestYouTubeClient {
    pub fn new(config: &YouTubeConfig) -> Result<Self, YouTubeError> {
        let client = Client::builder()
            .user_agent(config.application_name.clone())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn request_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, YouTubeError> {
        if self.api_key.is_empty() {
            return Err(YouTubeError::MissingApiKey);
        }

        let mut url = Url::parse_with_params(&format!("{}/{}", self.base_url, endpoint), params)?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, YouTubeError> {
        let url = self.request_url(endpoint, params)?;
        debug!("GET {endpoint} {params:?}");

        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(YouTubeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[rocket::async_trait]
impl YouTubeApi for ReqwestYouTubeClient {
    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<SearchListResponse, YouTubeError> {
        let max_results = max_results.to_string();
        self.get(
            "search",
            &[
                ("part", "snippet"),
                ("type", "video"),
                ("q", query),
                ("maxResults", &max_results),
            ],
        )
        .await
    }

    async fn videos(
        &self,
        ids: &[String],
        parts: &[&str],
    ) -> Result<VideoListResponse, YouTubeError> {
        let ids = ids.join(",");
        let parts = parts.join(",");
        self.get("videos", &[("part", &parts), ("id", &ids)]).await
    }

    async fn channels(&self, channel_id: &str) -> Result<ChannelListResponse, YouTubeError> {
        self.get(
            "channels",
            &[
                ("part", "snippet,statistics,contentDetails"),
                ("id", channel_id),
            ],
        )
        .await
    }

    async fn playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<PlaylistItemListResponse, YouTubeError> {
        let max_results = max_results.to_string();
        self.get(
            "playlistItems",
            &[
                ("part", "snippet"),
                ("playlistId", playlist_id),
                ("maxResults", &max_results),
            ],
        )
        .await
    }
}
