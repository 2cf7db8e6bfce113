//! Aggregation pipeline over the YouTube Data API.
//!
//! Every public operation is best-effort: it always resolves to a value and a
//! failed stage shows up as an empty list, an empty frequency table or `None`.
//! Internally each stage returns `Result<_, YouTubeError>` so failures are
//! logged as errors while plain "nothing found" outcomes are logged as info.

use crate::models::{ChannelProfile, RecentVideo, VideoDetail, VideoStats, VideoSummary, WordFrequency};
use crate::services::mapper;
use crate::services::word_stats::word_frequency;
use crate::services::youtube_client::{YouTubeApi, YouTubeError};
use log::{debug, error, info};
use std::sync::Arc;

pub const SEARCH_PAGE_SIZE: u32 = 10;
pub const DESCRIPTION_SAMPLE_SIZE: u32 = 50;
pub const RECENT_VIDEOS_LIMIT: u32 = 10;

const DETAIL_PARTS: &[&str] = &["snippet"];
const STATS_PARTS: &[&str] = &["snippet", "statistics"];

/// Collapses a stage result into the best-effort value handed to callers.
fn settle<T: Default>(stage: &str, subject: &str, outcome: Result<T, YouTubeError>) -> T {
    match outcome {
        Ok(value) => value,
        Err(e) => {
            error!("Error in {stage} for '{subject}': {e}");
            T::default()
        }
    }
}

#[derive(Clone)]
pub struct YouTubeService {
    client: Arc<dyn YouTubeApi>,
}

impl YouTubeService {
    pub fn new(client: Arc<dyn YouTubeApi>) -> Self {
        Self { client }
    }

    /// Up to ten search hits for `query`.
    pub async fn search_videos(&self, query: &str) -> Vec<VideoSummary> {
        let videos = settle("video search", query, self.try_search_videos(query).await);
        info!("Search '{query}' returned {} videos", videos.len());
        videos
    }

    async fn try_search_videos(&self, query: &str) -> Result<Vec<VideoSummary>, YouTubeError> {
        let response = self.client.search(query, SEARCH_PAGE_SIZE).await?;
        response
            .items
            .iter()
            .take(SEARCH_PAGE_SIZE as usize)
            .map(mapper::video_summary)
            .collect()
    }

    /// Search hits enriched through one batched `videos.list` call.
    ///
    /// Either stage failing empties the whole result.
    pub async fn search_videos_with_detail(&self, query: &str) -> Vec<VideoDetail> {
        settle(
            "detailed video search",
            query,
            self.try_search_videos_with_detail(query).await,
        )
    }

    async fn try_search_videos_with_detail(
        &self,
        query: &str,
    ) -> Result<Vec<VideoDetail>, YouTubeError> {
        let response = self.client.search(query, SEARCH_PAGE_SIZE).await?;
        let video_ids = response
            .items
            .iter()
            .take(SEARCH_PAGE_SIZE as usize)
            .map(mapper::search_hit_id)
            .collect::<Result<Vec<_>, _>>()?;

        if video_ids.is_empty() {
            info!("Search '{query}' returned no videos, skipping detail lookup");
            return Ok(Vec::new());
        }

        let details = self.client.videos(&video_ids, DETAIL_PARTS).await?;
        debug!(
            "Detail lookup for {} ids returned {} videos",
            video_ids.len(),
            details.items.len()
        );
        details.items.iter().map(mapper::video_detail).collect()
    }

    /// Title, description, counters and tags of one video.
    pub async fn get_video_details(&self, video_id: &str) -> Option<VideoStats> {
        settle(
            "video details",
            video_id,
            self.try_get_video_details(video_id).await,
        )
    }

    async fn try_get_video_details(
        &self,
        video_id: &str,
    ) -> Result<Option<VideoStats>, YouTubeError> {
        let response = self
            .client
            .videos(&[video_id.to_string()], STATS_PARTS)
            .await?;

        let Some(video) = response.items.first() else {
            info!("No video found for id {video_id}");
            return Ok(None);
        };

        let stats = mapper::video_stats(video);
        if stats.is_none() {
            info!("Video {video_id} came back without snippet or statistics");
        }
        Ok(stats)
    }

    /// Channel snippet and statistics plus its ten most recent uploads.
    ///
    /// A failing uploads lookup leaves `recent_videos` empty instead of
    /// discarding the profile.
    pub async fn fetch_channel_profile(&self, channel_id: &str) -> Option<ChannelProfile> {
        settle(
            "channel profile",
            channel_id,
            self.try_fetch_channel_profile(channel_id).await,
        )
    }

    async fn try_fetch_channel_profile(
        &self,
        channel_id: &str,
    ) -> Result<Option<ChannelProfile>, YouTubeError> {
        let response = self.client.channels(channel_id).await?;

        let Some(channel) = response.items.first() else {
            info!("No channel found for id {channel_id}");
            return Ok(None);
        };

        let Some(mut profile) = mapper::channel_profile(channel)? else {
            info!("Channel {} is missing snippet or statistics", channel.id);
            return Ok(None);
        };

        profile.recent_videos = match mapper::uploads_playlist_id(channel) {
            Some(playlist_id) => settle(
                "recent videos",
                playlist_id,
                self.fetch_recent_videos(playlist_id).await,
            ),
            None => {
                info!("Channel {} has no uploads playlist", channel.id);
                Vec::new()
            }
        };

        Ok(Some(profile))
    }

    async fn fetch_recent_videos(&self, playlist_id: &str) -> Result<Vec<RecentVideo>, YouTubeError> {
        let response = self
            .client
            .playlist_items(playlist_id, RECENT_VIDEOS_LIMIT)
            .await?;

        response
            .items
            .iter()
            .take(RECENT_VIDEOS_LIMIT as usize)
            .map(mapper::recent_video)
            .collect()
    }

    /// Descriptions of up to fifty videos matching `query`.
    pub async fn fetch_descriptions_by_query(&self, query: &str) -> Vec<String> {
        settle(
            "description search",
            query,
            self.try_fetch_descriptions(query).await,
        )
    }

    async fn try_fetch_descriptions(&self, query: &str) -> Result<Vec<String>, YouTubeError> {
        let response = self.client.search(query, DESCRIPTION_SAMPLE_SIZE).await?;
        Ok(response
            .items
            .iter()
            .take(DESCRIPTION_SAMPLE_SIZE as usize)
            .map(mapper::description)
            .collect())
    }

    /// Word frequencies over the descriptions matching `query`.
    pub async fn fetch_word_stats(&self, query: &str) -> WordFrequency {
        let descriptions = self.fetch_descriptions_by_query(query).await;
        let stats = word_frequency(&descriptions);
        info!(
            "Word stats for '{query}': {} descriptions, {} distinct words, {} tokens",
            descriptions.len(),
            stats.len(),
            stats.total()
        );
        stats
    }
}
