//! Scripted `YouTubeApi` double and fixture builders shared by the tests.

use crate::services::youtube_client::{YouTubeApi, YouTubeError};
use crate::services::youtube_types::{
    Channel, ChannelListResponse, PlaylistItem, PlaylistItemListResponse, SearchListResponse,
    SearchResult, Video, VideoListResponse,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn search_hit(video_id: &str, title: &str, description: &str) -> SearchResult {
    serde_json::from_value(json!({
        "kind": "youtube#searchResult",
        "id": { "kind": "youtube#video", "videoId": video_id },
        "snippet": {
            "title": title,
            "description": description,
            "channelTitle": format!("Channel {video_id}"),
            "thumbnails": {
                "default": { "url": format!("https://i.ytimg.com/vi/{video_id}/default.jpg"), "width": 120, "height": 90 },
                "high": { "url": format!("https://i.ytimg.com/vi/{video_id}/hqdefault.jpg") }
            }
        }
    }))
    .unwrap()
}

pub fn video(video_id: &str, tags: Option<&[&str]>, counts: Option<(&str, &str)>) -> Video {
    let mut value = json!({
        "id": video_id,
        "snippet": {
            "title": format!("Title {video_id}"),
            "description": format!("Description {video_id}"),
            "channelId": format!("UC{video_id}"),
            "channelTitle": format!("Channel {video_id}"),
            "thumbnails": {
                "default": { "url": format!("https://i.ytimg.com/vi/{video_id}/default.jpg") }
            }
        }
    });
    if let Some(tags) = tags {
        value["snippet"]["tags"] = json!(tags);
    }
    if let Some((likes, views)) = counts {
        value["statistics"] = json!({ "likeCount": likes, "viewCount": views });
    }
    serde_json::from_value(value).unwrap()
}

pub fn channel(channel_id: &str, uploads: Option<&str>) -> Channel {
    let mut value = json!({
        "id": channel_id,
        "snippet": {
            "title": format!("Channel {channel_id}"),
            "description": "All about Rust",
            "thumbnails": {
                "default": { "url": format!("https://yt3.ggpht.com/{channel_id}=s88") }
            }
        },
        "statistics": { "subscriberCount": "1500", "videoCount": "42" }
    });
    if let Some(uploads) = uploads {
        value["contentDetails"] = json!({ "relatedPlaylists": { "uploads": uploads } });
    }
    serde_json::from_value(value).unwrap()
}

pub fn playlist_item(video_id: &str, title: &str) -> PlaylistItem {
    serde_json::from_value(json!({
        "snippet": {
            "title": title,
            "resourceId": { "kind": "youtube#video", "videoId": video_id },
            "thumbnails": {
                "default": { "url": format!("https://i.ytimg.com/vi/{video_id}/default.jpg") }
            }
        }
    }))
    .unwrap()
}

pub fn server_error() -> YouTubeError {
    YouTubeError::Api {
        status: 503,
        message: "backend unavailable".to_string(),
    }
}

/// Returns canned responses and counts every call.
///
/// `videos` only returns the configured items whose id was requested, so an
/// unknown id yields an empty list like the real API.
pub struct FakeYouTubeClient {
    search: Result<SearchListResponse, YouTubeError>,
    videos: Result<VideoListResponse, YouTubeError>,
    channels: Result<ChannelListResponse, YouTubeError>,
    playlist_items: Result<PlaylistItemListResponse, YouTubeError>,
    search_calls: AtomicUsize,
    videos_calls: AtomicUsize,
    channels_calls: AtomicUsize,
    playlist_calls: AtomicUsize,
    search_page_sizes: Mutex<Vec<u32>>,
    requested_ids: Mutex<Vec<Vec<String>>>,
}

impl Default for FakeYouTubeClient {
    fn default() -> Self {
        Self {
            search: Ok(SearchListResponse::default()),
            videos: Ok(VideoListResponse::default()),
            channels: Ok(ChannelListResponse::default()),
            playlist_items: Ok(PlaylistItemListResponse::default()),
            search_calls: AtomicUsize::new(0),
            videos_calls: AtomicUsize::new(0),
            channels_calls: AtomicUsize::new(0),
            playlist_calls: AtomicUsize::new(0),
            search_page_sizes: Mutex::new(Vec::new()),
            requested_ids: Mutex::new(Vec::new()),
        }
    }
}

impl FakeYouTubeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_hits(mut self, items: Vec<SearchResult>) -> Self {
        self.search = Ok(SearchListResponse { items });
        self
    }

    pub fn with_search_error(mut self, err: YouTubeError) -> Self {
        self.search = Err(err);
        self
    }

    pub fn with_videos(mut self, items: Vec<Video>) -> Self {
        self.videos = Ok(VideoListResponse { items });
        self
    }

    pub fn with_videos_error(mut self, err: YouTubeError) -> Self {
        self.videos = Err(err);
        self
    }

    pub fn with_channels(mut self, items: Vec<Channel>) -> Self {
        self.channels = Ok(ChannelListResponse { items });
        self
    }

    pub fn with_channels_error(mut self, err: YouTubeError) -> Self {
        self.channels = Err(err);
        self
    }

    pub fn with_playlist_items(mut self, items: Vec<PlaylistItem>) -> Self {
        self.playlist_items = Ok(PlaylistItemListResponse { items });
        self
    }

    pub fn with_playlist_error(mut self, err: YouTubeError) -> Self {
        self.playlist_items = Err(err);
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn videos_calls(&self) -> usize {
        self.videos_calls.load(Ordering::SeqCst)
    }

    pub fn channels_calls(&self) -> usize {
        self.channels_calls.load(Ordering::SeqCst)
    }

    pub fn playlist_calls(&self) -> usize {
        self.playlist_calls.load(Ordering::SeqCst)
    }

    pub fn search_page_sizes(&self) -> Vec<u32> {
        self.search_page_sizes.lock().unwrap().clone()
    }

    pub fn requested_ids(&self) -> Vec<Vec<String>> {
        self.requested_ids.lock().unwrap().clone()
    }
}

#[rocket::async_trait]
impl YouTubeApi for FakeYouTubeClient {
    async fn search(
        &self,
        _query: &str,
        max_results: u32,
    ) -> Result<SearchListResponse, YouTubeError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.search_page_sizes.lock().unwrap().push(max_results);
        self.search.clone()
    }

    async fn videos(
        &self,
        ids: &[String],
        _parts: &[&str],
    ) -> Result<VideoListResponse, YouTubeError> {
        self.videos_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_ids.lock().unwrap().push(ids.to_vec());
        let response = self.videos.clone()?;
        Ok(VideoListResponse {
            items: response
                .items
                .into_iter()
                .filter(|v| ids.contains(&v.id))
                .collect(),
        })
    }

    async fn channels(&self, channel_id: &str) -> Result<ChannelListResponse, YouTubeError> {
        self.channels_calls.fetch_add(1, Ordering::SeqCst);
        let response = self.channels.clone()?;
        Ok(ChannelListResponse {
            items: response
                .items
                .into_iter()
                .filter(|c| c.id == channel_id)
                .collect(),
        })
    }

    async fn playlist_items(
        &self,
        _playlist_id: &str,
        _max_results: u32,
    ) -> Result<PlaylistItemListResponse, YouTubeError> {
        self.playlist_calls.fetch_add(1, Ordering::SeqCst);
        self.playlist_items.clone()
    }
}
