//! Flattens raw API fragments into the records handed to callers.
//!
//! Mapping is pure. A missing default thumbnail is an error for the whole
//! item (and therefore the stage that asked for it); missing tags and
//! descriptions get placeholder strings; missing text fields become empty
//! strings.

use crate::models::{
    ChannelProfile, RecentVideo, VideoDetail, VideoStats, VideoSummary,
    NO_DESCRIPTION_PLACEHOLDER, NO_TAGS_PLACEHOLDER,
};
use crate::services::youtube_client::YouTubeError;
use crate::services::youtube_types::{Channel, PlaylistItem, SearchResult, Thumbnails, Video};

fn default_thumbnail(thumbnails: Option<&Thumbnails>) -> Result<String, YouTubeError> {
    thumbnails
        .and_then(|t| t.default.as_ref())
        .map(|t| t.url.clone())
        .ok_or(YouTubeError::MissingField("default thumbnail"))
}

fn join_tags(tags: Option<&Vec<String>>) -> String {
    match tags {
        Some(tags) if !tags.is_empty() => tags.join(", "),
        _ => NO_TAGS_PLACEHOLDER.to_string(),
    }
}

fn text(field: &Option<String>) -> String {
    field.clone().unwrap_or_default()
}

pub fn search_hit_id(hit: &SearchResult) -> Result<String, YouTubeError> {
    hit.id
        .as_ref()
        .and_then(|id| id.video_id.clone())
        .filter(|id| !id.is_empty())
        .ok_or(YouTubeError::MissingField("search hit videoId"))
}

pub fn video_summary(hit: &SearchResult) -> Result<VideoSummary, YouTubeError> {
    let video_id = search_hit_id(hit)?;
    let snippet = hit
        .snippet
        .as_ref()
        .ok_or(YouTubeError::MissingField("search hit snippet"))?;

    Ok(VideoSummary {
        video_id,
        title: text(&snippet.title),
        description: text(&snippet.description),
        channel_title: text(&snippet.channel_title),
        thumbnail_url: default_thumbnail(snippet.thumbnails.as_ref())?,
    })
}

/// Description of a search hit, or the placeholder when the API left it out.
pub fn description(hit: &SearchResult) -> String {
    hit.snippet
        .as_ref()
        .and_then(|s| s.description.clone())
        .unwrap_or_else(|| NO_DESCRIPTION_PLACEHOLDER.to_string())
}

pub fn video_detail(video: &Video) -> Result<VideoDetail, YouTubeError> {
    let snippet = video
        .snippet
        .as_ref()
        .ok_or(YouTubeError::MissingField("video snippet"))?;

    Ok(VideoDetail {
        video_id: video.id.clone(),
        title: text(&snippet.title),
        description: text(&snippet.description),
        channel_title: text(&snippet.channel_title),
        channel_id: text(&snippet.channel_id),
        default_thumbnail: default_thumbnail(snippet.thumbnails.as_ref())?,
        tags: join_tags(snippet.tags.as_ref()),
    })
}

/// `None` when the video came back without snippet or statistics.
pub fn video_stats(video: &Video) -> Option<VideoStats> {
    let snippet = video.snippet.as_ref()?;
    let statistics = video.statistics.as_ref()?;

    Some(VideoStats {
        title: text(&snippet.title),
        description: text(&snippet.description),
        likes: statistics.like_count.unwrap_or(0).to_string(),
        views: statistics.view_count.unwrap_or(0).to_string(),
        tags: join_tags(snippet.tags.as_ref()),
    })
}

/// Profile without recent videos; `Ok(None)` when snippet or statistics are
/// missing.
pub fn channel_profile(channel: &Channel) -> Result<Option<ChannelProfile>, YouTubeError> {
    let (Some(snippet), Some(statistics)) = (&channel.snippet, &channel.statistics) else {
        return Ok(None);
    };

    Ok(Some(ChannelProfile {
        title: text(&snippet.title),
        description: text(&snippet.description),
        thumbnail: default_thumbnail(snippet.thumbnails.as_ref())?,
        subscriber_count: statistics.subscriber_count,
        video_count: statistics.video_count,
        recent_videos: Vec::new(),
    }))
}

pub fn uploads_playlist_id(channel: &Channel) -> Option<&str> {
    channel
        .content_details
        .as_ref()?
        .related_playlists
        .as_ref()?
        .uploads
        .as_deref()
        .filter(|id| !id.is_empty())
}

pub fn recent_video(item: &PlaylistItem) -> Result<RecentVideo, YouTubeError> {
    let snippet = item
        .snippet
        .as_ref()
        .ok_or(YouTubeError::MissingField("playlist item snippet"))?;
    let video_id = snippet
        .resource_id
        .as_ref()
        .and_then(|r| r.video_id.clone())
        .ok_or(YouTubeError::MissingField("playlist item videoId"))?;

    Ok(RecentVideo {
        video_id,
        title: text(&snippet.title),
        thumbnail_url: default_thumbnail(snippet.thumbnails.as_ref())?,
    })
}
