use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::{response, Response};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::io::Cursor;

pub const NO_TAGS_PLACEHOLDER: &str = "No tags available";
pub const NO_DESCRIPTION_PLACEHOLDER: &str = "No description available";

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub thumbnail_url: String,
}

/// Search hit enriched by the batched `videos.list` lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetail {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub channel_id: String,
    pub default_thumbnail: String,
    pub tags: String, // comma-joined, or NO_TAGS_PLACEHOLDER
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoStats {
    pub title: String,
    pub description: String,
    pub likes: String,
    pub views: String,
    pub tags: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentVideo {
    pub video_id: String,
    pub title: String,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelProfile {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_count: Option<u64>,
    #[serde(default)]
    pub recent_videos: Vec<RecentVideo>,
}

/// Token counts ordered by descending count, ties in first-seen order.
///
/// Serializes as a JSON object whose key order is the ranking order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequency {
    entries: Vec<(String, usize)>,
}

impl WordFrequency {
    /// `entries` must already be ranked and free of duplicate words.
    pub(crate) fn from_ranked(entries: Vec<(String, usize)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// The `n` highest ranked words, keeping their order.
    pub fn top(&self, n: usize) -> WordFrequency {
        Self::from_ranked(self.entries.iter().take(n).cloned().collect())
    }

    /// Total number of tokens counted.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for WordFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, count) in &self.entries {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRequest {
    pub tag_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
    pub video_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl<'r> Responder<'r, 'static> for ErrorResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let json = serde_json::to_string(&self).map_err(|_| Status::InternalServerError)?;
        Response::build()
            .status(Status::BadRequest)
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn word_frequency_serializes_in_rank_order() {
        let stats = WordFrequency::from_ranked(vec![
            ("zebra".to_string(), 3),
            ("apple".to_string(), 1),
        ]);
        assert_eq!(
            serde_json::to_string(&stats).unwrap(),
            r#"{"zebra":3,"apple":1}"#
        );
    }

    #[test]
    fn word_frequency_accessors() {
        let stats = WordFrequency::from_ranked(vec![
            ("cats".to_string(), 3),
            ("dogs".to_string(), 2),
            ("and".to_string(), 1),
        ]);
        assert_eq!(stats.get("dogs"), Some(2));
        assert_eq!(stats.get("birds"), None);
        assert_eq!(stats.total(), 6);
        assert_eq!(stats.top(2).len(), 2);
        assert_eq!(stats.top(10).len(), 3);
        let ranked: Vec<&str> = stats.iter().map(|(word, _)| word).collect();
        assert_eq!(ranked, vec!["cats", "dogs", "and"]);
        assert_eq!(stats.top(1).get("cats"), Some(3));
        assert_eq!(stats.top(1).get("dogs"), None);
    }

    #[test]
    fn channel_profile_omits_hidden_counts() {
        let profile = ChannelProfile {
            title: "Rust".to_string(),
            description: "Systems".to_string(),
            thumbnail: "https://i.ytimg.com/c.jpg".to_string(),
            subscriber_count: None,
            video_count: Some(12),
            recent_videos: Vec::new(),
        };
        assert_eq!(
            serde_json::to_value(&profile).unwrap(),
            json!({
                "title": "Rust",
                "description": "Systems",
                "thumbnail": "https://i.ytimg.com/c.jpg",
                "videoCount": 12,
                "recentVideos": []
            })
        );
    }

    #[test]
    fn tag_error_response_has_no_tag_name_key() {
        let response = TagResponse {
            tag_name: None,
            video_count: 0,
            error_message: Some("Invalid tag name".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "videoCount": 0, "errorMessage": "Invalid tag name" })
        );
    }
}
