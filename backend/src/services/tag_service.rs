use crate::models::{TagRequest, TagResponse};
use log::warn;

/// Count reported for every valid tag until tag lookups are backed by a
/// real index.
pub const DEFAULT_TAG_VIDEO_COUNT: u32 = 10;

pub fn lookup_tag(request: TagRequest) -> TagResponse {
    match request.tag_name {
        Some(tag_name) if !tag_name.is_empty() => TagResponse {
            tag_name: Some(tag_name),
            video_count: DEFAULT_TAG_VIDEO_COUNT,
            error_message: None,
        },
        _ => {
            warn!("Rejected tag lookup without a tag name");
            TagResponse {
                tag_name: None,
                video_count: 0,
                error_message: Some("Invalid tag name".to_string()),
            }
        }
    }
}
