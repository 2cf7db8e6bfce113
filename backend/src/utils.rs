use url::Url;

/// Accepts a bare video id or any common YouTube video URL and returns the id.
pub fn normalize_video_id(input: &str) -> String {
    let input = input.trim();
    extract_youtube_video_id(input).unwrap_or_else(|| input.to_string())
}

/// Accepts a bare channel id or a `/channel/<id>` URL and returns the id.
pub fn normalize_channel_id(input: &str) -> String {
    let input = input.trim();
    Url::parse(input)
        .ok()
        .and_then(|url| {
            let mut segments = url.path_segments()?;
            match (segments.next(), segments.next()) {
                (Some("channel"), Some(id)) if !id.is_empty() => Some(id.to_string()),
                _ => None,
            }
        })
        .unwrap_or_else(|| input.to_string())
}

fn extract_youtube_video_id(input: &str) -> Option<String> {
    let parsed_url = Url::parse(input).ok()?;
    let host = parsed_url.host_str()?;

    let id = match host {
        "www.youtube.com" | "youtube.com" | "m.youtube.com" => {
            let mut segments = parsed_url.path_segments()?;
            match segments.next()? {
                // https://www.youtube.com/watch?v=VIDEO_ID
                "watch" => parsed_url
                    .query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.to_string()),
                // https://www.youtube.com/embed/VIDEO_ID, /shorts/VIDEO_ID
                "embed" | "shorts" => segments.next().map(str::to_string),
                _ => None,
            }
        }
        // https://youtu.be/VIDEO_ID
        "youtu.be" => parsed_url
            .path_segments()
            .and_then(|mut segments| segments.next())
            .map(str::to_string),
        _ => None,
    };

    id.filter(|id| !id.is_empty())
}
