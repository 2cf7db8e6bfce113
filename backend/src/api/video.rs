use crate::api::object_or_empty;
use crate::models::ErrorResponse;
use crate::utils::normalize_video_id;
use crate::AppState;
use rocket::serde::json::Json;
use rocket::{get, State};
use serde_json::Value;

async fn video_details(input: &str, state: &AppState) -> Result<Json<Value>, ErrorResponse> {
    let video_id = normalize_video_id(input);
    if video_id.is_empty() {
        return Err(ErrorResponse {
            error: "invalid_video_id".to_string(),
            message: "A video id or YouTube video URL is required".to_string(),
        });
    }

    Ok(object_or_empty(state.youtube.get_video_details(&video_id).await))
}

#[get("/<id>")]
pub async fn get_video_details(
    id: &str,
    state: &State<AppState>,
) -> Result<Json<Value>, ErrorResponse> {
    video_details(id, state).await
}

/// Same lookup keyed by a full URL, e.g. `?url=https://youtu.be/<id>`.
#[get("/?<url>")]
pub async fn get_video_details_by_url(
    url: String,
    state: &State<AppState>,
) -> Result<Json<Value>, ErrorResponse> {
    video_details(&url, state).await
}
