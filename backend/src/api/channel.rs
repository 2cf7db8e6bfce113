use crate::api::object_or_empty;
use crate::models::ErrorResponse;
use crate::utils::normalize_channel_id;
use crate::AppState;
use rocket::serde::json::Json;
use rocket::{get, State};
use serde_json::Value;

async fn channel_profile(input: &str, state: &AppState) -> Result<Json<Value>, ErrorResponse> {
    let channel_id = normalize_channel_id(input);
    if channel_id.is_empty() {
        return Err(ErrorResponse {
            error: "invalid_channel_id".to_string(),
            message: "A channel id or /channel/ URL is required".to_string(),
        });
    }

    Ok(object_or_empty(
        state.youtube.fetch_channel_profile(&channel_id).await,
    ))
}

#[get("/<id>")]
pub async fn get_channel_profile(
    id: &str,
    state: &State<AppState>,
) -> Result<Json<Value>, ErrorResponse> {
    channel_profile(id, state).await
}

#[get("/?<url>")]
pub async fn get_channel_profile_by_url(
    url: String,
    state: &State<AppState>,
) -> Result<Json<Value>, ErrorResponse> {
    channel_profile(&url, state).await
}
