use crate::models::{VideoDetail, VideoSummary};
use crate::AppState;
use rocket::serde::json::Json;
use rocket::{get, State};

#[get("/?<query>")]
pub async fn search_videos(query: &str, state: &State<AppState>) -> Json<Vec<VideoSummary>> {
    Json(state.youtube.search_videos(query).await)
}

#[get("/details?<query>")]
pub async fn search_video_details(
    query: &str,
    state: &State<AppState>,
) -> Json<Vec<VideoDetail>> {
    Json(state.youtube.search_videos_with_detail(query).await)
}
