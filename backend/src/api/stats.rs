use crate::models::WordFrequency;
use crate::AppState;
use rocket::serde::json::Json;
use rocket::{get, State};

#[get("/descriptions?<query>")]
pub async fn get_descriptions(query: &str, state: &State<AppState>) -> Json<Vec<String>> {
    Json(state.youtube.fetch_descriptions_by_query(query).await)
}

/// Word frequencies across matching descriptions, optionally cut to the
/// `limit` most frequent words.
#[get("/words?<query>&<limit>")]
pub async fn get_word_stats(
    query: &str,
    limit: Option<usize>,
    state: &State<AppState>,
) -> Json<WordFrequency> {
    let stats = state.youtube.fetch_word_stats(query).await;
    match limit {
        Some(limit) => Json(stats.top(limit)),
        None => Json(stats),
    }
}
