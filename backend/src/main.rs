#[macro_use]
extern crate rocket;

mod api;
mod config;
mod models;
mod services;
mod utils;

use rocket::{Build, Rocket};
use services::youtube_service::YouTubeService;

pub struct AppState {
    pub youtube: YouTubeService,
}

#[get("/health")]
fn health() -> &'static str {
    "OK"
}

pub fn build_rocket(state: AppState, cors: rocket_cors::Cors) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .attach(cors)
        .mount("/", routes![health])
        .mount(
            "/api/search",
            routes![api::search_videos, api::search_video_details],
        )
        .mount(
            "/api/video",
            routes![api::get_video_details, api::get_video_details_by_url],
        )
        .mount(
            "/api/channel",
            routes![api::get_channel_profile, api::get_channel_profile_by_url],
        )
        .mount(
            "/api/stats",
            routes![api::get_descriptions, api::get_word_stats],
        )
        .mount("/api/tag", routes![api::get_tag])
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    config::load_environment();
    config::init_logger();

    let state = config::create_app_state()?;
    let cors = config::create_cors()?;

    build_rocket(state, cors)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket failed: {e}"))?;

    Ok(())
}
