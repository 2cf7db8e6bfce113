use crate::services::youtube_client::ReqwestYouTubeClient;
use crate::services::youtube_service::YouTubeService;
use crate::AppState;
use anyhow::{Context, Result};
use env_logger::{Builder, Env};
use lazy_static::lazy_static;
use log::{info, warn};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_APPLICATION_NAME: &str = "Reactive TubeLytics";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

lazy_static! {
    pub static ref YOUTUBE_API_KEY: String = env::var("YOUTUBE_API_KEY").unwrap_or_default();
    pub static ref YOUTUBE_API_BASE_URL: String = env::var("YOUTUBE_API_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_YOUTUBE_API_BASE_URL.to_string());
    pub static ref YOUTUBE_TIMEOUT_SECS: u64 =
        parse_timeout_secs(env::var("YOUTUBE_TIMEOUT_SECS").ok().as_deref());
    pub static ref APPLICATION_NAME: String =
        env::var("APPLICATION_NAME").unwrap_or_else(|_| DEFAULT_APPLICATION_NAME.to_string());
    pub static ref ALLOWED_ORIGIN: String =
        env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "http://localhost:8080".to_string());
}

/// Settings handed to the YouTube client at construction.
#[derive(Debug, Clone)]
pub struct YouTubeConfig {
    pub api_key: String,
    pub base_url: String,
    pub application_name: String,
    pub timeout: Duration,
}

impl YouTubeConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: YOUTUBE_API_KEY.clone(),
            base_url: YOUTUBE_API_BASE_URL.clone(),
            application_name: APPLICATION_NAME.clone(),
            timeout: Duration::from_secs(*YOUTUBE_TIMEOUT_SECS),
        }
    }
}

fn parse_timeout_secs(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

pub fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    info!("Starting TubeLytics backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn create_app_state() -> Result<AppState> {
    let config = YouTubeConfig::from_env();
    if config.api_key.is_empty() {
        warn!("YOUTUBE_API_KEY is not set; every YouTube lookup will come back empty");
    }
    info!(
        "Using YouTube API at {} (timeout {}s)",
        config.base_url,
        config.timeout.as_secs()
    );

    let client = ReqwestYouTubeClient::new(&config).context("Building YouTube API client")?;

    Ok(AppState {
        youtube: YouTubeService::new(Arc::new(client)),
    })
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[ALLOWED_ORIGIN.as_str()]))
        .allowed_methods(
            vec![Method::Get, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .allow_credentials(false)
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_defaults_when_missing_or_invalid() {
        assert_eq!(parse_timeout_secs(None), DEFAULT_TIMEOUT_SECS);
        assert_eq!(parse_timeout_secs(Some("soon")), DEFAULT_TIMEOUT_SECS);
        assert_eq!(parse_timeout_secs(Some("0")), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn timeout_parses_seconds() {
        assert_eq!(parse_timeout_secs(Some(" 30 ")), 30);
    }

    #[test]
    fn cors_options_build() {
        assert!(create_cors().is_ok());
    }
}
