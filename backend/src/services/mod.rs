pub mod mapper;
pub mod tag_service;
pub mod word_stats;
pub mod youtube_client;
pub mod youtube_service;
pub mod youtube_types;

#[cfg(test)]
pub mod testing;
