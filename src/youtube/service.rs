use crate::config::Config;
use crate::error::Result;
use crate::youtube::client::YouTubeClient;
use crate::youtube::mock;
use crate::youtube::models::{EquipmentComparison, YouTubeVideo, YouTubeVideoResponse};
use crate::youtube::retry::with_retry;
use tracing::{debug, info};

pub const VIDEO_QUERY_KEY: &str = "youtubeVideo";
pub const EQUIPMENT_QUERY_KEY: &str = "equipmentComparison";

/// Fetch the raw videos response, live when a key is configured, otherwise the fixture.
pub fn fetch_video_response(config: &Config, id: &str) -> Result<YouTubeVideoResponse> {
    match config.youtube.live_api_key() {
        Some(key) => {
            info!(id, "fetching video from YouTube API");
            let mut client = YouTubeClient::new(key);
            if let Some(url) = &config.youtube.api_url {
                client = client.with_base_url(url);
            }
            client.fetch_video(id)
        }
        None => {
            debug!(id, "serving mock video");
            Ok(mock::fetch_video_mock(config.youtube.mock_latency()))
        }
    }
}

/// First video of the response for `id`; `None` when the API returned no items.
pub fn fetch_single_video(config: &Config, id: &str) -> Result<Option<YouTubeVideo>> {
    let response = with_retry(|| fetch_video_response(config, id), config.query.retry)?;
    let video = response.items.into_iter().next();
    if video.is_none() {
        info!(id, "no video returned");
    }
    Ok(video)
}

pub fn fetch_equipment_comparison(config: &Config) -> Result<Vec<EquipmentComparison>> {
    with_retry(
        || Ok(mock::fetch_equipment_comparison(config.youtube.mock_latency())),
        config.query.retry,
    )
}
