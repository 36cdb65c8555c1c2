use crate::error::{Error, Result};
use crate::youtube::models::YouTubeVideoResponse;
use reqwest::blocking::Client;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

const VIDEO_PARTS: &str = "snippet,contentDetails,statistics";

pub struct YouTubeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Override base URL (config or wiremock)
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// GET /videos?part=...&id=...&key=...
    pub fn fetch_video(&self, id: &str) -> Result<YouTubeVideoResponse> {
        let url = format!("{}/videos", self.base_url);
        debug!(%url, id, "fetching video from YouTube API");

        let response = self
            .client
            .get(&url)
            .query(&[("part", VIDEO_PARTS), ("id", id), ("key", self.api_key.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<YouTubeVideoResponse>()?)
    }
}
