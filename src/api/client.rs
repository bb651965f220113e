use once_cell::sync::Lazy;

use crate::api::models::{EpisodeDetails, EpisodeRecord};
use crate::api::ApiError;
use crate::settings::AppSettings;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Number of episodes the home page lists.
pub const HOME_EPISODE_LIMIT: u32 = 12;

/// Client for the JSON episode backend.
#[derive(Debug, Clone, PartialEq)]
pub struct PodcastClient {
    base_url: String,
}

impl PodcastClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(settings.api_url.clone())
    }

    fn episodes_url(&self) -> String {
        format!("{}/episodes", self.base_url)
    }

    fn episode_url(&self, id: &str) -> String {
        format!("{}/episodes/{}", self.base_url, id.trim_matches('/'))
    }

    /// Most recently published episodes, newest first.
    pub async fn latest_episodes(&self, limit: u32) -> Result<Vec<EpisodeDetails>, ApiError> {
        let url = self.episodes_url();
        tracing::debug!(%url, limit, "fetching episode list");
        let request = HTTP_CLIENT.get(&url).query(&[
            ("_limit", limit.to_string()),
            ("_sort", "published_at".to_string()),
            ("_order", "desc".to_string()),
        ]);
        let body = send(request, &url).await?;
        let episodes = parse_episode_list(&body)?;
        tracing::info!(count = episodes.len(), "loaded episode list");
        Ok(episodes)
    }

    pub async fn episode(&self, id: &str) -> Result<EpisodeDetails, ApiError> {
        let url = self.episode_url(id);
        tracing::debug!(%url, "fetching episode");
        let body = send(HTTP_CLIENT.get(&url), &url).await?;
        parse_episode(&body)
    }
}

async fn send(request: reqwest::RequestBuilder, url: &str) -> Result<String, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%url, status = status.as_u16(), "episode backend returned an error");
        return Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response.text().await?)
}

pub fn parse_episode_list(body: &str) -> Result<Vec<EpisodeDetails>, ApiError> {
    let records: Vec<EpisodeRecord> = serde_json::from_str(body)?;
    records.into_iter().map(EpisodeDetails::try_from).collect()
}

pub fn parse_episode(body: &str) -> Result<EpisodeDetails, ApiError> {
    let record: EpisodeRecord = serde_json::from_str(body)?;
    EpisodeDetails::try_from(record)
}
