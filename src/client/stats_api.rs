/// Stats provider API client for per-player game logs

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::config::settings::Api;

use super::game_log::{GameLogRecord, GameLogsResponse};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("game log request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("stats API returned {0}")]
    Status(StatusCode),
    #[error("malformed game log response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid stats endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

pub struct StatsClient {
    client: Client,
    base_url: String,
    api_key: String,
    page_limit: u32,
    sort: String,
}

impl StatsClient {
    pub fn new(api: &Api) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            api_key: api.api_key.clone(),
            page_limit: api.page_limit,
            sort: api.sort.clone(),
        })
    }

    /// Fetches one page of game logs for a player. One request per
    /// invocation; failures are reported once, never retried.
    pub async fn fetch_game_logs(&self, player_id: &str) -> Result<Vec<GameLogRecord>, FetchError> {
        let url = self.game_logs_url(player_id)?;

        info!("🌐 Fetching game logs for player {}", player_id);
        debug!("GET {}/players/{}/game-logs", self.base_url, player_id);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().await?;
        let parsed: GameLogsResponse = serde_json::from_str(&body)?;

        let records: Vec<GameLogRecord> =
            parsed.data.into_iter().map(GameLogRecord::from).collect();

        info!("📄 Received {} game log records", records.len());
        Ok(records)
    }

    fn game_logs_url(&self, player_id: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!(
            "{}/players/{}/game-logs",
            self.base_url, player_id
        ))?;
        url.query_pairs_mut()
            .append_pair("offset", "0")
            .append_pair("limit", &self.page_limit.to_string())
            .append_pair("sort", &self.sort)
            .append_pair("apiKey", &self.api_key);
        Ok(url)
    }
}
