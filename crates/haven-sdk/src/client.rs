use haven_core::{
    AdminStats, CounselorStats, FetchFailure, HavenConfig, Role, StatsService, UserStats,
};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::SdkError;

/// HTTP client for the stats API. One GET per call, no retry, no timeout.
#[derive(Clone, Debug)]
pub struct StatsClient {
    http: Client,
    base: String,
}

impl StatsClient {
    pub fn new(api_url: &str) -> Result<Self, SdkError> {
        Self::with_user_agent(api_url, &HavenConfig::default().user_agent)
    }

    pub fn from_config(config: &HavenConfig) -> Result<Self, SdkError> {
        Self::with_user_agent(&config.api_url, &config.user_agent)
    }

    fn with_user_agent(api_url: &str, user_agent: &str) -> Result<Self, SdkError> {
        let parsed = Url::parse(api_url).map_err(|e| SdkError::InvalidUrl(format!("{api_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SdkError::InvalidUrl(format!(
                "{api_url}: unsupported scheme {}",
                parsed.scheme()
            )));
        }

        let http = Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            http,
            base: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Full URL of the stats endpoint for `role`.
    pub fn url_for(&self, role: Role) -> String {
        format!("{}{}", self.base, role.stats_path())
    }

    async fn get<T: DeserializeOwned>(&self, role: Role) -> Result<T, FetchFailure> {
        let url = self.url_for(role);
        debug!(role = %role, url = %url, "GET stats");

        let result = self.fetch(&url).await;
        match &result {
            Ok(_) => haven_core::metrics::record_fetch_succeeded(role),
            Err(err) => haven_core::metrics::record_fetch_failed(role, err.kind()),
        }
        result
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchFailure> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchFailure::Status { status, body });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl StatsService for StatsClient {
    async fn get_user_stats(&self) -> Result<UserStats, FetchFailure> {
        self.get(Role::User).await
    }

    async fn get_counselor_stats(&self) -> Result<CounselorStats, FetchFailure> {
        self.get(Role::Counselor).await
    }

    async fn get_admin_stats(&self) -> Result<AdminStats, FetchFailure> {
        self.get(Role::Admin).await
    }
}
