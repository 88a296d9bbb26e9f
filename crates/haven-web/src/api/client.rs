use std::sync::LazyLock;

use haven_core::HavenConfig;
use haven_sdk::StatsClient;
use server_fn::ServerFnError;

static CONFIG: LazyLock<HavenConfig> = LazyLock::new(|| {
    HavenConfig::load(config_path().as_deref()).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Invalid configuration, using defaults");
        HavenConfig::default()
    })
});

static CLIENT: LazyLock<Result<StatsClient, String>> =
    LazyLock::new(|| StatsClient::from_config(&CONFIG).map_err(|e| e.to_string()));

/// Optional TOML file named by `$HAVEN_CONFIG`.
pub fn config_path() -> Option<String> {
    std::env::var("HAVEN_CONFIG").ok()
}

pub fn client() -> Result<&'static StatsClient, ServerFnError> {
    CLIENT
        .as_ref()
        .map_err(|e| ServerFnError::new(format!("Stats client unavailable: {e}")))
}
