use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HavenConfig {
    /// Base URL of the stats API; role paths are appended to it.
    pub api_url: String,
    pub user_agent: String,
    pub log_filter: String,
}

impl Default for HavenConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000/api".to_string(),
            user_agent: format!("haven-dashboard/{}", env!("CARGO_PKG_VERSION")),
            log_filter: "haven=info,haven_web=info,tower_http=info".to_string(),
        }
    }
}

impl HavenConfig {
    pub fn load(config_path: Option<&str>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(HavenConfig::default()));

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("HAVEN_").split("__"));

        figment.extract()
    }
}
