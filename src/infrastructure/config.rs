use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub title: String,
    pub api_base_url: String,
    pub listen_addr: String,
    /// Unset means no timeout beyond the HTTP client's defaults.
    pub request_timeout_secs: Option<u64>,
    pub debug: bool,
}

impl DashboardConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("title", "Lucas Dashboard")?
        .set_default("api_base_url", "http://127.0.0.1:8000")?
        .set_default("listen_addr", "0.0.0.0:8080")?
        .set_default("debug", false)
}

/// Defaults, then `config/dashboard.*` if present, then `LUCAS_*` variables.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = defaults()?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("LUCAS").try_parsing(true))
        .build()?;

    Ok(settings.try_deserialize()?)
}
