use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api/v1/".to_string(),
            timeout_seconds: 30,
            connect_timeout_seconds: 30,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self { api: ApiConfig::default() }
    }
}

impl Settings {
    /// Load settings from `config/settings.toml` (optional) layered with
    /// `WARUNG__`-prefixed environment variables, e.g. `WARUNG__API__BASE_URL`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = ApiConfig::default();

        let config = Config::builder()
            .set_default("api.base_url", defaults.base_url)?
            .set_default("api.timeout_seconds", defaults.timeout_seconds)?
            .set_default("api.connect_timeout_seconds", defaults.connect_timeout_seconds)?
            .add_source(File::with_name("config/settings").required(false))
            .add_source(
                Environment::with_prefix("WARUNG")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }
}
