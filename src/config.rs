// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{MediaError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    pub survey: SurveyConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub search_endpoint: String,
    pub user_agent: String,
    /// Unset means requests never time out.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SurveyConfig {
    pub image_count: usize,
    pub contributor_tag: String,
    #[serde(default = "default_show_progress")]
    pub show_progress: bool,
}

fn default_show_progress() -> bool {
    true
}

impl Config {
    /// Built-in defaults, then the config file, then `NASA_MEDIA__*` variables.
    /// An explicit `path` must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();
        Self::load_with_env(path, Path::new(DEFAULT_CONFIG_PATH), Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("NASA_MEDIA")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env(
        path: Option<&Path>,
        default_path: &Path,
        environment: config::Environment,
    ) -> Result<Self> {
        let defaults = Self::default_config();

        let mut builder = config::Config::builder()
            .set_default("api.search_endpoint", defaults.api.search_endpoint)
            .and_then(|b| b.set_default("api.user_agent", defaults.api.user_agent))
            .and_then(|b| b.set_default("survey.image_count", defaults.survey.image_count as i64))
            .and_then(|b| b.set_default("survey.contributor_tag", defaults.survey.contributor_tag))
            .and_then(|b| b.set_default("survey.show_progress", defaults.survey.show_progress))
            .map_err(|e| MediaError::Config(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(default_path).required(false));
        }

        builder = builder.add_source(environment);

        let settings = builder
            .build()
            .map_err(|e| MediaError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| MediaError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            api: ApiConfig {
                search_endpoint: "https://images-api.nasa.gov/search".to_string(),
                user_agent: format!("nasa_media/{}", env!("CARGO_PKG_VERSION")),
                request_timeout_secs: None,
            },
            survey: SurveyConfig {
                image_count: 5,
                contributor_tag: "NASA".to_string(),
                show_progress: true,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.api.search_endpoint.trim().is_empty() {
            return Err(MediaError::Config(
                "search_endpoint must not be empty".to_string(),
            ));
        }

        if !self.api.search_endpoint.starts_with("http://")
            && !self.api.search_endpoint.starts_with("https://")
        {
            return Err(MediaError::Config(format!(
                "search_endpoint must be an http(s) URL: {}",
                self.api.search_endpoint
            )));
        }

        if self.survey.image_count == 0 {
            return Err(MediaError::Config(
                "image_count must be greater than 0".to_string(),
            ));
        }

        if self.survey.contributor_tag.trim().is_empty() {
            return Err(MediaError::Config(
                "contributor_tag must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
