use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::{Filter, Options};

/// Lucene accepts edit distances of 0, 1 or 2.
pub const MAX_FUZZY_LEVEL: u32 = 2;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub search: SearchConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub fuzzy_letters: usize,
    pub fuzzy_level: u32,
    pub proximity: Option<u32>,
    pub url_encoded: bool,
    pub strict_date_ranges: bool,
    pub query_parser: String,
    pub return_fields: String,
    pub filter_field: String,
    pub filter_values: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        let defaults = Options::defaults().phrase_options();
        Self {
            fuzzy_letters: defaults.fuzzy_letters,
            fuzzy_level: defaults.fuzzy_level,
            proximity: None,
            url_encoded: false,
            strict_date_ranges: false,
            query_parser: "lucene".to_string(),
            return_fields: "_all_fields".to_string(),
            filter_field: "type".to_string(),
            filter_values: vec!["rundate".to_string(), "activity".to_string()],
        }
    }
}

impl SearchConfig {
    pub fn options(&self) -> Options {
        Options {
            fuzzy_letters: Some(self.fuzzy_letters),
            fuzzy_level: Some(self.fuzzy_level),
            proximity: self.proximity,
            url_encoded: Some(self.url_encoded),
            strict_date_ranges: Some(self.strict_date_ranges),
        }
    }

    /// The fixed filter every preview search is restricted by, if any.
    pub fn default_filter(&self) -> Option<Filter> {
        if self.filter_field.is_empty() || self.filter_values.is_empty() {
            return None;
        }
        Some(Filter::new().with_any_of(self.filter_field.clone(), self.filter_values.clone()))
    }
}

impl AppConfig {
    /// Defaults, then `config.toml` when present, then `APP_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if path.exists() {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.search.fuzzy_letters == 0 {
            return Err(ConfigError::Message(
                "Fuzzy letters must be greater than 0".to_string(),
            ));
        }

        if self.search.fuzzy_level > MAX_FUZZY_LEVEL {
            return Err(ConfigError::Message(format!(
                "Fuzzy level must be at most {}",
                MAX_FUZZY_LEVEL
            )));
        }

        if self.search.query_parser.is_empty() {
            return Err(ConfigError::Message(
                "Query parser cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
