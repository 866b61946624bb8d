//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::processing::recommender::MatchSettings;

/// Default location of the optional YAML settings file.
pub const DEFAULT_CONFIG_PATH: &str = "config/default";

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
/// Settings shared by the console and the ZMQ service.
pub struct ServerConfig {
    pub data_path: String,
    pub model_name: String,
    pub threshold: f32,
    pub top_n: usize,
    pub zmq_address: String,
    pub show_download_progress: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_path: "data/records.json".to_string(),
            model_name: "paraphrase-multilingual-MiniLM-L12-v2".to_string(),
            threshold: crate::SIMILARITY_THRESHOLD,
            top_n: crate::TOP_N,
            zmq_address: "tcp://127.0.0.1:5556".to_string(),
            show_download_progress: true,
        }
    }
}

impl ServerConfig {
    /// Layer `APP__*` environment variables over the YAML file at `path`.
    ///
    /// The file is optional; missing keys fall back to defaults.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::Message(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        if self.top_n == 0 {
            return Err(ConfigError::Message("top_n must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn match_settings(&self) -> MatchSettings {
        MatchSettings {
            threshold: self.threshold,
            top_n: self.top_n,
        }
    }
}
