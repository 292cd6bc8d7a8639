use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::import::ImportConfig;
use self::render::RenderConfig;

pub mod dictionary;
pub mod import;
pub mod render;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub render: RenderConfig,
    pub import: ImportConfig,

    /// Emit log lines as JSON instead of plain text
    pub json_log: bool,
}

impl Config {
    pub fn new() -> Self {
        let json_log = env::var("DXT_JSON_LOG")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Config {
            dictionary: DictionaryConfig::new(),
            render: RenderConfig::new(),
            import: ImportConfig::new(),

            json_log,
        }
    }

    /// Parse a JSON profile. Missing sections fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
