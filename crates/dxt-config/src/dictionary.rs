use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_path() -> String {
    env::var("DXT_DB_PATH").unwrap_or_else(|_| "dxtionary.db".to_string())
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// JSON-lines store file
    #[serde(default = "default_path")]
    pub path: String,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        Self {
            enabled: default_enabled(),
            path: default_path(),
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self::new()
    }
}
