use std::env;

use serde::{Deserialize, Serialize};

fn default_declension() -> bool {
    true
}

fn default_max_results() -> usize {
    env::var("DXT_MAX_RESULTS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RenderConfig {
    /// Prepend declension tables when the best match is a noun
    #[serde(default = "default_declension")]
    pub declension: bool,
    /// Number of ranked cards to render, 0 renders all of them
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self {
            declension: default_declension(),
            max_results: default_max_results(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}
