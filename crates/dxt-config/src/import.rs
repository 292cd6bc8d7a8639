use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BUFFER_SIZE: usize = 1024;

fn default_buffer_size() -> usize {
    env::var("DXT_IMPORT_BUFFER")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_BUFFER_SIZE)
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ImportConfig {
    /// Entries buffered before each insert into the store
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

impl ImportConfig {
    pub fn new() -> Self {
        Self {
            buffer_size: default_buffer_size(),
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self::new()
    }
}
