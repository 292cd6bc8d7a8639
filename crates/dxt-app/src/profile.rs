use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use dxt_config::Config;
use serde::{Deserialize, Serialize};

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Load a profile file, or build the configuration from the environment
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };

    let file = File::open(path)?;
    let profile: Profile = serde_json::from_reader(BufReader::new(file))?;
    tracing::debug!("Loaded profile '{}' from {}", profile.name, path.display());
    Ok(profile.value)
}

pub fn write_profile(path: &Path, name: &str, config: &Config) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let profile = Profile {
        name: name.into(),
        value: config.clone(),
    };
    fs::write(path, serde_json::to_string_pretty(&profile)?)?;
    Ok(())
}
