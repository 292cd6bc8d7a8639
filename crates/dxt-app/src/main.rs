use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use dxt_core::state::AppState;
use dxt_lang_german::SourceFormat;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod profile;

#[cfg(test)]
mod tests;

use commands::import::handle_import;
use commands::lookup::handle_lookup;

#[derive(Debug, Parser)]
#[command(name = "dxtionary", version, about = "Look up words in Ding dictionaries")]
pub struct Cli {
    /// JSON profile overriding the environment defaults
    #[arg(long, global = true)]
    pub profile: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub json_log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the rendered lookup of a word
    Lookup {
        word: String,
        /// Print the ranked cards as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },
    /// Import a dictionary source into the store
    Import {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Ding)]
        format: Format,
        /// Store the import in `<target>/<file name>.db` instead of the configured store
        #[arg(long)]
        target: Option<PathBuf>,
    },
    /// Write the current configuration as a profile file
    InitProfile {
        path: PathBuf,
        #[arg(long, default_value = "main")]
        name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Ding,
    Wiki,
}

impl From<Format> for SourceFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Ding => SourceFormat::Ding,
            Format::Wiki => SourceFormat::Wiki,
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = profile::load_config(cli.profile.as_deref())?;
    init_tracing(cli.json_log || config.json_log);

    let state = Arc::new(AppState::new(config));

    match cli.command {
        Command::Lookup { word, json } => {
            let output = handle_lookup(state, &word, json).await?;
            println!("{output}");
        }
        Command::Import {
            file,
            format,
            target,
        } => {
            let count = handle_import(state, &file, format.into(), target.as_deref()).await?;
            println!("{count}");
        }
        Command::InitProfile { path, name } => {
            let config = state.config.read().await;
            profile::write_profile(&path, &name, &config)?;
            tracing::info!("Wrote profile '{}' to {}", name, path.display());
        }
    }

    Ok(())
}
