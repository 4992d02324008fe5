use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::history::HistoryStore;
use crate::theme::Theme;

/// jsonscope - Terminal JSON viewer, validator and formatter
///
/// Configuration priority: CLI args > Environment variables > Defaults
#[derive(Parser, Debug)]
#[command(name = "jsonscope")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal JSON viewer, validator and formatter", long_about = None)]
pub struct CliArgs {
    /// JSON file to load into the editor at startup
    pub file: Option<PathBuf>,

    /// Color theme: dark or light
    #[arg(long, env = "JSONSCOPE_THEME", value_parser = clap::value_parser!(Theme))]
    pub theme: Option<Theme>,

    /// Path of the history file (default: <data-local-dir>/jsonscope/history.json)
    #[arg(long, env = "JSONSCOPE_HISTORY_PATH")]
    pub history_path: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub file: Option<PathBuf>,
    pub theme: Theme,
    pub history_path: PathBuf,
}

/// Load configuration from CLI args and environment variables.
pub fn load() -> Result<Config> {
    let args = CliArgs::parse();

    if let Some(file) = &args.file {
        if !file.is_file() {
            anyhow::bail!("File not found: {}", file.display());
        }
    }

    let history_path = args
        .history_path
        .unwrap_or_else(HistoryStore::default_path);
    if let Some(parent) = history_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create history directory {}", parent.display())
            })?;
        }
    }

    Ok(Config {
        file: args.file,
        theme: args.theme.unwrap_or_default(),
        history_path,
    })
}
