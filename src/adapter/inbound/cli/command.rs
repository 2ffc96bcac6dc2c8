//! Command-line interface definitions.
//!
//! Defines the CLI structure for surgewatch using `clap`. Running without a
//! subcommand behaves like `surgewatch run`.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Realtime kline surge monitor for Binance USD-M futures
#[derive(Parser, Debug)]
#[command(name = "surgewatch")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stream klines and alert on surges (foreground)
    Run(RunArgs),

    /// Validate configuration and print the shard plan without connecting
    Check(CheckArgs),
}

/// Shared argument struct for commands that read a configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigPathArg {
    /// Path to the configuration file [default: ./config.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ConfigPathArg {
    /// Load the configuration this argument points at.
    ///
    /// An explicit path must exist. Without one, `config.toml` in the working
    /// directory is used when present and built-in defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[allow(clippy::result_large_err)]
    pub fn load(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Config::load(DEFAULT_CONFIG_FILE),
            None => {
                let config = Config::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Human-readable description of where configuration comes from.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.config {
            Some(path) => path.display().to_string(),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => DEFAULT_CONFIG_FILE.to_string(),
            None => "built-in defaults".to_string(),
        }
    }
}

/// Arguments for `surgewatch run`.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Override the log level (e.g. `debug`, `surgewatch=trace`)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for `surgewatch check`.
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Only validate the configuration; skip the symbol fetch
    #[arg(long)]
    pub offline: bool,
}
