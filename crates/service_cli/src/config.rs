//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line arguments.

use bell_core::types::ClockFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "classclock.toml";

/// Default school data file.
pub const DEFAULT_DATA_FILE: &str = "school.json";

/// Environment variable overriding the data file.
pub const ENV_DATA: &str = "CLASSCLOCK_DATA";

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "CLASSCLOCK_LOG_LEVEL";

/// Environment variable selecting 24-hour time.
pub const ENV_24H: &str = "CLASSCLOCK_24H";

/// Errors raised while assembling a [`CliConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unrecognised log level.
    #[error("Unknown log level '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),

    /// Unrecognised boolean flag value.
    #[error("Invalid value for {name}: {value}. Must be true or false")]
    InvalidFlag {
        /// The setting being read.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// No data file configured.
    #[error("The school data file path must not be empty")]
    EmptyDataFile,

    /// The configuration file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted by `--log-level` and the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum LogLevel {
    /// Everything, including per-step decode traces.
    Trace,
    /// Schedule mutations and decode steps.
    Debug,
    /// Command progress.
    Info,
    /// Defaulted attributes and suspicious data.
    #[default]
    Warn,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// Every level, most verbose first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// The `EnvFilter` directive for this level.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_filter_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::InvalidLogLevel(s.to_string()))
    }
}

impl TryFrom<String> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, <LogLevel as TryFrom<String>>::Error> {
        value.parse()
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// School bundle file read by every command.
    pub data_file: PathBuf,
    /// Minimum level written to stderr.
    pub log_level: LogLevel,
    /// Display times on a 24-hour clock.
    pub use_24_hour_time: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: LogLevel::default(),
            use_24_hour_time: false,
        }
    }
}

impl CliConfig {
    /// Overrides fields from environment variables resolved by `lookup`.
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(data) = lookup(ENV_DATA) {
            self.data_file = PathBuf::from(data);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(flag) = lookup(ENV_24H) {
            self.use_24_hour_time = parse_flag(ENV_24H, &flag)?;
        }
        Ok(())
    }

    /// Reads and validates a TOML config file. Missing keys take defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("cannot read {}: {e}", path.display())))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("{}: {e}", path.display())))?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects settings no command can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_file.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDataFile);
        }
        Ok(())
    }

    /// The clock style for displayed times.
    pub fn clock_format(&self) -> ClockFormat {
        ClockFormat::from_24_hour_flag(self.use_24_hour_time)
    }

    /// Applies command-line overrides on top of file and environment values.
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(data_file) = &cli.data_file {
            self.data_file = data_file.clone();
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        } else if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if cli.use_24_hour_time {
            self.use_24_hour_time = true;
        }
        Ok(())
    }
}

/// Configuration-relevant command-line values.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path; the default file may be absent.
    pub config_file: Option<PathBuf>,
    /// Data file override
    pub data_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Raise the log level to debug unless one is given explicitly.
    pub verbose: bool,
    /// Force 24-hour time.
    pub use_24_hour_time: bool,
}

/// Resolves the effective configuration.
///
/// Command-line values beat `CLASSCLOCK_*` environment variables, which beat
/// the config file, which beats the built-in defaults.
///
/// An explicitly named config file must exist; the default one is optional.
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |name| std::env::var(name).ok())
}

/// [`build_config`] with an injectable environment.
pub fn build_config_with_env(
    cli: &CliArgs,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<CliConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                CliConfig::default()
            }
        }
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
