//! Configuration file loading with precedence handling.

use crate::state::TransitionPolicy;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "QDESK_CONFIG";
/// Environment variable overriding the queue file.
pub const ENV_QUEUE_FILE: &str = "QDESK_QUEUE_FILE";
/// Environment variable overriding the transition policy.
pub const ENV_TRANSITION_POLICY: &str = "QDESK_TRANSITION_POLICY";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or an unknown key.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// An environment variable holds a value that cannot be used.
    #[error("Invalid value for {var}: {reason}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// Why the value was refused.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/qdesk/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Queue file opened when none is given on the command line.
    #[serde(default)]
    pub queue_file: Option<PathBuf>,

    /// Department shown by default.
    #[serde(default)]
    pub department: Option<String>,

    /// Show stats panel on startup.
    #[serde(default)]
    pub show_stats: Option<bool>,

    /// `"permissive"` or `"strict"`.
    #[serde(default)]
    pub transition_policy: Option<TransitionPolicy>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Queue file, if any source named one.
    pub queue_file: Option<PathBuf>,
    /// Department restriction.
    pub department: Option<String>,
    /// Show stats on startup.
    pub show_stats: bool,
    /// Which status changes the desk accepts.
    pub transition_policy: TransitionPolicy,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            queue_file: None,
            department: None,
            show_stats: false,
            transition_policy: TransitionPolicy::Permissive,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/qdesk/qdesk.log` on Linux, or the platform's
/// state directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("qdesk").join("qdesk.log")
    } else {
        PathBuf::from("qdesk.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/qdesk/config.toml` on Linux.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("qdesk").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `QDESK_CONFIG` environment variable
/// 3. Default path `~/.config/qdesk/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        queue_file: config.queue_file.or(defaults.queue_file),
        department: config.department.or(defaults.department),
        show_stats: config.show_stats.unwrap_or(defaults.show_stats),
        transition_policy: config
            .transition_policy
            .unwrap_or(defaults.transition_policy),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `QDESK_QUEUE_FILE`: queue file path
/// - `QDESK_TRANSITION_POLICY`: `permissive` or `strict`
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnv` if the policy variable names no policy.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(path) = std::env::var(ENV_QUEUE_FILE) {
        if !path.is_empty() {
            config.queue_file = Some(PathBuf::from(path));
        }
    }

    if let Ok(policy) = std::env::var(ENV_TRANSITION_POLICY) {
        config.transition_policy = policy.parse().map_err(|e: crate::state::TransitionError| {
            ConfigError::InvalidEnv {
                var: ENV_TRANSITION_POLICY,
                reason: e.to_string(),
            }
        })?;
    }

    Ok(config)
}

/// Command-line values that take part in config resolution.
///
/// `None` (or `false` for flags) means the user did not set it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Positional queue file.
    pub queue_file: Option<PathBuf>,
    /// `--department`.
    pub department: Option<String>,
    /// `--stats`.
    pub show_stats: bool,
    /// `--strict`.
    pub strict: bool,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for values that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(path) = cli.queue_file {
        config.queue_file = Some(path);
    }

    if let Some(department) = cli.department {
        config.department = Some(department);
    }

    if cli.show_stats {
        config.show_stats = true;
    }

    if cli.strict {
        config.transition_policy = TransitionPolicy::Strict;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
