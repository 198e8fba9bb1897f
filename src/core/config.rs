//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.userlist/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserListConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub interactive: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_LOG_FILE: &str = "userlist.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub interactive: bool,
}

/// Settings given on the command line. `None`/`false` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub log_file: Option<String>,
    pub interactive: bool,
    pub verbose: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.userlist/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".userlist").join("config.toml"))
}

/// Load config from `~/.userlist/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `UserListConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<UserListConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(UserListConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as [`load_config`] for an explicit path.
pub fn load_config_from(path: &Path) -> Result<UserListConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(UserListConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: UserListConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# userlist Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# The log file is chosen before this file is read: --log-file or USERLIST_LOG_FILE.

# [general]
# log_level = "info"                 # "error", "warn", "info", "debug", "trace", "off"
# interactive = false                # Prompt for exclusion ids after each fetch

# [api]
# base_url = "https://jsonplaceholder.typicode.com"   # Or set USERLIST_BASE_URL
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Log file path: CLI → env → default.
///
/// Independent of the config file so the logger is up before it is read.
pub fn resolve_log_file(cli: &CliOverrides) -> PathBuf {
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| std::env::var("USERLIST_LOG_FILE").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
    PathBuf::from(log_file)
}

/// Level to log at while the config is still being loaded.
pub fn bootstrap_log_level(cli: &CliOverrides) -> LevelFilter {
    if cli.verbose {
        LevelFilter::Debug
    } else {
        DEFAULT_LOG_LEVEL
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &UserListConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("USERLIST_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Log level: --verbose → env → config → default
    let log_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        std::env::var("USERLIST_LOG_LEVEL")
            .ok()
            .or_else(|| config.general.log_level.clone())
            .map(|s| parse_level(&s))
            .unwrap_or(DEFAULT_LOG_LEVEL)
    };

    ResolvedConfig {
        base_url,
        log_file: resolve_log_file(cli),
        log_level,
        interactive: cli.interactive || config.general.interactive.unwrap_or(false),
    }
}

/// Parses a level name, falling back to the default on anything unknown.
fn parse_level(s: &str) -> LevelFilter {
    match s.parse::<LevelFilter>() {
        Ok(level) => level,
        Err(_) => {
            warn!("Unknown log level {:?}, using {}", s, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }
    }
}
