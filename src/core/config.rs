//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lgbrowse/config.toml` unless `--config` points
//! elsewhere. A missing file just means defaults; it is never created.

use log::{debug, info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct LgConfig {
    #[serde(default)]
    pub aws: AwsConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct AwsConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub name_prefix: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiConfig {
    pub case_sensitive: Option<bool>,
    pub list_height: Option<u16>,
    pub highlight_color: Option<u8>,
    pub error_color: Option<u8>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_REGION: &str = "eu-west-1";
pub const DEFAULT_HIGHLIGHT_COLOR: u8 = 170;
pub const DEFAULT_ERROR_COLOR: u8 = 9;
pub const DEFAULT_LOG_LEVEL: &str = "debug";

// ============================================================================
// CLI overrides
// ============================================================================

/// Values given on the command line. `None`/`false` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub name_prefix: Option<String>,
    pub case_sensitive: bool,
    pub plain: bool,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Resolved Config (concrete values, no Options where a default exists)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub region: String,
    pub profile: Option<String>,
    pub name_prefix: Option<String>,
    pub case_sensitive: bool,
    pub list_height: Option<u16>,
    pub highlight_color: u8,
    pub error_color: u8,
    pub plain: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error ({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse error ({path}): {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.lgbrowse/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lgbrowse").join("config.toml"))
}

/// Load the config file.
///
/// An explicit path must exist. The default path is optional: if it is
/// missing (or there is no home directory) the defaults are returned.
pub fn load_config(explicit: Option<&Path>) -> Result<LgConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) if p.exists() => p,
            Some(p) => {
                debug!("No config file at {}, using defaults", p.display());
                return Ok(LgConfig::default());
            }
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(LgConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let config = parse_config(&contents).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<LgConfig, toml::de::Error> {
    toml::from_str(contents)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config from the process environment.
pub fn resolve(config: &LgConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `env` looks up an environment variable; tests pass a closure over a map.
pub fn resolve_with_env(
    config: &LgConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Region: CLI → env → config → default
    let region = cli
        .region
        .clone()
        .or_else(|| env("AWS_REGION"))
        .or_else(|| env("AWS_DEFAULT_REGION"))
        .or_else(|| config.aws.region.clone())
        .unwrap_or_else(|| DEFAULT_REGION.to_string());

    // Profile: CLI → env → config; None leaves it to the SDK default chain
    let profile = cli
        .profile
        .clone()
        .or_else(|| env("AWS_PROFILE"))
        .or_else(|| config.aws.profile.clone());

    let name_prefix = cli
        .name_prefix
        .clone()
        .or_else(|| config.aws.name_prefix.clone())
        .filter(|p| !p.is_empty());

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("LGBROWSE_LOG").map(PathBuf::from))
        .or_else(|| config.general.log_file.clone());

    ResolvedConfig {
        region,
        profile,
        name_prefix,
        case_sensitive: cli.case_sensitive || config.ui.case_sensitive.unwrap_or(false),
        list_height: config.ui.list_height.filter(|h| *h > 0),
        highlight_color: config
            .ui
            .highlight_color
            .unwrap_or(DEFAULT_HIGHLIGHT_COLOR),
        error_color: config.ui.error_color.unwrap_or(DEFAULT_ERROR_COLOR),
        plain: cli.plain,
        log_file,
        log_level: config
            .general
            .log_level
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
    }
}
