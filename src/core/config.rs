//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.cvterm/config.toml` and is optional. Notification
//! credentials are usually supplied through the environment (or a `.env`
//! file loaded at startup) as `botToken` and `chatID`.

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CvConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub cv_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CV_PATH: &str = "cv.json";
pub const DEFAULT_TELEGRAM_BASE_URL: &str = "https://api.telegram.org";

pub const ENV_CV_PATH: &str = "CV_PATH";
pub const ENV_BOT_TOKEN: &str = "botToken";
pub const ENV_CHAT_ID: &str = "chatID";
pub const ENV_TELEGRAM_BASE_URL: &str = "TELEGRAM_BASE_URL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub cv_path: PathBuf,
    /// Empty when unset; the request is still attempted.
    pub bot_token: String,
    /// Empty when unset; the request is still attempted.
    pub chat_id: String,
    pub telegram_base_url: String,
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

/// Returns the path to `~/.cvterm/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cvterm").join("config.toml"))
}

/// Load config from `~/.cvterm/config.toml`.
///
/// A missing file (or home directory) is not an error and yields the default.
pub fn load_config() -> Result<CvConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CvConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<CvConfig, ConfigError> {
    if !path.exists() {
        debug!("No config file at {}", path.display());
        return Ok(CvConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CvConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_cv_path` is from the `--cv` flag (None = not specified).
pub fn resolve(config: &CvConfig, cli_cv_path: Option<&Path>) -> ResolvedConfig {
    resolve_with_env(config, cli_cv_path, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an explicit environment lookup.
pub fn resolve_with_env<F>(config: &CvConfig, cli_cv_path: Option<&Path>, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // CV path: CLI → env → config → default
    let cv_path = cli_cv_path
        .map(Path::to_path_buf)
        .or_else(|| env(ENV_CV_PATH).map(PathBuf::from))
        .or_else(|| config.general.cv_path.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CV_PATH));

    // Credentials: env → config → empty
    let bot_token = env(ENV_BOT_TOKEN)
        .or_else(|| config.telegram.bot_token.clone())
        .unwrap_or_default();
    let chat_id = env(ENV_CHAT_ID)
        .or_else(|| config.telegram.chat_id.clone())
        .unwrap_or_default();

    // Base URL: env → config → default
    let telegram_base_url = env(ENV_TELEGRAM_BASE_URL)
        .or_else(|| config.telegram.base_url.clone())
        .unwrap_or_else(|| DEFAULT_TELEGRAM_BASE_URL.to_string());

    if bot_token.is_empty() || chat_id.is_empty() {
        debug!("Notification credentials incomplete; contact requests will lack them");
    }

    ResolvedConfig {
        cv_path,
        bot_token,
        chat_id,
        telegram_base_url,
    }
}
