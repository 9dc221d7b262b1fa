use crate::api::CARBONITO_API_URL;
use crate::errors::{CarbonitoError, CarbonitoResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_url: String,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: CARBONITO_API_URL.to_string(),
            log_level: "info".to_string(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("carbonito")
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Loads `~/.config/carbonito/config.json` if present, otherwise writes the
/// defaults there for the next run. `CARBONITO_API_URL` in the environment
/// wins over both.
pub fn initialize_config() -> CarbonitoResult<()> {
    let config_path = get_config_path()?;

    let mut config = if config_path.exists() {
        let config_str = fs::read_to_string(&config_path).map_err(|e| {
            CarbonitoError::config_error(format!("Failed to read config file: {}", e))
        })?;

        serde_json::from_str(&config_str).map_err(|e| {
            CarbonitoError::config_error(format!("Failed to parse config: {}", e))
        })?
    } else {
        let config = Config::default();

        fs::create_dir_all(config_path.parent().unwrap_or(&config_path)).map_err(|e| {
            CarbonitoError::config_error(format!("Failed to create config directory: {}", e))
        })?;

        let config_str = serde_json::to_string_pretty(&config).map_err(|e| {
            CarbonitoError::config_error(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(&config_path, config_str).map_err(|e| {
            CarbonitoError::config_error(format!("Failed to write config file: {}", e))
        })?;

        config
    };

    if let Ok(url) = env::var("CARBONITO_API_URL") {
        config.api_url = url;
    }

    validate_config(&config)?;

    *CONFIG
        .write()
        .map_err(|_| CarbonitoError::config_error("Config lock poisoned"))? = config;

    Ok(())
}

fn get_config_path() -> CarbonitoResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| CarbonitoError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("carbonito").join("config.json"))
}

fn validate_config(config: &Config) -> CarbonitoResult<()> {
    if config.api_url.is_empty() {
        return Err(CarbonitoError::config_error("api_url is required"));
    }

    if !config.api_url.starts_with("http://") && !config.api_url.starts_with("https://") {
        return Err(CarbonitoError::config_error(
            "api_url must be an http(s) URL",
        ));
    }

    if config.log_level.is_empty() {
        return Err(CarbonitoError::config_error("log_level is required"));
    }

    if config.log_dir.as_os_str().is_empty() {
        return Err(CarbonitoError::config_error("log_dir is required"));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG
        .read()
        .map(|c| c.clone())
        .unwrap_or_else(|_| Config::default())
}
