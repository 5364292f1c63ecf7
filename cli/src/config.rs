// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use tokio::fs;

use evently_core::{APP_NAME, Config};

const EVENTLY_CONFIG_ENV: &str = "EVENTLY_CONFIG";
const EVENTLY_TOKEN_ENV: &str = "EVENTLY_TOKEN";

/// Loads the configuration.
///
/// The file is taken from `path`, then `$EVENTLY_CONFIG`, then the user config
/// directory. A missing default file falls back to built-in defaults. The
/// `$EVENTLY_TOKEN` variable overrides the token from the file.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let explicit = path.or_else(|| std::env::var(EVENTLY_CONFIG_ENV).ok().map(PathBuf::from));
    let token = std::env::var(EVENTLY_TOKEN_ENV).ok();

    let mut config = match explicit {
        Some(path) => load_config(&path).await?,
        None => match default_config_path() {
            Some(path) if path.exists() => load_config(&path).await?,
            _ => {
                tracing::debug!("no config file found, using defaults");
                Config::default()
            }
        },
    };

    if token.is_some() {
        config.token = token;
    }
    Ok(config)
}

async fn load_config(path: &Path) -> Result<Config, Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?;

    toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e).into())
}

fn default_config_path() -> Option<PathBuf> {
    match get_config_dir() {
        Ok(dir) => Some(dir.join(format!("{APP_NAME}/config.toml"))),
        Err(e) => {
            tracing::warn!("{e}");
            None
        }
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
