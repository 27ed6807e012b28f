//! Config storage for the default collection endpoint.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use reel_core::CollectionUrl;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConfig {
    /// Default collection endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_endpoint: Option<CollectionUrl>,

    /// Default request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

/// Get the config file path.
pub fn config_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "reel").context("Could not determine config directory")?;

    let config_dir = dirs.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config directory")?;

    Ok(config_dir.join("config.json"))
}

/// Save the config to disk.
pub fn save_config(config: &StoredConfig) -> Result<()> {
    let path = config_path()?;
    let json = serde_json::to_string_pretty(config)?;

    fs::write(&path, &json).context("Failed to write config file")?;

    // Set restrictive permissions (Unix only); the endpoint may carry an auth key.
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(())
}

/// Load the config from disk, or the defaults if none is stored.
pub fn load_config() -> Result<StoredConfig> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(StoredConfig::default());
    }

    let json = fs::read_to_string(&path).context("Failed to read config file")?;
    let config: StoredConfig = serde_json::from_str(&json)
        .with_context(|| format!("Invalid config file {}", path.display()))?;

    Ok(config)
}

/// Remove the stored config. Returns false if there was none.
pub fn clear_config() -> Result<bool> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(&path).context("Failed to remove config file")?;
    Ok(true)
}
