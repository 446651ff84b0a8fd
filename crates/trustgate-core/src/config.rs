use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::download::Profile;

/// Global configuration loaded from `~/.config/trustgate/config.toml`.
///
/// Nothing here can widen the trust policy: trusted origins and builtin
/// extensions are compiled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustgateConfig {
    /// Profile Safe Browsing preference used when a download is not trusted.
    #[serde(default = "default_safe_browsing_enabled")]
    pub safe_browsing_enabled: bool,
    /// Extension IDs to force-load. Only builtin IDs survive the allowlist.
    #[serde(default)]
    pub force_load_extensions: Vec<String>,
}

fn default_safe_browsing_enabled() -> bool {
    true
}

impl Default for TrustgateConfig {
    fn default() -> Self {
        Self {
            safe_browsing_enabled: default_safe_browsing_enabled(),
            force_load_extensions: Vec::new(),
        }
    }
}

impl TrustgateConfig {
    pub fn profile(&self) -> Profile {
        Profile {
            safe_browsing_enabled: self.safe_browsing_enabled,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("trustgate")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<TrustgateConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: TrustgateConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from `path`, writing the defaults there first if it does not exist.
pub fn load_or_init_at(path: &Path) -> Result<TrustgateConfig> {
    if !path.exists() {
        let default_cfg = TrustgateConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(path)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TrustgateConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Load configuration from `path` if it exists, otherwise return the defaults
/// without touching the filesystem.
pub fn load_or_default_at(path: &Path) -> Result<TrustgateConfig> {
    if path.exists() {
        load_from(path)
    } else {
        Ok(TrustgateConfig::default())
    }
}

/// Read-only counterpart of [`load_or_init`] for query commands.
pub fn load_or_default() -> Result<TrustgateConfig> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("trustgate")?;
    match xdg_dirs.find_config_file("config.toml") {
        Some(path) => load_from(&path),
        None => Ok(TrustgateConfig::default()),
    }
}
