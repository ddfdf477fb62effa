use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use roster_core::lookup::{DEFAULT_LOOKUP_ENDPOINT, DEFAULT_LOOKUP_TIMEOUT};

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct RosterConfig {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub lookup: LookupSection,
}

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct StoreSection {
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LookupSection {
    #[serde(default = "default_lookup_enabled")]
    pub enabled: bool,
    #[serde(default = "default_lookup_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_lookup_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for LookupSection {
    fn default() -> Self {
        Self {
            enabled: default_lookup_enabled(),
            endpoint: default_lookup_endpoint(),
            timeout_ms: default_lookup_timeout_ms(),
        }
    }
}

fn default_lookup_enabled() -> bool {
    true
}

fn default_lookup_endpoint() -> String {
    DEFAULT_LOOKUP_ENDPOINT.to_string()
}

fn default_lookup_timeout_ms() -> u64 {
    DEFAULT_LOOKUP_TIMEOUT.as_millis() as u64
}

impl RosterConfig {
    pub fn new(store_path: PathBuf, endpoint: Option<String>) -> Self {
        Self {
            store: StoreSection {
                path: Some(store_path.to_string_lossy().to_string()),
            },
            lookup: LookupSection {
                endpoint: endpoint.unwrap_or_else(default_lookup_endpoint),
                ..LookupSection::default()
            },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_store_dir() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

pub fn read_config(path: &Path) -> anyhow::Result<RosterConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &RosterConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("roster"));
        }
    }
    Ok(home_dir()?.join(".config").join("roster"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("roster"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("roster"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
