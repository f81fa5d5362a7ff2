use crate::domain::constants::{DEFAULT_SERVER, DEFAULT_TIMEOUT_MS};
use crate::domain::models::ConfigFile;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server: String,
    pub timeout_ms: u64,
}

pub fn config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/geoepi/config.toml"))
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(&path)?;
    toml::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))
}

/// Flags win over the file, the file wins over defaults.
pub fn resolve_settings(
    file: ConfigFile,
    server: Option<String>,
    timeout_ms: Option<u64>,
) -> Settings {
    Settings {
        server: server
            .or(file.server)
            .unwrap_or_else(|| DEFAULT_SERVER.to_string()),
        timeout_ms: timeout_ms.or(file.timeout_ms).unwrap_or(DEFAULT_TIMEOUT_MS),
    }
}
