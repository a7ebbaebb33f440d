use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/bld/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BldConfig {
    /// Connect timeout for each archive download, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Overall per-request timeout, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Optional User-Agent header; libcurl's default when unset.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for BldConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: None,
        }
    }
}

fn default_connect_timeout_secs() -> u64 {
    15
}

fn default_request_timeout_secs() -> u64 {
    300
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bld")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
/// Config problems are not fatal to a run; callers fall back to defaults.
pub fn load_or_init() -> Result<BldConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BldConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        // place_config_file already created the leading directories.
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: BldConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = BldConfig::default();
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.request_timeout_secs, 300);
        assert!(cfg.user_agent.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = BldConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: BldConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
        assert_eq!(parsed.request_timeout_secs, cfg.request_timeout_secs);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            connect_timeout_secs = 5
            request_timeout_secs = 60
            user_agent = "bld-test/0.1"
        "#;
        let cfg: BldConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.connect_timeout_secs, 5);
        assert_eq!(cfg.request_timeout_secs, 60);
        assert_eq!(cfg.user_agent.as_deref(), Some("bld-test/0.1"));
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: BldConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.request_timeout_secs, 300);
    }
}
