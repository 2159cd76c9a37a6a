use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_model::{UrlBuilder, DEFAULT_COOKIE_NAME};

const DEFAULT_WATERBUTLER_URL: &str = "http://localhost:7777/";

/// Global configuration loaded from `~/.config/wburl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WbConfig {
    /// Base address of the WaterButler service; `file?`/`data?` are appended to it.
    pub waterbutler_url: String,
    /// Cookie carrying the OSF session (default "osf").
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

fn default_cookie_name() -> String {
    DEFAULT_COOKIE_NAME.to_string()
}

impl Default for WbConfig {
    fn default() -> Self {
        Self {
            waterbutler_url: DEFAULT_WATERBUTLER_URL.to_string(),
            cookie_name: default_cookie_name(),
        }
    }
}

impl WbConfig {
    /// URL builder for the configured base address and cookie name.
    pub fn builder(&self) -> Result<UrlBuilder> {
        let builder = UrlBuilder::new(&self.waterbutler_url)?;
        Ok(builder.with_cookie_name(self.cookie_name.clone()))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wburl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WbConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WbConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<WbConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: WbConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = WbConfig::default();
        assert_eq!(cfg.waterbutler_url, "http://localhost:7777/");
        assert_eq!(cfg.cookie_name, "osf");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = WbConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: WbConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_cookie_name_optional() {
        let toml = r#"
            waterbutler_url = "https://files.osf.io/"
        "#;
        let cfg: WbConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.waterbutler_url, "https://files.osf.io/");
        assert_eq!(cfg.cookie_name, "osf");
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(
            b"waterbutler_url = \"https://wb.example.com\"\ncookie_name = \"session\"\n",
        )
        .unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.cookie_name, "session");
        let builder = cfg.builder().unwrap();
        assert_eq!(builder.base(), "https://wb.example.com/");
        assert_eq!(builder.cookie_name(), "session");
    }

    #[test]
    fn load_from_bad_toml_names_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"waterbutler_url = ").unwrap();
        f.flush().unwrap();
        let err = load_from(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
    }

    #[test]
    fn builder_rejects_bad_base() {
        let cfg = WbConfig {
            waterbutler_url: "localhost:7777".to_string(),
            ..WbConfig::default()
        };
        assert!(cfg.builder().is_err());
    }
}
