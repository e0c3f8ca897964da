use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Per-run generation options, resolved once from CLI flags and the config
/// file before any URL is processed. Read-only for the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Drop query strings from all generated candidates.
    pub strip_query: bool,
    /// Skip endpoints lacking a file extension.
    pub extension_only: bool,
    /// Skip input URLs longer than this many characters (None = unbounded).
    pub max_length: Option<usize>,
    /// Repeat generation at every ancestor directory depth.
    pub all_dirs: bool,
}

/// Catalog additions (optional section in config.toml).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogExtras {
    /// Appended to the built-in archive extension list.
    #[serde(default)]
    pub extra_extensions: Vec<String>,
    /// Appended to the built-in prefix symbol list.
    #[serde(default)]
    pub extra_symbols: Vec<String>,
    /// Appended to the built-in wrap pattern list; each must contain `VAL`.
    #[serde(default)]
    pub extra_patterns: Vec<String>,
}

/// Global configuration loaded from `~/.config/undust/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UndustConfig {
    /// Default URL length cap applied when `--length` is not given.
    #[serde(default)]
    pub max_length: Option<usize>,
    /// Suppress the startup banner by default.
    #[serde(default)]
    pub quiet: bool,
    /// Optional catalog additions.
    #[serde(default)]
    pub catalog: CatalogExtras,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("undust")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UndustConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UndustConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UndustConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UndustConfig::default();
        assert_eq!(cfg.max_length, None);
        assert!(!cfg.quiet);
        assert!(cfg.catalog.extra_extensions.is_empty());
        assert!(cfg.catalog.extra_symbols.is_empty());
        assert!(cfg.catalog.extra_patterns.is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UndustConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UndustConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.max_length, cfg.max_length);
        assert_eq!(parsed.quiet, cfg.quiet);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            max_length = 600
            quiet = true
        "#;
        let cfg: UndustConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.max_length, Some(600));
        assert!(cfg.quiet);
        assert!(cfg.catalog.extra_extensions.is_empty());
    }

    #[test]
    fn config_toml_catalog_section() {
        let toml = r#"
            [catalog]
            extra_extensions = ["orig", "dist"]
            extra_patterns = ["VAL.bck"]
        "#;
        let cfg: UndustConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.catalog.extra_extensions, vec!["orig", "dist"]);
        assert!(cfg.catalog.extra_symbols.is_empty());
        assert_eq!(cfg.catalog.extra_patterns, vec!["VAL.bck"]);
    }

    #[test]
    fn empty_config_file_is_all_defaults() {
        let cfg: UndustConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.max_length, None);
        assert!(!cfg.quiet);
    }
}
