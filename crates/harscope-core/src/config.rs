use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/harscope/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarscopeConfig {
    /// Page size for `harscope entries` when `--limit` is not given.
    pub default_page_limit: usize,
    /// Captures tried in order when no `--har` path is given.
    #[serde(default)]
    pub sample_paths: Vec<PathBuf>,
    /// Pretty-print JSON output (`--json`).
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

fn default_pretty_json() -> bool {
    true
}

impl Default for HarscopeConfig {
    fn default() -> Self {
        Self {
            default_page_limit: 200,
            sample_paths: Vec::new(),
            pretty_json: true,
        }
    }
}

impl HarscopeConfig {
    /// First configured sample capture that exists on disk.
    pub fn first_existing_sample(&self) -> Option<&Path> {
        self.sample_paths
            .iter()
            .map(PathBuf::as_path)
            .find(|p| p.exists())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harscope")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HarscopeConfig> {
    load_or_init_at(&config_path()?)
}

/// [`load_or_init`] against an explicit file.
pub fn load_or_init_at(path: &Path) -> Result<HarscopeConfig> {
    if !path.exists() {
        let default_cfg = HarscopeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: HarscopeConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
