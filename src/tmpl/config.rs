use crate::error::{Result, TmplError};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILENAME: &str = "index";
const TEMPLATES_DIRNAME: &str = "templates";

pub const CONFIG_DIR_ENV: &str = "TMPL_CONFIG_DIR";
pub const TEMPLATES_DIR_ENV: &str = "TMPL_TEMPLATES_DIR";
pub const DEFAULT_FILENAME_ENV: &str = "TMPL_DEFAULT_FILENAME";

/// Configuration for tmpl, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TmplConfig {
    /// Root directory scanned for templates
    #[serde(default)]
    pub templates_dir: PathBuf,

    /// Base name elided from template names (`web/index.html` is addressed as `web`)
    #[serde(default = "default_filename")]
    pub default_filename: String,
}

fn default_filename() -> String {
    DEFAULT_FILENAME.to_string()
}

impl TmplConfig {
    /// Defaults rooted at the given config directory.
    pub fn defaults_for<P: AsRef<Path>>(config_dir: P) -> Self {
        Self {
            templates_dir: config_dir.as_ref().join(TEMPLATES_DIRNAME),
            default_filename: default_filename(),
        }
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();
        let config_path = config_dir.join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::defaults_for(config_dir));
        }

        let content = fs::read_to_string(&config_path).map_err(TmplError::Io)?;
        let mut config: TmplConfig =
            serde_json::from_str(&content).map_err(TmplError::Serialization)?;
        if config.templates_dir.as_os_str().is_empty() {
            config.templates_dir = config_dir.join(TEMPLATES_DIRNAME);
        } else if config.templates_dir.is_relative() {
            config.templates_dir = config_dir.join(&config.templates_dir);
        }
        Ok(config)
    }

    /// Apply `TMPL_TEMPLATES_DIR` / `TMPL_DEFAULT_FILENAME` style overrides.
    ///
    /// `lookup` is usually `|key| std::env::var(key).ok()`; empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(TEMPLATES_DIR_ENV).filter(|v| !v.is_empty()) {
            self.templates_dir = PathBuf::from(dir);
        }
        if let Some(name) = lookup(DEFAULT_FILENAME_ENV).filter(|v| !v.is_empty()) {
            self.default_filename = name;
        }
        self
    }

    /// Templates root as the string prefix used by name derivation.
    pub fn templates_root(&self) -> String {
        self.templates_dir.to_string_lossy().into_owned()
    }
}

/// Resolves the config directory: `$TMPL_CONFIG_DIR`, else the platform config dir.
pub fn config_dir<F>(lookup: F) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "tmpl", "tmpl")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TmplError::Config("Could not determine config dir".to_string()))
}
