//! Configuration loaded from `.syazai.yaml`.

use std::borrow::Cow;
use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::entity::{Method, Recipient};
use crate::error::{Result, SyazaiError};
use crate::search::SearchOptions;

pub const CONFIG_FILE_NAME: &str = ".syazai.yaml";
pub const CONFIG_ENV_VAR: &str = "SYAZAI_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyazaiConfig {
    /// Alternate catalog file. Relative paths resolve against the config file's directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    pub defaults: Defaults,
    pub search: SearchConfig,
}

/// Selection used when the caller does not pick one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub recipient: Recipient,
    pub method: Method,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub case_insensitive: bool,
}

impl From<SearchConfig> for SearchOptions {
    fn from(config: SearchConfig) -> Self {
        SearchOptions {
            case_insensitive: config.case_insensitive,
        }
    }
}

/// Walk up from `start` looking for a config file.
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

impl SyazaiConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        // Empty or comment-only documents carry no map
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: serde_yaml::Value = serde_yaml::from_str(s)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_value(value)?)
    }

    /// Read a config file, resolving a relative `catalog` path against its directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SyazaiError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let mut config = Self::from_yaml_str(&raw)?;

        if let (Some(catalog), Some(dir)) = (config.catalog.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(catalog.as_path());
            }
        }

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolve configuration: explicit path, then `SYAZAI_CONFIG`, then the
    /// nearest `.syazai.yaml` at or above the current directory. No file
    /// means defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Some(path) = env::var_os(CONFIG_ENV_VAR) {
            return Self::from_file(Path::new(&path));
        }
        let cwd = env::current_dir()?;
        match find_config_file(&cwd) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// The catalog this configuration points at. The built-in catalog is
    /// borrowed, never copied.
    pub fn open_catalog(&self) -> Result<Cow<'static, Catalog>> {
        match &self.catalog {
            Some(path) => Ok(Cow::Owned(Catalog::load(path)?)),
            None => Ok(Cow::Borrowed(Catalog::builtin()?)),
        }
    }
}
