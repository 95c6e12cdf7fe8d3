//! Configuration discovery and typed `naming` settings.
//!
//! Config lives in `.brickopscfg/config.yml`, located by walking up from a
//! reference directory. Absence of the directory at every ancestor is a
//! valid "no configuration" state, in which only the fixed mesh convention
//! applies.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".brickopscfg";
pub const CONFIG_FILE: &str = "config.yml";

/// Root of the parsed config document.
///
/// Only the `naming` section is typed; other top-level keys are tolerated
/// since the file may be shared with other tooling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub naming: NamingConfig,
}

/// The `naming` section: an optional custom path schema plus per-resource
/// name format overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Regex with named capture groups for the configurable path parser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_regexp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<NameFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db: Option<NameFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<NameFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<NameFormat>,
}

/// Name format templates for one resource, keyed by environment class.
///
/// Templates use `{placeholder}` substitution, e.g.
/// `"{env}_{username}_{gitbranch}_{gitshortref}_{db}"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prod: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
}

impl Config {
    /// Parse a config document from YAML text.
    pub fn from_yaml(path: &Path, content: &str) -> CoreResult<Self> {
        serde_yaml::from_str(content).map_err(|e| CoreError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load a config file from disk. Malformed YAML is a hard error.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_yaml(path, &content)
    }

    /// Walk up from `start_dir` looking for a `.brickopscfg` directory and
    /// return the path of its `config.yml`.
    ///
    /// A `.git` folder cannot be used to find the repo root since it is not
    /// present in notebook workspaces, so the config directory itself is the
    /// marker.
    pub fn find(start_dir: &Path) -> Option<PathBuf> {
        let mut dir = if start_dir.is_absolute() {
            start_dir.to_path_buf()
        } else {
            std::env::current_dir().ok()?.join(start_dir)
        };
        loop {
            let config_dir = dir.join(CONFIG_DIR);
            if config_dir.is_dir() {
                return Some(config_dir.join(CONFIG_FILE));
            }
            if !dir.pop() {
                return None;
            }
        }
    }
}

/// Discovers and holds the process configuration.
///
/// The config file is read once, eagerly, at construction; the provider is
/// immutable afterwards and safe to share across threads. Tests get
/// isolation by constructing a fresh provider per fixture instead of
/// resetting ambient global state.
#[derive(Debug, Clone, Default)]
pub struct FsConfigProvider {
    config: Option<Config>,
    path: Option<PathBuf>,
}

impl FsConfigProvider {
    /// Discover configuration starting from `start_dir`.
    ///
    /// No `.brickopscfg` anywhere up the tree yields a provider that answers
    /// `None`; a found-but-malformed config file is a hard error.
    pub fn discover(start_dir: &Path) -> CoreResult<Self> {
        let Some(path) = Config::find(start_dir) else {
            log::debug!(
                "no {CONFIG_DIR} directory found above {}",
                start_dir.display()
            );
            return Ok(Self::default());
        };
        if !path.exists() {
            log::info!("config file not found at {}", path.display());
            return Ok(Self::default());
        }
        let config = Config::load(&path)?;
        Ok(Self {
            config: Some(config),
            path: Some(path),
        })
    }

    /// Provider with a fixed in-memory config (tests, embedding).
    pub fn fixed(config: Config) -> Self {
        Self {
            config: Some(config),
            path: None,
        }
    }

    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    /// Path of the discovered config file, when one was found on disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
