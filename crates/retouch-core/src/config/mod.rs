//! Configuration file management.
//!
//! Loads the optional `retouch.yml` that supplies default corrections and
//! output settings. While searching, a missing or broken file is never
//! fatal: problems are collected as warnings and the built-in defaults apply.
//! [`load_config_from`] reads exactly one file and reports its failure.

mod defaults;


pub use defaults::{EnhanceDefaults, OutputSettings, DEFAULT_JPEG_QUALITY, DEFAULT_OUTPUT_SUFFIX};

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EnhanceError, Result};

/// Candidate config file names searched for on disk.
const CONFIG_FILENAMES: &[&str] = &["retouch.yml", "retouch.yaml"];

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "RETOUCH_CONFIG";

/// Per-user config directory under the home directory.
pub const USER_CONFIG_DIR: &str = "retouch";

/// Loaded configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct ConfigHandle {
    pub config: RetouchConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl ConfigHandle {
    fn with_config(config: RetouchConfig, source: Option<PathBuf>, warnings: Vec<String>) -> Self {
        Self {
            config,
            source,
            warnings,
        }
    }
}

/// Complete configuration file structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RetouchConfig {
    pub defaults: EnhanceDefaults,
    pub output: OutputSettings,
}

impl RetouchConfig {
    /// Parse a YAML document, sanitizing out-of-range values.
    pub fn from_yaml(contents: &str) -> Result<(Self, Vec<String>)> {
        let mut config: RetouchConfig =
            serde_yaml::from_str(contents).map_err(|e| EnhanceError::Config(e.to_string()))?;
        let warnings = config.output.sanitize();
        Ok((config, warnings))
    }

    /// Serialize to the YAML layout read by [`load_config`].
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| EnhanceError::Config(e.to_string()))
    }
}

/// Load configuration from disk, optionally forcing a specific path.
///
/// With an explicit path only that file is considered; a missing or broken
/// file yields the built-in defaults plus a warning. Otherwise candidates are
/// tried in order (see [`get_config_candidates`]) and the first file that
/// parses wins.
pub fn load_config(custom_path: Option<&Path>) -> ConfigHandle {
    if let Some(path) = custom_path {
        return load_config_from(path).unwrap_or_else(|err| {
            ConfigHandle::with_config(RetouchConfig::default(), None, vec![err.to_string()])
        });
    }

    let mut warnings = Vec::new();
    for candidate in get_config_candidates() {
        if !candidate.is_file() {
            continue;
        }

        match load_config_from(&candidate) {
            Ok(mut handle) => {
                warnings.append(&mut handle.warnings);
                handle.warnings = warnings;
                return handle;
            }
            Err(err) => warnings.push(err.to_string()),
        }
    }

    ConfigHandle::with_config(RetouchConfig::default(), None, warnings)
}

/// Load one specific config file, failing if it cannot be read or parsed.
pub fn load_config_from(path: &Path) -> Result<ConfigHandle> {
    let contents = fs::read_to_string(path).map_err(|e| {
        EnhanceError::Config(format!("Failed to read config {}: {}", path.display(), e))
    })?;
    let (config, warnings) = RetouchConfig::from_yaml(&contents).map_err(|e| {
        EnhanceError::Config(format!("Failed to parse config {}: {}", path.display(), e))
    })?;

    let source = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    Ok(ConfigHandle::with_config(config, Some(source), warnings))
}

/// Config file candidates in search order: environment variable,
/// `./config/`, the working directory, then `~/retouch/`.
pub fn get_config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if !env_path.is_empty() {
            candidates.push(PathBuf::from(env_path));
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
        }
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join(name));
        }
    }

    if let Some(dir) = user_config_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(dir.join(name));
        }
    }

    candidates
}

/// `~/retouch`, when a home directory can be determined.
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(USER_CONFIG_DIR))
}

/// Write the built-in defaults to `dir/retouch.yml`.
///
/// Returns the written path, or `None` when the file exists and `force` is
/// false.
pub fn write_default_config(dir: &Path, force: bool) -> Result<Option<PathBuf>> {
    let path = dir.join(CONFIG_FILENAMES[0]);
    if path.exists() && !force {
        return Ok(None);
    }

    fs::create_dir_all(dir)
        .map_err(|e| EnhanceError::Config(format!("create {}: {}", dir.display(), e)))?;
    let yaml = RetouchConfig::default().to_yaml()?;
    fs::write(&path, yaml)
        .map_err(|e| EnhanceError::Config(format!("write {}: {}", path.display(), e)))?;

    Ok(Some(path))
}

/// Report where the configuration came from and any problems found.
pub fn log_config_usage(handle: &ConfigHandle) {
    match &handle.source {
        Some(source) => log::info!("Loaded config from {}", source.display()),
        None => log::debug!("No config file found; using built-in defaults"),
    }

    for warning in &handle.warnings {
        log::warn!("Config warning: {}", warning);
    }
}
