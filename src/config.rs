//! User configuration.
//!
//! Loaded from `<config dir>/vibe-engineering/config.json` unless a path is
//! given explicitly. A missing default file means defaults; a missing explicit
//! file is an error.
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_SCHEMA_VERSION: u32 = 1;
const APP_DIR: &str = "vibe-engineering";
const CONFIG_FILE: &str = "config.json";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub schema_version: u32,
    /// Clipboard command line tried before the built-in tools, e.g. `"xclip -sel c"`.
    #[serde(default)]
    pub clipboard_command: Option<String>,
    /// Prefix for `@handle` attribution links.
    #[serde(default = "default_profile_base_url")]
    pub profile_base_url: String,
    #[serde(default)]
    pub serve: ServeConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServeConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: CONFIG_SCHEMA_VERSION,
            clipboard_command: None,
            profile_base_url: default_profile_base_url(),
            serve: ServeConfig::default(),
        }
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            assets_dir: default_assets_dir(),
        }
    }
}

fn default_profile_base_url() -> String {
    "https://x.com/".to_string()
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("dist")
}

impl Config {
    /// Clipboard command split into argv, if configured.
    pub fn clipboard_argv(&self) -> Result<Option<Vec<String>>> {
        let Some(command) = self.clipboard_command.as_deref() else {
            return Ok(None);
        };
        if command.trim().is_empty() {
            return Ok(None);
        }
        let parts = shell_words::split(command)
            .with_context(|| format!("parse clipboard_command {command:?}"))?;
        Ok(Some(parts))
    }
}

/// Default config location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load config from `explicit`, or from the default location when present.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    match default_config_path() {
        Some(path) if path.is_file() => read_config(&path),
        _ => {
            tracing::debug!("no config file; using defaults");
            Ok(Config::default())
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: Config = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config JSON {}", path.display()))?;
    validate_config(&config)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn validate_config(config: &Config) -> Result<()> {
    if config.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported config schema_version {}",
            config.schema_version
        ));
    }
    if config.serve.bind.trim().is_empty() {
        return Err(anyhow!("serve.bind must not be empty"));
    }
    config.clipboard_argv()?;
    Ok(())
}

/// Pretty JSON for the default config.
pub fn config_stub() -> Result<String> {
    serde_json::to_string_pretty(&Config::default()).context("serialize config stub")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
