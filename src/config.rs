use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_ROOT_DIR: &str = ".";
const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 30;

/// Runtime settings for the server.
///
/// `root_dir` is the directory request paths are resolved against, and
/// `idle_timeout_secs` bounds how long a connection may sit silent while
/// its request is being read.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
}

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

fn default_root_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT_DIR)
}

fn default_idle_timeout_secs() -> u64 {
    DEFAULT_IDLE_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            root_dir: default_root_dir(),
            idle_timeout_secs: default_idle_timeout_secs(),
        }
    }
}

impl Config {
    /// Loads settings from `LISTEN`, `ROOT_DIR` and `IDLE_TIMEOUT_SECS`.
    pub fn load() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] but over an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN").unwrap_or_else(default_listen_addr);
        let root_dir = lookup("ROOT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_root_dir);
        let idle_timeout_secs = lookup("IDLE_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_IDLE_TIMEOUT_SECS);

        Self {
            listen_addr,
            root_dir,
            idle_timeout_secs,
        }
    }

    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("Invalid YAML configuration")
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&contents)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}
