//! Configuration file lookup
//!
//! The first match wins:
//! 1. `SEGMENTA_CONFIG` (used even if the file is missing, so a typo fails loudly)
//! 2. `$XDG_CONFIG_HOME/segmenta/config.toml`, or `~/.config/segmenta/config.toml`
//! 3. `./segmenta.toml`

use std::env;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "segmenta";
const CONFIG_FILE: &str = "config.toml";
const LOCAL_CONFIG_FILE: &str = "segmenta.toml";

/// Where a configuration file was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named by `SEGMENTA_CONFIG`
    Env(PathBuf),
    /// Under the XDG config directory
    Xdg(PathBuf),
    /// `segmenta.toml` in the working directory
    Local(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Env(path) | ConfigSource::Xdg(path) | ConfigSource::Local(path) => path,
        }
    }
}

/// XDG config directory for segmenta
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    pub fn new() -> Self {
        let base = env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from(".config"));

        Self {
            config_dir: base.join(APP_DIR),
        }
    }

    /// `config.toml` inside the config directory, whether or not it exists
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    /// Find the configuration file to load, if any
    pub fn locate_config(&self) -> Option<ConfigSource> {
        if let Some(path) = env::var_os("SEGMENTA_CONFIG").filter(|p| !p.is_empty()) {
            return Some(ConfigSource::Env(PathBuf::from(path)));
        }

        let xdg_file = self.config_file();
        if xdg_file.is_file() {
            return Some(ConfigSource::Xdg(xdg_file));
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        local.is_file().then_some(ConfigSource::Local(local))
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
