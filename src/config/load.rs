//! The main config loading module for rls.
//!
//! Handles loading and deserializing settings from `rls.toml`.
//!
//! Provides the main [Config] struct, as well as the [RawConfig] used for parsing.
//! A missing file is not an error: rls runs on internal defaults.

use crate::config::{Display, General, InternalGeneral, Theme};
use crate::error::LsError;
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};

/// Raw configuration as read from the toml file.
/// It is converted into the main [Config] struct, which validates values on the way.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
    theme: Theme,
}

/// Main configuration struct for rls
#[derive(Debug, Clone)]
pub struct Config {
    general: InternalGeneral,
    display: Display,
    theme: Theme,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            display: raw.display.validated(),
            theme: raw.theme,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    /// Parse errors are reported once and the defaults are used instead.
    pub fn load() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("rls: {}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, LsError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, LsError> {
        toml::from_str::<RawConfig>(content)
            .map(Config::from)
            .map_err(|e| LsError::Config(e.to_string()))
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Determine the default configuration file path.
    /// Checks the RLS_CONFIG environment variable first,
    /// then XDG_CONFIG_HOME,
    /// then defaults to ~/.config/rls/rls.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("RLS_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("rls/rls.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/rls/rls.toml");
        }
        PathBuf::from("rls.toml")
    }

    /// Write the default configuration file at `path`.
    /// Refuses to overwrite an existing file.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from(RawConfig::default())
    }
}

const DEFAULT_TOML: &str = r##"# rls.toml - default configuration for rls
# Commented values are the internal defaults.

[general]
# show_hidden = false
# archive_suffixes = [".tar", ".tgz", ".tar.gz", ".gz", ".zip"]

[display]
# spacing = 2
# fallback_width = 80
# color = "auto"        # "auto", "always" or "never"
# human_sizes = false

[theme]
# Color names: black, red, green, yellow, blue, magenta, cyan, white,
# bright_<name>, bold, reverse, or "none" for no color.
# directory = "blue"
# symlink = "magenta"
# executable = "green"
# archive = "red"
# special = "reverse"
"##;
