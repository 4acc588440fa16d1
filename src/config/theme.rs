//! Theme configuration options for rls
//!
//! Maps each [ColorAttribute] to the escape sequence that starts it. Values are read from the
//! `[theme]` table of rls.toml; anything unset or unknown falls back to the built-in default.

use crate::core::color::ColorAttribute;
use crate::utils::parse_color;

use serde::{Deserialize, Deserializer};

const BLUE: &str = "\x1b[0;34m";
const GREEN: &str = "\x1b[0;32m";
const RED: &str = "\x1b[0;31m";
const MAGENTA: &str = "\x1b[0;35m";
const REVERSE: &str = "\x1b[7m";

/// A resolved SGR start sequence. Owned by the program, never borrowed from the config text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sgr(&'static str);

/// Theme configuration options
/// # Examples
/// ```toml
/// [theme]
/// directory = "bright_blue"
/// archive = "none"
/// ```
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Theme {
    #[serde(deserialize_with = "deserialize_color_field")]
    directory: Option<Sgr>,
    #[serde(deserialize_with = "deserialize_color_field")]
    symlink: Option<Sgr>,
    #[serde(deserialize_with = "deserialize_color_field")]
    executable: Option<Sgr>,
    #[serde(deserialize_with = "deserialize_color_field")]
    archive: Option<Sgr>,
    #[serde(deserialize_with = "deserialize_color_field")]
    special: Option<Sgr>,
}

impl Theme {
    /// Start sequence for an attribute. Empty means "print the name plain".
    pub fn sequence(&self, attr: ColorAttribute) -> &'static str {
        match attr {
            ColorAttribute::None => "",
            ColorAttribute::Directory => self.directory.map_or(BLUE, |s| s.0),
            ColorAttribute::Symlink => self.symlink.map_or(MAGENTA, |s| s.0),
            ColorAttribute::Executable => self.executable.map_or(GREEN, |s| s.0),
            ColorAttribute::Archive => self.archive.map_or(RED, |s| s.0),
            ColorAttribute::Special => self.special.map_or(REVERSE, |s| s.0),
        }
    }
}

/// Unknown color names warn and leave the slot on its default.
fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Option<Sgr>, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    let parsed = parse_color(&name);
    if parsed.is_none() {
        eprintln!("rls: config: unknown color '{}', using default", name);
    }
    Ok(parsed.map(Sgr))
}
