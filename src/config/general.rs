//! The general configuration settings for rls.
//!
//! [General] is deserialized from the `[general]` table of rls.toml and converted into
//! [InternalGeneral], which is what the listing code reads.

use serde::Deserialize;

/// Suffixes colored as archives, matched literally against the end of a name.
pub const DEFAULT_ARCHIVE_SUFFIXES: [&str; 5] = [".tar", ".tgz", ".tar.gz", ".gz", ".zip"];

#[derive(Deserialize, Debug)]
#[serde(default)]
pub(crate) struct General {
    show_hidden: bool,
    archive_suffixes: Vec<String>,
}

impl Default for General {
    fn default() -> Self {
        General {
            show_hidden: false,
            archive_suffixes: default_archive_suffixes(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InternalGeneral {
    show_hidden: bool,
    archive_suffixes: Vec<String>,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        let archive_suffixes = g
            .archive_suffixes
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        Self {
            show_hidden: g.show_hidden,
            archive_suffixes,
        }
    }
}

impl InternalGeneral {
    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn archive_suffixes(&self) -> &[String] {
        &self.archive_suffixes
    }
}

pub fn default_archive_suffixes() -> Vec<String> {
    DEFAULT_ARCHIVE_SUFFIXES
        .iter()
        .map(|s| s.to_string())
        .collect()
}
