//! File-type color classification.
//!
//! [classify] picks a [ColorAttribute] for an entry; [paint] wraps a name in the matching
//! escape sequence. Whether color is used at all is decided once per process and passed in.

use crate::config::Theme;
use crate::core::fm::{EntryKind, FileInfo};

/// SGR reset sequence. Always emitted directly after a painted name.
pub const RESET: &str = "\x1b[0m";

/// Display attribute of one entry. Recomputed on every render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorAttribute {
    None,
    Directory,
    Symlink,
    Executable,
    Archive,
    Special,
}

/// Picks the attribute for an entry. First match wins:
/// symlink, special device, directory, any execute bit, archive suffix.
pub fn classify(name: &[u8], info: &FileInfo, archive_suffixes: &[String]) -> ColorAttribute {
    match info.kind {
        EntryKind::Symlink => ColorAttribute::Symlink,
        k if k.is_special() => ColorAttribute::Special,
        EntryKind::Directory => ColorAttribute::Directory,
        _ if info.is_executable() => ColorAttribute::Executable,
        _ if is_archive_name(name, archive_suffixes) => ColorAttribute::Archive,
        _ => ColorAttribute::None,
    }
}

/// Literal suffix match on the raw name bytes.
pub fn is_archive_name(name: &[u8], suffixes: &[String]) -> bool {
    suffixes.iter().any(|s| name.ends_with(s.as_bytes()))
}

/// Wraps the raw `name` bytes in the theme's start sequence and a reset.
/// Returns the name unchanged when color is off or the attribute has no sequence.
pub fn paint(name: &[u8], attr: ColorAttribute, theme: &Theme, enabled: bool) -> Vec<u8> {
    let start = theme.sequence(attr);
    if !enabled || start.is_empty() {
        return name.to_vec();
    }
    let mut out = Vec::with_capacity(start.len() + name.len() + RESET.len());
    out.extend_from_slice(start.as_bytes());
    out.extend_from_slice(name);
    out.extend_from_slice(RESET.as_bytes());
    out
}
