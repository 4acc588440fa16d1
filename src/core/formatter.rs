//! Sorting, filtering, and field formatting for rls.
//!
//! The [Formatter] struct holds the hidden-file policy and prepares the name list of one
//! directory for rendering: filter, then sort by raw bytes.
//!
//! Also formats the long-format fields: permission string, modification time and size.

use crate::core::fm::{EntryKind, SETGID, SETUID, STICKY};

use chrono::{DateTime, Local, TimeZone};
use humansize::{DECIMAL, format_size};

use std::ffi::OsString;

/// Roughly six months. Modification times further than this from "now" show the year.
pub const RECENCY_WINDOW_SECS: i64 = 15_552_000;

/// Formatter struct to handle filtering and sorting of entry names.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    show_hidden: bool,
}

impl Formatter {
    pub fn new(show_hidden: bool) -> Self {
        Self { show_hidden }
    }

    /// Drops hidden names (leading '.') unless the policy shows them, then sorts.
    pub fn filter_names(&self, names: &mut Vec<OsString>) {
        if !self.show_hidden {
            names.retain(|n| n.as_encoded_bytes().first() != Some(&b'.'));
        }
        sort_names(names);
    }
}

/// Sorts names ascending by raw byte value. Stable, so duplicates keep their order.
pub fn sort_names(names: &mut [OsString]) {
    names.sort_by(|a, b| a.as_encoded_bytes().cmp(b.as_encoded_bytes()));
}

/// Formats a permission string like `drwxr-sr-t`.
///
/// Setuid/setgid show as `s` over an execute bit and `S` without one; sticky shows as
/// `t`/`T` in the "other" execute slot.
pub fn format_permissions(kind: EntryKind, mode: u32) -> String {
    let bit = |mask: u32, c: char| if mode & mask != 0 { c } else { '-' };
    let exec = |x_mask: u32, special_mask: u32, lower: char, upper: char| {
        match (mode & x_mask != 0, mode & special_mask != 0) {
            (true, true) => lower,
            (false, true) => upper,
            (true, false) => 'x',
            (false, false) => '-',
        }
    };

    [
        kind.type_char(),
        bit(0o400, 'r'),
        bit(0o200, 'w'),
        exec(0o100, SETUID, 's', 'S'),
        bit(0o040, 'r'),
        bit(0o020, 'w'),
        exec(0o010, SETGID, 's', 'S'),
        bit(0o004, 'r'),
        bit(0o002, 'w'),
        exec(0o001, STICKY, 't', 'T'),
    ]
    .iter()
    .collect()
}

/// Formats a modification time relative to `now` (both unix seconds).
///
/// Within the recency window: `Mon DD HH:MM`; otherwise `Mon DD  YYYY`.
/// The day is space padded, as `ls` does.
pub fn format_file_time(mtime: i64, now: i64) -> String {
    let Some(dt) = Local.timestamp_opt(mtime, 0).single() else {
        return "?".to_string();
    };
    format_local_time(&dt, now.abs_diff(mtime) <= RECENCY_WINDOW_SECS as u64)
}

fn format_local_time(dt: &DateTime<Local>, recent: bool) -> String {
    if recent {
        dt.format("%b %e %H:%M").to_string()
    } else {
        dt.format("%b %e  %Y").to_string()
    }
}

/// Formats a size in bytes, or in decimal units when `human` is set.
pub fn format_file_size(size: u64, human: bool) -> String {
    if human {
        format_size(size, DECIMAL)
    } else {
        size.to_string()
    }
}
