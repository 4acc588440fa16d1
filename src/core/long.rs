//! Long-format rendering (`-l`).
//!
//! Rows are built for the whole entry set first, then [LongWidths] is measured once,
//! then every row is written against those widths.

use crate::core::color::{classify, paint};
use crate::core::fm::FileEntry;
use crate::core::formatter::{format_file_size, format_file_time, format_permissions};
use crate::core::listing::RenderContext;
use crate::core::width::{LongWidths, text_width};

use std::collections::HashMap;
use std::io::{self, Write};

/// Width of a formatted modification time (`Mon DD HH:MM` / `Mon DD  YYYY`).
const TIME_WIDTH: usize = 12;
const PLACEHOLDER: &str = "?";

/// Owner and group name lookup by numeric id.
pub trait NameLookup {
    fn user_name(&mut self, uid: u32) -> Option<String>;
    fn group_name(&mut self, gid: u32) -> Option<String>;
}

/// System account database lookup, memoized for the life of the process.
#[derive(Debug, Default)]
pub struct SystemNames {
    users: HashMap<u32, Option<String>>,
    groups: HashMap<u32, Option<String>>,
}

impl NameLookup for SystemNames {
    fn user_name(&mut self, uid: u32) -> Option<String> {
        self.users
            .entry(uid)
            .or_insert_with(|| lookup_user(uid))
            .clone()
    }

    fn group_name(&mut self, gid: u32) -> Option<String> {
        self.groups
            .entry(gid)
            .or_insert_with(|| lookup_group(gid))
            .clone()
    }
}

#[cfg(unix)]
fn lookup_user(uid: u32) -> Option<String> {
    uzers::get_user_by_uid(uid).map(|u| u.name().to_string_lossy().into_owned())
}

#[cfg(unix)]
fn lookup_group(gid: u32) -> Option<String> {
    uzers::get_group_by_gid(gid).map(|g| g.name().to_string_lossy().into_owned())
}

#[cfg(not(unix))]
fn lookup_user(_uid: u32) -> Option<String> {
    None
}

#[cfg(not(unix))]
fn lookup_group(_gid: u32) -> Option<String> {
    None
}

/// The text of every field of one long-format line, before padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongRow {
    pub perms: String,
    pub links: String,
    pub owner: String,
    pub group: String,
    pub size: String,
    pub time: String,
    /// Raw name bytes, possibly colored.
    pub name: Vec<u8>,
    /// Raw link target bytes.
    pub target: Option<Vec<u8>>,
}

impl LongRow {
    /// Builds the row for one entry. Unresolvable owners and groups show their numeric id;
    /// an entry that could not be stat'd gets `?` in every metadata field.
    pub fn build<L: NameLookup>(entry: &FileEntry, ctx: &RenderContext, names: &mut L) -> Self {
        let name = entry.name_bytes();
        let Some(info) = entry.info() else {
            return LongRow {
                perms: PLACEHOLDER.repeat(10),
                links: PLACEHOLDER.into(),
                owner: PLACEHOLDER.into(),
                group: PLACEHOLDER.into(),
                size: PLACEHOLDER.into(),
                time: PLACEHOLDER.into(),
                name: name.to_vec(),
                target: None,
            };
        };

        let attr = classify(name, info, &ctx.archive_suffixes);
        LongRow {
            perms: format_permissions(info.kind, info.mode),
            links: info.nlink.to_string(),
            owner: names
                .user_name(info.uid)
                .unwrap_or_else(|| info.uid.to_string()),
            group: names
                .group_name(info.gid)
                .unwrap_or_else(|| info.gid.to_string()),
            size: format_file_size(info.size, ctx.human_sizes),
            time: format_file_time(info.mtime, ctx.now),
            name: paint(name, attr, &ctx.theme, ctx.color),
            target: info
                .symlink
                .as_ref()
                .map(|t| t.as_os_str().as_encoded_bytes().to_vec()),
        }
    }
}

/// Writes all rows padded to the widths measured from the same rows.
pub fn write_long<W: Write>(out: &mut W, rows: &[LongRow]) -> io::Result<()> {
    let widths = LongWidths::measure(rows);
    for row in rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, row: &LongRow, w: &LongWidths) -> io::Result<()> {
    write!(
        out,
        "{} {} {} {} {} {} ",
        row.perms,
        pad_left(&row.links, w.links),
        pad_right(&row.owner, w.owner),
        pad_right(&row.group, w.group),
        pad_left(&row.size, w.size),
        pad_left(&row.time, TIME_WIDTH),
    )?;
    out.write_all(&row.name)?;
    if let Some(target) = &row.target {
        out.write_all(b" -> ")?;
        out.write_all(target)?;
    }
    out.write_all(b"\n")
}

fn pad_left(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text_width(text));
    format!("{}{}", " ".repeat(pad), text)
}

fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text_width(text));
    format!("{}{}", text, " ".repeat(pad))
}
