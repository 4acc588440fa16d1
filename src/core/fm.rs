//! Directory reading and metadata resolution for rls.
//!
//! Provides [read_names] for enumerating a directory, and the [FileEntry] / [FileInfo]
//! structs that carry one resolved entry through a rendering pass.

use crate::core::width::text_width;

use std::ffi::{OsStr, OsString};
use std::fs::{self, symlink_metadata};
use std::io;
use std::path::{Path, PathBuf};

/// Permission bit masks, as laid out in `st_mode`.
pub const SETUID: u32 = 0o4000;
pub const SETGID: u32 = 0o2000;
pub const STICKY: u32 = 0o1000;
pub const EXEC_ANY: u32 = 0o111;

/// The type of a file-system object, as reported by `lstat` (symlinks are not followed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    CharDevice,
    BlockDevice,
    Socket,
    Fifo,
}

impl EntryKind {
    /// The leading character of a long-format permission string.
    pub fn type_char(self) -> char {
        match self {
            EntryKind::Regular => '-',
            EntryKind::Directory => 'd',
            EntryKind::Symlink => 'l',
            EntryKind::CharDevice => 'c',
            EntryKind::BlockDevice => 'b',
            EntryKind::Socket => 's',
            EntryKind::Fifo => 'p',
        }
    }

    #[inline]
    pub fn is_special(self) -> bool {
        matches!(
            self,
            EntryKind::CharDevice | EntryKind::BlockDevice | EntryKind::Socket | EntryKind::Fifo
        )
    }

    fn from_file_type(ft: fs::FileType) -> Self {
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            if ft.is_char_device() {
                return EntryKind::CharDevice;
            }
            if ft.is_block_device() {
                return EntryKind::BlockDevice;
            }
            if ft.is_socket() {
                return EntryKind::Socket;
            }
            if ft.is_fifo() {
                return EntryKind::Fifo;
            }
        }
        if ft.is_symlink() {
            EntryKind::Symlink
        } else if ft.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Regular
        }
    }
}

/// Resolved metadata for one entry.
///
/// `symlink` is only ever `Some` for [EntryKind::Symlink], and only when the link
/// target could be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub kind: EntryKind,
    /// Permission and special bits (`0o7777` mask of `st_mode`).
    pub mode: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    /// Modification time in seconds since the unix epoch.
    pub mtime: i64,
    pub symlink: Option<PathBuf>,
}

impl FileInfo {
    /// Stats `path` without following a trailing symlink.
    /// Reads the link target for symlinks; an unreadable target leaves `symlink` empty.
    pub fn from_path(path: &Path) -> io::Result<FileInfo> {
        let md = symlink_metadata(path)?;
        let kind = EntryKind::from_file_type(md.file_type());
        let symlink = if kind == EntryKind::Symlink {
            fs::read_link(path).ok()
        } else {
            None
        };

        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            Ok(FileInfo {
                kind,
                mode: md.mode() & 0o7777,
                nlink: md.nlink(),
                uid: md.uid(),
                gid: md.gid(),
                size: md.size(),
                mtime: md.mtime(),
                symlink,
            })
        }
        #[cfg(not(unix))]
        {
            let mode = if md.permissions().readonly() { 0o444 } else { 0o644 };
            let mtime = md
                .modified()
                .ok()
                .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
                .map(|d| d.as_secs() as i64)
                .unwrap_or(0);
            Ok(FileInfo {
                kind,
                mode,
                nlink: 1,
                uid: 0,
                gid: 0,
                size: md.len(),
                mtime,
                symlink,
            })
        }
    }

    #[inline]
    pub fn is_executable(&self) -> bool {
        self.mode & EXEC_ANY != 0
    }
}

/// A single entry of a directory listing.
///
/// `info` is `None` when the entry was listed but could not be stat'd.
/// Immutable once built; owned by the listing pass that created it.
#[derive(Debug, Clone)]
pub struct FileEntry {
    name: Box<OsStr>,
    path: PathBuf,
    info: Option<FileInfo>,
}

impl FileEntry {
    pub fn new(name: OsString, path: PathBuf, info: Option<FileInfo>) -> Self {
        FileEntry {
            name: name.into_boxed_os_str(),
            path,
            info,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// The name exactly as the file system returned it.
    #[inline]
    pub fn name_bytes(&self) -> &[u8] {
        self.name.as_encoded_bytes()
    }

    /// Visible width of the name. Bytes that are not valid UTF-8 count as one column each.
    pub fn name_width(&self) -> usize {
        text_width(&self.name.to_string_lossy())
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn info(&self) -> Option<&FileInfo> {
        self.info.as_ref()
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.info
            .as_ref()
            .is_some_and(|i| i.kind == EntryKind::Directory)
    }
}

/// Reads the entry names of a directory in whatever order the OS yields them.
/// "." and ".." are never included. Entries that fail mid-iteration are skipped.
pub fn read_names(path: &Path) -> io::Result<Vec<OsString>> {
    let mut names = Vec::with_capacity(64);
    for entry in fs::read_dir(path)? {
        let Ok(entry) = entry else { continue };
        let name = entry.file_name();
        if name == "." || name == ".." {
            continue;
        }
        names.push(name);
    }
    Ok(names)
}
