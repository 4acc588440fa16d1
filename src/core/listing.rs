//! Listing orchestration: read, filter and sort, resolve, render, and recurse.
//!
//! Recursion runs off an explicit stack of pending directories. Popping a directory lists it
//! completely; its subdirectories are then pushed in reverse sorted order, so the output is a
//! depth-first pre-order walk without growing the call stack.
//!
//! Each directory is rendered into its own buffer and written in one piece, so a failure in
//! one directory never leaves a half-written listing behind.

use crate::config::general::default_archive_suffixes;
use crate::config::{Config, Theme};
use crate::core::color::{classify, paint};
use crate::core::fm::{FileEntry, FileInfo, read_names};
use crate::core::formatter::Formatter;
use crate::core::layout::{Cell, DEFAULT_SPACING, Layout, write_grid};
use crate::core::long::{LongRow, NameLookup, write_long};
use crate::core::terminal::stdout_is_tty;
use crate::core::width::display_width;
use crate::error::{LsError, Result};

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// How one directory's entries are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Grid(Layout),
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub mode: DisplayMode,
    pub recursive: bool,
    pub show_hidden: bool,
}

/// Everything a render needs that is decided once per invocation.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub color: bool,
    pub display_width: usize,
    pub spacing: usize,
    /// Reference time for the recency window, unix seconds.
    pub now: i64,
    pub human_sizes: bool,
    pub theme: Theme,
    pub archive_suffixes: Vec<String>,
}

impl RenderContext {
    pub fn from_config(config: &Config, color: bool, display_width: usize, now: i64) -> Self {
        RenderContext {
            color,
            display_width,
            spacing: config.display().spacing(),
            now,
            human_sizes: config.display().human_sizes(),
            theme: config.theme().clone(),
            archive_suffixes: config.general().archive_suffixes().to_vec(),
        }
    }

    /// Queries the terminal, the tty state and the clock. Call once per process.
    pub fn detect(config: &Config) -> Self {
        let color = config.display().color().enabled(stdout_is_tty());
        let width = display_width(config.display().fallback_width());
        Self::from_config(config, color, width, chrono::Utc::now().timestamp())
    }

    /// No color, 80 columns, default theme.
    pub fn plain(now: i64) -> Self {
        RenderContext {
            color: false,
            display_width: 80,
            spacing: DEFAULT_SPACING,
            now,
            human_sizes: false,
            theme: Theme::default(),
            archive_suffixes: default_archive_suffixes(),
        }
    }
}

pub struct Lister<'a, L: NameLookup> {
    ctx: &'a RenderContext,
    opts: ListOptions,
    names: L,
}

impl<'a, L: NameLookup> Lister<'a, L> {
    pub fn new(ctx: &'a RenderContext, opts: ListOptions, names: L) -> Self {
        Lister { ctx, opts, names }
    }

    /// Lists `root`, and every directory below it when recursive.
    ///
    /// Only an unreadable `root` is an error. Unreadable subdirectories and entries that
    /// cannot be stat'd are reported on stderr and the walk continues.
    pub fn run<W: Write>(&mut self, root: &Path, out: &mut W) -> Result<()> {
        let names = read_names(root).map_err(|source| LsError::RootUnreadable {
            path: root.to_path_buf(),
            source,
        })?;

        if !self.opts.recursive {
            let entries = self.resolve(root, names);
            let mut buf = Vec::new();
            self.render(&mut buf, &entries)?;
            out.write_all(&buf)?;
            out.flush()?;
            return Ok(());
        }

        let mut root_names = Some(names);
        let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let listed = match root_names.take() {
                Some(names) => Ok(names),
                None => read_names(&dir),
            };

            let mut buf = Vec::new();
            writeln!(buf, "{}:", dir.display())?;
            match listed {
                Ok(names) => {
                    let entries = self.resolve(&dir, names);
                    self.render(&mut buf, &entries)?;
                    pending.extend(
                        entries
                            .iter()
                            .rev()
                            .filter(|e| e.is_dir())
                            .map(|e| e.path().to_path_buf()),
                    );
                }
                Err(e) => {
                    eprintln!("rls: cannot open directory '{}': {}", dir.display(), e);
                }
            }
            buf.push(b'\n');
            out.write_all(&buf)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Applies the hidden-file policy, sorts, and stats every name.
    /// Entries that fail to stat are dropped, except in long mode where they keep a
    /// placeholder row.
    fn resolve(&self, dir: &Path, mut names: Vec<OsString>) -> Vec<FileEntry> {
        Formatter::new(self.opts.show_hidden).filter_names(&mut names);

        let mut entries = Vec::with_capacity(names.len());
        for name in names {
            let path = dir.join(&name);
            match FileInfo::from_path(&path) {
                Ok(info) => entries.push(FileEntry::new(name, path, Some(info))),
                Err(e) => {
                    eprintln!("rls: cannot access '{}': {}", path.display(), e);
                    if self.opts.mode == DisplayMode::Long {
                        entries.push(FileEntry::new(name, path, None));
                    }
                }
            }
        }
        entries
    }

    fn render<W: Write>(&mut self, out: &mut W, entries: &[FileEntry]) -> io::Result<()> {
        let ctx = self.ctx;
        match self.opts.mode {
            DisplayMode::Long => {
                let names = &mut self.names;
                let rows: Vec<LongRow> = entries
                    .iter()
                    .map(|e| LongRow::build(e, ctx, names))
                    .collect();
                write_long(out, &rows)
            }
            DisplayMode::Grid(layout) => {
                let cells: Vec<Cell> = entries.iter().map(|e| grid_cell(e, ctx)).collect();
                write_grid(out, layout, &cells, ctx.display_width, ctx.spacing)
            }
        }
    }
}

fn grid_cell(entry: &FileEntry, ctx: &RenderContext) -> Cell {
    let name = entry.name_bytes();
    let text = match entry.info() {
        Some(info) => {
            let attr = classify(name, info, &ctx.archive_suffixes);
            paint(name, attr, &ctx.theme, ctx.color)
        }
        None => name.to_vec(),
    };
    Cell::styled(text, entry.name_width())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::long::SystemNames;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn opts(mode: DisplayMode, recursive: bool) -> ListOptions {
        ListOptions {
            mode,
            recursive,
            show_hidden: false,
        }
    }

    fn run_bytes(root: &Path, opts: ListOptions, ctx: &RenderContext) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        Lister::new(ctx, opts, SystemNames::default()).run(root, &mut out)?;
        Ok(out)
    }

    fn run(root: &Path, opts: ListOptions, ctx: &RenderContext) -> Result<String> {
        let out = run_bytes(root, opts, ctx)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn default_grid_sorts_and_fits_one_row() -> Result<()> {
        let dir = tempdir()?;
        File::create(dir.path().join("b.txt"))?;
        File::create(dir.path().join("a.txt"))?;
        fs::create_dir(dir.path().join("dir1"))?;

        let ctx = RenderContext::plain(0);
        let out = run(dir.path(), opts(DisplayMode::Grid(Layout::DownAcross), false), &ctx)?;
        assert_eq!(out, "a.txt  b.txt  dir1\n");
        Ok(())
    }

    #[test]
    fn empty_directory_prints_nothing() -> Result<()> {
        let dir = tempdir()?;
        let ctx = RenderContext::plain(0);
        for mode in [
            DisplayMode::Grid(Layout::DownAcross),
            DisplayMode::Grid(Layout::Across),
            DisplayMode::Long,
        ] {
            assert_eq!(run(dir.path(), opts(mode, false), &ctx)?, "");
        }
        Ok(())
    }

    #[test]
    fn unreadable_root_is_fatal() {
        let ctx = RenderContext::plain(0);
        let res = run(
            Path::new("/path/does/not/exist"),
            opts(DisplayMode::Long, true),
            &ctx,
        );
        assert!(matches!(res, Err(LsError::RootUnreadable { .. })));
    }

    #[test]
    fn color_wraps_directories_when_enabled() -> Result<()> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("sub"))?;
        File::create(dir.path().join("x.zip"))?;

        let mut ctx = RenderContext::plain(0);
        ctx.color = true;
        let out = run(dir.path(), opts(DisplayMode::Grid(Layout::Across), false), &ctx)?;
        assert_eq!(out, "\x1b[0;34msub\x1b[0m    \x1b[0;31mx.zip\x1b[0m\n");
        Ok(())
    }

    #[test]
    fn recursion_is_depth_first_pre_order() -> Result<()> {
        let dir = tempdir()?;
        let root = dir.path().join("root");
        fs::create_dir_all(root.join("a/deep"))?;
        fs::create_dir_all(root.join("b"))?;
        File::create(root.join("a/deep/f"))?;

        let ctx = RenderContext::plain(0);
        let out = run(&root, opts(DisplayMode::Grid(Layout::DownAcross), true), &ctx)?;
        let r = root.display();
        let expected = format!("{r}:\na  b\n\n{r}/a:\ndeep\n\n{r}/a/deep:\nf\n\n{r}/b:\n\n");
        assert_eq!(out, expected);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn recursion_does_not_follow_symlinked_dirs() -> Result<()> {
        let dir = tempdir()?;
        let root = dir.path().join("root");
        fs::create_dir_all(root.join("real"))?;
        std::os::unix::fs::symlink(&root, root.join("loop"))?;

        let ctx = RenderContext::plain(0);
        let out = run(&root, opts(DisplayMode::Grid(Layout::DownAcross), true), &ctx)?;
        assert_eq!(out.matches(':').count(), 2, "{out}");
        Ok(())
    }

    #[test]
    fn hidden_policy_applies_to_recursion() -> Result<()> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join(".git"))?;
        File::create(dir.path().join(".git/HEAD"))?;
        File::create(dir.path().join("visible"))?;

        let ctx = RenderContext::plain(0);
        let mut o = opts(DisplayMode::Grid(Layout::DownAcross), true);
        let hidden_off = run(dir.path(), o, &ctx)?;
        assert!(!hidden_off.contains(".git"));

        o.show_hidden = true;
        let hidden_on = run(dir.path(), o, &ctx)?;
        assert!(hidden_on.contains(".git:\nHEAD\n"), "{hidden_on}");
        Ok(())
    }

    #[test]
    fn failed_stat_is_dropped_in_grid_and_kept_in_long() -> Result<()> {
        let dir = tempdir()?;
        File::create(dir.path().join("present"))?;
        let ctx = RenderContext::plain(0);
        let names = || vec![OsString::from("missing"), OsString::from("present")];

        let grid = opts(DisplayMode::Grid(Layout::DownAcross), false);
        let entries = Lister::new(&ctx, grid, SystemNames::default()).resolve(dir.path(), names());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name_bytes(), b"present");

        let long = opts(DisplayMode::Long, false);
        let entries = Lister::new(&ctx, long, SystemNames::default()).resolve(dir.path(), names());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name_bytes(), b"missing");
        assert!(entries[0].info().is_none());
        assert!(entries[1].info().is_some());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdirectory_keeps_the_walk_going() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir()?;
        let root = dir.path().join("root");
        let locked = root.join("a_locked");
        fs::create_dir_all(&locked)?;
        fs::create_dir_all(root.join("b"))?;
        File::create(root.join("b/f"))?;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

        // Privileged users read through mode 000, so there is no failure to observe.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
            return Ok(());
        }

        let ctx = RenderContext::plain(0);
        let out = run(&root, opts(DisplayMode::Grid(Layout::DownAcross), true), &ctx);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

        let r = root.display();
        assert_eq!(out?, format!("{r}:\na_locked  b\n\n{r}/a_locked:\n\n{r}/b:\nf\n\n"));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn names_that_are_not_utf8_print_unchanged() -> Result<()> {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir()?;
        let name = OsStr::from_bytes(b"a\xffb");
        // some file systems only accept UTF-8 names
        if File::create(dir.path().join(name)).is_err() {
            return Ok(());
        }
        std::os::unix::fs::symlink(OsStr::from_bytes(b"t\xfe"), dir.path().join("link"))?;

        let ctx = RenderContext::plain(0);
        let grid = run_bytes(dir.path(), opts(DisplayMode::Grid(Layout::DownAcross), false), &ctx)?;
        assert_eq!(grid, b"a\xffb   link\n");

        let long = run_bytes(dir.path(), opts(DisplayMode::Long, false), &ctx)?;
        let lines: Vec<&[u8]> = long.split(|&b| b == b'\n').collect();
        assert!(lines[0].ends_with(b" a\xffb"));
        assert!(lines[1].ends_with(b" link -> t\xfe"));
        Ok(())
    }
}
