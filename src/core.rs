//! Core listing logic for rls.
//!
//! - [fm]: directory reading and metadata resolution (see [read_names], [FileEntry], [FileInfo]).
//! - [formatter]: name sorting, the hidden-file policy, permission/time/size formatting.
//! - [width]: display width discovery and long-format column widths.
//! - [layout]: the down-then-across and across-then-down grid engine.
//! - [color]: file-type color classification.
//! - [long]: long-format rows and owner/group lookup.
//! - [listing]: the orchestrator tying it together, including recursion.
//! - [terminal]: terminal size and tty queries.

pub mod color;
pub mod fm;
pub mod formatter;
pub mod layout;
pub mod listing;
pub mod long;
pub mod terminal;
pub mod width;

pub use color::{ColorAttribute, classify, paint};
pub use fm::{EntryKind, FileEntry, FileInfo, read_names};
pub use formatter::{
    Formatter, format_file_size, format_file_time, format_permissions, sort_names,
};
pub use layout::{Cell, Layout, LayoutPlan, write_across, write_down_across, write_grid};
pub use listing::{DisplayMode, ListOptions, Lister, RenderContext};
pub use long::{LongRow, NameLookup, SystemNames, write_long};
pub use width::{LongWidths, display_width};
