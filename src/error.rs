//! Error type for rls.
//!
//! Only failures that end the whole invocation are modeled here.
//! Per-entry failures (stat, readlink, owner lookup) stay as `io::Result`/`Option`
//! values and are reported where they happen.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LsError>;

#[derive(Debug, Error)]
pub enum LsError {
    /// The path given on the command line could not be listed at all.
    #[error("cannot access '{}': {source}", path.display())]
    RootUnreadable { path: PathBuf, source: io::Error },

    #[error("{0}")]
    Usage(String),

    #[error("config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl LsError {
    /// Usage errors print the usage line in addition to the message.
    pub fn is_usage(&self) -> bool {
        matches!(self, LsError::Usage(_))
    }

    /// The reader of stdout went away (`rls | head`); not worth a diagnostic.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, LsError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
