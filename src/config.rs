//! Configuration for rls.
//!
//! - [load]: reading rls.toml into [Config], and generating a default file.
//! - [general]: listing policy (hidden files, archive suffixes).
//! - [display]: grid spacing, fallback width, color mode, size format.
//! - [theme]: escape sequences per color attribute.

pub mod display;
pub mod general;
pub mod load;
pub mod theme;

pub use display::{ColorMode, Display};
pub(crate) use general::General;
pub use general::InternalGeneral;
pub use load::{Config, RawConfig};
pub use theme::Theme;
