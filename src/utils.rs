//! Miscellaneous utility functions for rls.
//!
//! - [cli]: command-line parsing, help and version text.
//! - [helpers]: color name parsing, home directory lookup, config value clamping.

pub mod cli;
pub mod helpers;

pub use helpers::{clamp_at_least, get_home, parse_color};
