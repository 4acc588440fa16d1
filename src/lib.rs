//! Library crate for rls.
//!
//! The shipped application is the `rls` binary (`src/main.rs`).
//!
//! This library exists to share code between the binary and the integration tests.
//! It is not considered a stable API for external use.

pub mod config;
pub mod core;
pub mod error;
pub mod utils;
