//! Display configuration options for rls
//!
//! This module defines the `[display]` table of rls.toml: grid spacing, the fallback display
//! width, when to color, and how to print sizes.

use crate::core::layout::DEFAULT_SPACING;
use crate::utils::clamp_at_least;

use serde::Deserialize;

/// Width used when neither the terminal nor `$COLUMNS` reports one.
pub const DEFAULT_FALLBACK_WIDTH: usize = 80;

/// When to emit color escapes.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Only when stdout is an interactive terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolves the mode against the tty state. Called once per invocation.
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Display configuration options
///
/// Every option has a default, so an empty or partial `[display]` table is valid.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Display {
    spacing: usize,
    fallback_width: usize,
    color: ColorMode,
    human_sizes: bool,
}

impl Display {
    pub fn spacing(&self) -> usize {
        self.spacing
    }

    pub fn fallback_width(&self) -> usize {
        self.fallback_width
    }

    pub fn color(&self) -> ColorMode {
        self.color
    }

    pub fn human_sizes(&self) -> bool {
        self.human_sizes
    }

    /// Clamps values that would make the grid arithmetic meaningless.
    pub(crate) fn validated(self) -> Self {
        Display {
            spacing: clamp_at_least("spacing", self.spacing, 1),
            fallback_width: clamp_at_least("fallback_width", self.fallback_width, 1),
            ..self
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Display {
            spacing: DEFAULT_SPACING,
            fallback_width: DEFAULT_FALLBACK_WIDTH,
            color: ColorMode::Auto,
            human_sizes: false,
        }
    }
}
