//! Helpers for rls.
//!
//! - Color name parsing into SGR start sequences
//! - Home directory lookup for the config path
//! - Clamping config values to a safe minimum

use std::path::PathBuf;

/// Parses a color name into the escape sequence that starts it.
///
/// `none`/`default` parse to an empty sequence (no color). Unknown names return `None`.
pub fn parse_color(s: &str) -> Option<&'static str> {
    let seq = match s.trim().to_lowercase().as_str() {
        "none" | "default" | "reset" => "",
        "black" => "\x1b[0;30m",
        "red" => "\x1b[0;31m",
        "green" => "\x1b[0;32m",
        "yellow" => "\x1b[0;33m",
        "blue" => "\x1b[0;34m",
        "magenta" => "\x1b[0;35m",
        "cyan" => "\x1b[0;36m",
        "white" => "\x1b[0;37m",
        "bright_black" | "gray" | "grey" => "\x1b[0;90m",
        "bright_red" => "\x1b[0;91m",
        "bright_green" => "\x1b[0;92m",
        "bright_yellow" => "\x1b[0;93m",
        "bright_blue" => "\x1b[0;94m",
        "bright_magenta" => "\x1b[0;95m",
        "bright_cyan" => "\x1b[0;96m",
        "bright_white" => "\x1b[0;97m",
        "bold" => "\x1b[1m",
        "reverse" => "\x1b[7m",
        _ => return None,
    };
    Some(seq)
}

pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Raises `value` to `min` with a warning naming the config key.
pub fn clamp_at_least(key: &str, value: usize, min: usize) -> usize {
    if value < min {
        eprintln!(
            "rls: config: {}={} is below the minimum, clamped to {}",
            key, value, min
        );
        return min;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_names() {
        assert_eq!(parse_color("Blue"), Some("\x1b[0;34m"));
        assert_eq!(parse_color(" reverse "), Some("\x1b[7m"));
        assert_eq!(parse_color("none"), Some(""));
        assert_eq!(parse_color("#ff00ff"), None);
    }

    #[test]
    fn clamp() {
        assert_eq!(clamp_at_least("spacing", 0, 1), 1);
        assert_eq!(clamp_at_least("spacing", 4, 1), 4);
    }
}
