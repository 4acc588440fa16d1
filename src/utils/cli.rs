//! Command-line argument parsing and help for rls.
//!
//! Short flags may be combined (`-lR`), `--` ends option parsing, and at most one PATH is
//! accepted. Parsing is pure; printing help or running the listing is left to the caller.

use crate::core::layout::Layout;
use crate::core::listing::DisplayMode;
use crate::error::{LsError, Result};

use std::ffi::OsString;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: rls [-l] [-x] [-R] [-a] [PATH]";

/// Flags and path of one listing invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub long: bool,
    pub horizontal: bool,
    pub recursive: bool,
    pub all: bool,
    pub path: Option<PathBuf>,
}

impl CliArgs {
    /// `-l` takes precedence over `-x`.
    pub fn display_mode(&self) -> DisplayMode {
        if self.long {
            DisplayMode::Long
        } else if self.horizontal {
            DisplayMode::Grid(Layout::Across)
        } else {
            DisplayMode::Grid(Layout::DownAcross)
        }
    }

    pub fn path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    List(CliArgs),
    Help,
    Version,
    Init,
}

/// Parses the arguments that follow the program name.
pub fn parse_args<I>(args: I) -> Result<CliAction>
where
    I: IntoIterator<Item = OsString>,
{
    let mut cli = CliArgs::default();
    let mut options_done = false;

    for arg in args {
        if !options_done {
            match arg.to_str() {
                Some("--") => {
                    options_done = true;
                    continue;
                }
                Some("-h") | Some("--help") => return Ok(CliAction::Help),
                Some("-V") | Some("--version") => return Ok(CliAction::Version),
                Some("--init") => return Ok(CliAction::Init),
                Some(s) if s.starts_with("--") => {
                    return Err(LsError::Usage(format!("unrecognized option '{}'", s)));
                }
                Some(s) if s.len() > 1 && s.starts_with('-') => {
                    for flag in s[1..].chars() {
                        match flag {
                            'l' => cli.long = true,
                            'x' => cli.horizontal = true,
                            'R' => cli.recursive = true,
                            'a' => cli.all = true,
                            other => {
                                return Err(LsError::Usage(format!(
                                    "invalid option -- '{}'",
                                    other
                                )));
                            }
                        }
                    }
                    continue;
                }
                _ => {}
            }
        }

        if cli.path.is_some() {
            return Err(LsError::Usage("only one PATH may be given".to_string()));
        }
        cli.path = Some(PathBuf::from(arg));
    }
    Ok(CliAction::List(cli))
}

pub fn print_version() {
    println!("rls {}", env!("CARGO_PKG_VERSION"));
}

pub fn print_help() {
    println!(
        r#"rls - list directory contents

USAGE:
  rls [OPTIONS] [PATH]

PATH:
  Directory to list (defaults to the current directory)

OPTIONS:
  -l                      Long listing: permissions, links, owner, group, size, time
  -x                      List entries across rows instead of down columns
  -R                      List subdirectories recursively
  -a                      Show entries whose names begin with '.'
      --init              Generate a default configuration file
  -h, --help              Print help information
  -V, --version           Print the version

ENVIRONMENT:
  RLS_CONFIG              Override the default config path
  COLUMNS                 Display width when the terminal size is unknown
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliAction> {
        parse_args(args.iter().map(OsString::from))
    }

    fn list(args: &[&str]) -> CliArgs {
        match parse(args) {
            Ok(CliAction::List(cli)) => cli,
            other => panic!("expected a listing for {args:?}, got {other:?}"),
        }
    }

    #[test]
    fn no_args_lists_current_dir() {
        let cli = list(&[]);
        assert_eq!(cli, CliArgs::default());
        assert_eq!(cli.path(), PathBuf::from("."));
        assert_eq!(cli.display_mode(), DisplayMode::Grid(Layout::DownAcross));
    }

    #[test]
    fn combined_flags_and_path() {
        let cli = list(&["-lR", "some/dir"]);
        assert!(cli.long && cli.recursive && !cli.horizontal);
        assert_eq!(cli.path(), PathBuf::from("some/dir"));
    }

    #[test]
    fn long_wins_over_horizontal() {
        assert_eq!(list(&["-x", "-l"]).display_mode(), DisplayMode::Long);
        assert_eq!(list(&["-l", "-x"]).display_mode(), DisplayMode::Long);
        assert_eq!(list(&["-x"]).display_mode(), DisplayMode::Grid(Layout::Across));
    }

    #[test]
    fn unknown_flags_are_usage_errors() {
        assert!(matches!(parse(&["-q"]), Err(LsError::Usage(_))));
        assert!(matches!(parse(&["-lz"]), Err(LsError::Usage(_))));
        assert!(matches!(parse(&["--color"]), Err(LsError::Usage(_))));
    }

    #[test]
    fn second_path_is_rejected() {
        assert!(matches!(parse(&["a", "b"]), Err(LsError::Usage(_))));
    }

    #[test]
    fn double_dash_ends_options() {
        let cli = list(&["-a", "--", "-l"]);
        assert!(cli.all && !cli.long);
        assert_eq!(cli.path(), PathBuf::from("-l"));
    }

    #[test]
    fn info_actions() {
        assert_eq!(parse(&["--help"]).ok(), Some(CliAction::Help));
        assert_eq!(parse(&["-V"]).ok(), Some(CliAction::Version));
        assert_eq!(parse(&["--init"]).ok(), Some(CliAction::Init));
    }
}
