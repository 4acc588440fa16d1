//! main.rs
//! Entry point for rls

use rls::config::Config;
use rls::core::{ListOptions, Lister, RenderContext, SystemNames};
use rls::error::Result;
use rls::utils::cli::{CliAction, USAGE, parse_args, print_help, print_version};

use std::io::{self, BufWriter};

fn main() {
    if let Err(e) = run() {
        if e.is_broken_pipe() {
            return;
        }
        eprintln!("rls: {}", e);
        if e.is_usage() {
            eprintln!("{}", USAGE);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = match parse_args(std::env::args_os().skip(1))? {
        CliAction::List(cli) => cli,
        CliAction::Help => {
            print_help();
            return Ok(());
        }
        CliAction::Version => {
            print_version();
            return Ok(());
        }
        CliAction::Init => {
            Config::generate_default(&Config::default_path())?;
            return Ok(());
        }
    };

    let config = Config::load();
    let ctx = RenderContext::detect(&config);
    let opts = ListOptions {
        mode: cli.display_mode(),
        recursive: cli.recursive,
        show_hidden: cli.all || config.general().show_hidden(),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    Lister::new(&ctx, opts, SystemNames::default()).run(&cli.path(), &mut out)
}
