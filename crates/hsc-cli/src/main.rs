//! hsc CLI entry point.

use std::process;

use clap::Parser;
use log::{debug, info};
use miette::GraphicalTheme;

use hsc_cli::{Args, error_adapter};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(args.log_filter())
        .init();
    debug!(args:?; "Parsed arguments");

    match hsc_cli::run(&args) {
        Ok(()) => info!(input = args.input; "Document compiled"),
        Err(err) => {
            eprint!("{}", error_adapter::render(&err, GraphicalTheme::default()));
            process::exit(1);
        }
    }
}
