//! Concordance CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use concordance::cli::args::*;
use concordance::cli::commands::*;

/// Environment variable with extra `env_logger` directives, applied on top
/// of the verbosity flags.
const LOG_ENV: &str = "CONCORDANCE_LOG";

/// Level for the library's own log targets. From `-vv` the library logs per
/// text and per skipped match, while dependencies stay at `info`.
fn library_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        _ => LevelFilter::Debug,
    }
}

/// Level for everything else.
fn global_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn init_logging(verbosity: u8) {
    Builder::new()
        .filter_level(global_level(verbosity))
        .filter_module("concordance", library_level(verbosity))
        .parse_env(LOG_ENV)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn main() {
    let args = ConcordanceArgs::parse();
    init_logging(args.verbosity());

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
