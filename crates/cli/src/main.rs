//! Command-line demonstrations of the classics algorithms.
//!
//! Run: cargo run -p classics-cli -- btree -t 3 10 20 5 6 12 30 7 17

mod commands;
mod error;
mod input;

use commands::Command;
use std::io::{self, Write};
use std::process;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "classics",
    about = "Classical algorithms on small in-memory inputs"
)]
struct Opt {
    /// Log more detail (-v debug, -vv trace); RUST_LOG takes precedence
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    #[structopt(subcommand)]
    command: Command,
}

fn init_logger(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() {
    let opt = Opt::from_args();
    init_logger(opt.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = opt.command.run(&mut out);
    let _ = out.flush();

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
