#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::process;

mod app;
mod commands;

use commands::Commands;

use clap::{Args, Parser};
use log::{error, trace};

fn main() {
    if let Err(err) = try_main() {
        error!("{:#}", err);
        process::exit(2);
    }
}

fn try_main() -> eyre::Result<()> {
    let Cli {
        command,
        global_opts: GlobalOpts { verbosity, quiet },
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;
    trace!("Logging initialised");

    let output = command.execute()?;
    println!("{output}");
    Ok(())
}

fn setup_errlog(verbosity: usize, quiet: bool) -> eyre::Result<()> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 0 } else { verbosity + 1 };

    stderrlog::new()
        .module("bookfind")
        .verbosity(verbosity)
        .init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "bookfind")]
#[clap(about = "Search books by title, keyword or ISBN using the Google Books API")]
#[clap(version, author)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(flatten)]
    global_opts: GlobalOpts,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbosity: u8,

    /// Only log errors, the results are still printed to stdout.
    #[clap(short, long, global = true)]
    quiet: bool,
}
