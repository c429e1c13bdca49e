use clap::Parser;
use colored::Colorize;
use std::io;
use userstore::api::perform;
use userstore::config::Params;
use userstore::error::Result;

mod args;
mod logging;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let params = Params::from(cli);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    perform(&params, &mut out)?;
    Ok(())
}
