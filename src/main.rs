use clap::Parser;
use color_eyre::eyre::{Report, Result};
use plasmid_prep::{cli::Command, partition, qc, Cli};

fn main() -> Result<(), Report> {
    // ------------------------------------------------------------------------
    // CLI Setup

    // Parse CLI parameters
    let args = Cli::parse();

    // initialize color_eyre crate for colorized logs
    color_eyre::install()?;

    // Set logging/verbosity level via RUST_LOG
    std::env::set_var("RUST_LOG", args.verbosity.to_string());

    // initialize env_logger crate for logging/verbosity level
    env_logger::init();

    // check which CLI command we're running (qc, partition, params)
    match args.command {
        Command::Qc(args) => _ = qc::run(&args)?,
        Command::Partition(args) => _ = partition::run(&args)?,
        Command::Params(args) => qc::write_params(&args)?,
    }

    Ok(())
}
