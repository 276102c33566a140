//! [Command-line interface](Cli) (CLI) of the main binary.

use crate::partition::PartitionArgs;
use crate::qc::{ParamsArgs, QcArgs};
use crate::Verbosity;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ----------------------------------------------------------------------------
// CLI Entry Point
// ----------------------------------------------------------------------------

/// The command-line interface (CLI).
/// ---
/// The CLI is intended for parsing user input from the command-line in the main function.
/// ```no_run
/// use clap::Parser;
/// let args = plasmid_prep::Cli::parse();
/// ```
/// Here is a manual example of setting the command-line input:
/// ```rust
/// use clap::Parser;
/// use plasmid_prep::{cli::Command, Cli, Verbosity};
///
/// let input = ["plasmid-prep", "qc", "--input", "plasmids.fasta", "--output-dir", "output", "-v", "debug"];
/// let args = Cli::parse_from(input);
/// assert_eq!(args.verbosity, Verbosity::Debug);
/// match args.command {
///     Command::Qc(args) => assert_eq!(args.threads, 1),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Deserialize, Parser, Serialize)]
#[clap(name = "plasmid-prep", author, version)]
#[clap(about = "plasmid-prep partitions plasmid sequences into insert and backbone regions and scores their synthesis risk.")]
pub struct Cli {
    #[clap(subcommand)]
    /// Pass CLI arguments to a particular [Command].
    #[clap(help = "Set the command.")]
    pub command: Command,

    /// Set the output [Verbosity] level.
    #[clap(short = 'v', long)]
    #[clap(value_enum, default_value_t = Verbosity::default())]
    #[clap(hide_possible_values = false)]
    #[clap(global = true)]
    #[clap(help = "Set the output verbosity level.")]
    pub verbosity: Verbosity,
}

/// CLI [commands](#variants). Used to decide which runtime [Command](#variants) the CLI arguments should be passed to.
#[derive(Debug, Deserialize, Serialize, Subcommand)]
pub enum Command {
    /// Pass CLI arguments to [`qc::run`](crate::qc::run).
    #[clap(about = "Score sequence complexity and synthesis risk.")]
    Qc(QcArgs),

    /// Pass CLI arguments to [`partition::run`](crate::partition::run).
    ///
    /// ```rust
    /// use clap::Parser;
    /// use plasmid_prep::{cli::Command, Cli};
    ///
    /// let input = ["plasmid-prep", "partition", "-i", "in.fasta", "-f", "features.tsv", "-o", "out", "--min-gap-size", "500"];
    /// match Cli::parse_from(input).command {
    ///     Command::Partition(args) => assert_eq!(args.min_gap_size, 500),
    ///     _ => unreachable!(),
    /// }
    /// ```
    #[clap(about = "Partition sequences into insert and backbone regions.")]
    Partition(PartitionArgs),

    /// Pass CLI arguments to [`qc::write_params`](crate::qc::write_params).
    #[clap(about = "Write the default QC parameters to a JSON file.")]
    Params(ParamsArgs),
}
