//! `plasmid-prep` prepares plasmid sequences for machine learning.
//!
//! It runs the [`plasmid_core`] algorithms over FASTA files:
//!
//! 1. [`qc`] scores sequence complexity (GC content, homopolymers, tandem
//!    repeats, hairpins) and a heuristic synthesis risk.
//! 1. [`partition`] splits each sequence into insert (cargo) and backbone
//!    (vector) regions from a table of annotated features, masks the inserts,
//!    and classifies the plasmid as engineered or natural.
//!
//! Every command writes one JSON report per sequence and a summary table.

pub mod annotation;
pub mod cli;
pub mod export;
pub mod partition;
pub mod qc;
pub mod sequence;
pub mod table;
pub mod utils;

#[doc(inline)]
pub use crate::cli::Cli;
#[doc(inline)]
pub use table::Table;
#[doc(inline)]
pub use utils::verbosity::Verbosity;
