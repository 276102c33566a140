//! Score sequence complexity and synthesis risk for every record in a FASTA file.

#[cfg(test)]
mod tests;

use crate::sequence::{self, Record};
use crate::{export, utils};
use clap::Parser;
use color_eyre::eyre::{Report, Result};
use indoc::formatdoc;
use itertools::Itertools;
use log::{debug, info};
use plasmid_core::{score_sequence_with, QcParams, SequenceQCResult};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;

/// Risk score at or above which a sequence is counted as high risk in the run summary.
pub const HIGH_RISK: f64 = 0.5;

// ----------------------------------------------------------------------------
// QcArgs
// ----------------------------------------------------------------------------

/// Score sequence complexity and synthesis risk.
#[derive(Clone, Debug, Deserialize, Parser, Serialize)]
pub struct QcArgs {
    /// Input FASTA file of plasmid sequences.
    #[clap(short = 'i', long, required = true)]
    pub input: PathBuf,

    /// Output directory.
    ///
    /// If the directory does not exist, it will be created.
    #[clap(short = 'o', long, required = true)]
    pub output_dir: PathBuf,

    /// JSON file of QC thresholds, as written by the `params` command.
    #[clap(short = 'p', long)]
    pub params: Option<PathBuf>,

    /// Number of CPU threads to use.
    #[clap(short = 't', long, default_value_t = QcArgs::default().threads)]
    #[serde(skip)]
    pub threads: usize,
}

impl Default for QcArgs {
    fn default() -> Self {
        QcArgs { input: PathBuf::new(), output_dir: PathBuf::new(), params: None, threads: 1 }
    }
}

// ----------------------------------------------------------------------------
// ParamsArgs
// ----------------------------------------------------------------------------

/// Write the default QC thresholds to a JSON file for editing.
#[derive(Clone, Debug, Default, Deserialize, Parser, Serialize)]
pub struct ParamsArgs {
    /// Output JSON file.
    #[clap(short = 'o', long, required = true)]
    pub output: PathBuf,
}

/// Write the default [`QcParams`] to `args.output`.
pub fn write_params(args: &ParamsArgs) -> Result<(), Report> {
    utils::write_json(&QcParams::default(), &args.output)?;
    info!("Wrote default QC parameters: {:?}", args.output);
    Ok(())
}

// ----------------------------------------------------------------------------
// QcReport
// ----------------------------------------------------------------------------

/// The QC metrics of one sequence record.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct QcReport {
    pub sample_id: String,
    pub length: usize,
    #[serde(flatten)]
    pub qc: SequenceQCResult,
}

impl QcReport {
    pub fn new(record: &Record, params: &QcParams) -> Self {
        debug!("Scoring sequence: {}", record.id);
        QcReport {
            sample_id: record.id.clone(),
            length: record.len(),
            qc: score_sequence_with(&record.sequence, params),
        }
    }
}

// ----------------------------------------------------------------------------
// Run
// ----------------------------------------------------------------------------

/// Score every record in `args.input`.
///
/// Writes one JSON report per record to `<output_dir>/qc/` and a summary
/// table to `<output_dir>/qc.tsv`. Returns the reports in input order.
pub fn run(args: &QcArgs) -> Result<Vec<QcReport>, Report> {
    let params = match &args.params {
        Some(path) => {
            info!("Reading QC parameters: {path:?}");
            utils::read_json::<QcParams, _>(path)?
        }
        None => QcParams::default(),
    };
    debug!("QC parameters: {params:?}");

    info!("Reading sequences: {:?}", args.input);
    let records = sequence::read_records(&args.input)?;

    info!("Scoring {} sequences with {} threads.", records.len(), args.threads);
    let reports = utils::par_map(args.threads, &records, |record| QcReport::new(record, &params))?;

    let report_dir = args.output_dir.join("qc");
    let sample_ids = reports.iter().map(|r| r.sample_id.as_str()).collect_vec();
    for (report, path) in reports.iter().zip(utils::sample_paths(&report_dir, &sample_ids, "json")) {
        utils::write_json(report, &path)?;
    }

    let summary_path = args.output_dir.join("qc.tsv");
    let summary = export::qc_table(&reports)?;
    summary.write(&summary_path, None)?;
    debug!("QC summary:\n{}", summary.to_markdown());

    let high_risk = reports.iter().filter(|r| r.qc.synthesis_risk >= HIGH_RISK).count();
    info!(
        "{}",
        formatdoc!(
            "QC complete.
            sequences: {}
            high synthesis risk (>= {HIGH_RISK}): {high_risk}
            reports: {report_dir:?}
            summary: {summary_path:?}",
            reports.len(),
        )
    );

    Ok(reports)
}
