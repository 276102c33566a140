//! Partition every record in a FASTA file into insert and backbone regions.

#[cfg(test)]
mod tests;

use crate::sequence::{self, Record};
use crate::{annotation, export, utils};
use clap::Parser;
use color_eyre::eyre::{Report, Result};
use indoc::formatdoc;
use itertools::Itertools;
use log::{debug, info, warn};
use plasmid_core::classify::Kind;
use plasmid_core::region::{BackboneRegion, InsertRegion, Method, MIN_GAP_SIZE};
use plasmid_core::{classify, partition_regions_with, Classification, FeatureInterval, PartitionParams};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::default::Default;
use std::path::PathBuf;

// ----------------------------------------------------------------------------
// PartitionArgs
// ----------------------------------------------------------------------------

/// Partition sequences into insert and backbone regions from annotated features.
#[derive(Clone, Debug, Deserialize, Parser, Serialize)]
pub struct PartitionArgs {
    /// Input FASTA file of plasmid sequences.
    #[clap(short = 'i', long, required = true)]
    pub input: PathBuf,

    /// Feature table (.tsv or .csv).
    ///
    /// Columns: sample_id, id, type, start, end, and optionally strand.
    #[clap(short = 'f', long, required = true)]
    pub features: PathBuf,

    /// Output directory.
    ///
    /// If the directory does not exist, it will be created.
    #[clap(short = 'o', long, required = true)]
    pub output_dir: PathBuf,

    /// Minimum number of uncovered bases between backbone features to call an insert.
    #[clap(short = 'm', long, default_value_t = PartitionArgs::default().min_gap_size)]
    pub min_gap_size: usize,

    /// Number of CPU threads to use.
    #[clap(short = 't', long, default_value_t = PartitionArgs::default().threads)]
    #[serde(skip)]
    pub threads: usize,
}

impl Default for PartitionArgs {
    fn default() -> Self {
        PartitionArgs {
            input: PathBuf::new(),
            features: PathBuf::new(),
            output_dir: PathBuf::new(),
            min_gap_size: MIN_GAP_SIZE,
            threads: 1,
        }
    }
}

// ----------------------------------------------------------------------------
// PartitionReport
// ----------------------------------------------------------------------------

/// The regions and classification of one sequence record.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PartitionReport {
    pub sample_id: String,
    pub sequence_length: usize,
    pub insert_regions: Vec<InsertRegion>,
    pub backbone_regions: Vec<BackboneRegion>,
    /// The sequence with every insert replaced by an `<INSERT_n>` token.
    pub annotated_sequence: String,
    /// Sequence of the longest insert, empty if there is none.
    pub insert_sequence: String,
    pub has_identifiable_insert: bool,
    pub insert_detection_method: Method,
    pub annotation_confidence: f64,
    /// Total length of all insert regions.
    pub insert_length: usize,
    /// Total length of all backbone regions.
    pub backbone_length: usize,
    #[serde(flatten)]
    pub classification: Classification,
}

impl PartitionReport {
    pub fn new(record: &Record, features: &[FeatureInterval], params: &PartitionParams) -> Self {
        let partition = partition_regions_with(&record.sequence, features, params);
        debug!(
            "{}: {} inserts, {} backbone regions ({})",
            record.id,
            partition.insert_regions.len(),
            partition.backbone_regions.len(),
            partition.method
        );

        PartitionReport {
            sample_id: record.id.clone(),
            sequence_length: record.len(),
            insert_sequence: partition.insert_sequence(&record.sequence).to_string(),
            has_identifiable_insert: partition.has_identifiable_insert(),
            insert_detection_method: partition.method,
            annotation_confidence: partition.confidence,
            insert_length: partition.insert_length(),
            backbone_length: partition.backbone_length(),
            classification: classify(features),
            insert_regions: partition.insert_regions,
            backbone_regions: partition.backbone_regions,
            annotated_sequence: partition.masked_sequence,
        }
    }
}

// ----------------------------------------------------------------------------
// Run
// ----------------------------------------------------------------------------

/// Partition and classify every record in `args.input` with its features.
///
/// Writes one JSON report per record to `<output_dir>/partition/` and a
/// summary table to `<output_dir>/partition.tsv`. Records without features
/// are partitioned with none. Returns the reports in input order.
pub fn run(args: &PartitionArgs) -> Result<Vec<PartitionReport>, Report> {
    let params = PartitionParams { min_gap_size: args.min_gap_size };

    info!("Reading features: {:?}", args.features);
    let features = annotation::read_features(&args.features)?;

    info!("Reading sequences: {:?}", args.input);
    let records = sequence::read_records(&args.input)?;

    let sample_ids: BTreeSet<_> = records.iter().map(|r| r.id.as_str()).collect();
    let unmatched = features.keys().filter(|id| !sample_ids.contains(id.as_str())).count();
    if unmatched > 0 {
        warn!("{unmatched} samples in {:?} have no sequence in {:?}", args.features, args.input);
    }

    info!("Partitioning {} sequences with {} threads.", records.len(), args.threads);
    let reports = utils::par_map(args.threads, &records, |record| {
        let record_features = features.get(&record.id).map(Vec::as_slice).unwrap_or_default();
        if record_features.is_empty() {
            debug!("{}: no features", record.id);
        }
        PartitionReport::new(record, record_features, &params)
    })?;

    let report_dir = args.output_dir.join("partition");
    let sample_ids = reports.iter().map(|r| r.sample_id.as_str()).collect_vec();
    for (report, path) in reports.iter().zip(utils::sample_paths(&report_dir, &sample_ids, "json")) {
        utils::write_json(report, &path)?;
    }

    let summary_path = args.output_dir.join("partition.tsv");
    let summary = export::partition_table(&reports)?;
    summary.write(&summary_path, None)?;
    debug!("Partition summary:\n{}", summary.to_markdown());

    let engineered =
        reports.iter().filter(|r| r.classification.classification == Kind::Engineered).count();
    let with_insert = reports.iter().filter(|r| r.has_identifiable_insert).count();
    info!(
        "{}",
        formatdoc!(
            "Partition complete.
            sequences: {}
            engineered: {engineered}
            with insert: {with_insert}
            reports: {report_dir:?}
            summary: {summary_path:?}",
            reports.len(),
        )
    );

    Ok(reports)
}
