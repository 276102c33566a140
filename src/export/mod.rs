//! Summary tables of per-record reports, one row per record.

#[cfg(test)]
mod tests;

use crate::partition::PartitionReport;
use crate::qc::QcReport;
use crate::table::Table;
use color_eyre::eyre::{Report, Result};
use itertools::Itertools;

/// Separator for list values inside a single table cell.
pub const LIST_SEPARATOR: &str = ";";

// ----------------------------------------------------------------------------
// QC
// ----------------------------------------------------------------------------

pub const QC_HEADERS: [&str; 13] = [
    "sample_id",
    "length",
    "gc_content",
    "linguistic_complexity",
    "homopolymers.max_length",
    "homopolymers.count",
    "tandem_repeats.count",
    "tandem_repeats.fraction",
    "gc_extremes.high_gc_regions",
    "gc_extremes.low_gc_regions",
    "hairpin_estimate",
    "synthesis_risk",
    "synthesis_risk_reasons",
];

/// Summarize [`QcReport`]s as a table with the [`QC_HEADERS`] columns.
pub fn qc_table(reports: &[QcReport]) -> Result<Table<String>, Report> {
    let mut table = Table::new();
    table.headers = QC_HEADERS.iter().map(|h| h.to_string()).collect_vec();

    for report in reports {
        let qc = &report.qc;
        let row = vec![
            report.sample_id.clone(),
            report.length.to_string(),
            qc.gc_content.to_string(),
            qc.linguistic_complexity.to_string(),
            qc.homopolymers.max_length.to_string(),
            qc.homopolymers.count.to_string(),
            qc.tandem_repeats.count.to_string(),
            qc.tandem_repeats.fraction.to_string(),
            qc.gc_extremes.high_gc_regions.to_string(),
            qc.gc_extremes.low_gc_regions.to_string(),
            qc.hairpin_estimate.to_string(),
            qc.synthesis_risk.to_string(),
            qc.synthesis_risk_reasons.join(LIST_SEPARATOR),
        ];
        table.add_row(row)?;
    }

    Ok(table)
}

// ----------------------------------------------------------------------------
// Partition
// ----------------------------------------------------------------------------

pub const PARTITION_HEADERS: [&str; 10] = [
    "sample_id",
    "sequence_length",
    "classification",
    "insert_detection_method",
    "annotation_confidence",
    "insert_count",
    "insert_length",
    "backbone_length",
    "origins",
    "markers",
];

/// Summarize [`PartitionReport`]s as a table with the [`PARTITION_HEADERS`] columns.
pub fn partition_table(reports: &[PartitionReport]) -> Result<Table<String>, Report> {
    let mut table = Table::new();
    table.headers = PARTITION_HEADERS.iter().map(|h| h.to_string()).collect_vec();

    for report in reports {
        let classification = &report.classification;
        let row = vec![
            report.sample_id.clone(),
            report.sequence_length.to_string(),
            classification.classification.to_string(),
            report.insert_detection_method.to_string(),
            report.annotation_confidence.to_string(),
            report.insert_regions.len().to_string(),
            report.insert_length.to_string(),
            report.backbone_length.to_string(),
            classification.origins.join(LIST_SEPARATOR),
            classification.markers.join(LIST_SEPARATOR),
        ];
        table.add_row(row)?;
    }

    Ok(table)
}
