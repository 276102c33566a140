//! Read annotated features from a delimited feature table.
//!
//! The table has a header row with the columns `sample_id`, `id`, `type`,
//! `start`, `end` and optionally `strand`. Coordinates are 0-based and `end`
//! is exclusive. Malformed rows are skipped with a warning.


use crate::table::Table;
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use color_eyre::Help;
use log::{debug, warn};
use plasmid_core::feature::{parse_strand, FeatureInterval, FeatureType};
use std::collections::BTreeMap;
use std::path::Path;

/// Columns that must be present in a feature table.
pub const REQUIRED_COLUMNS: [&str; 5] = ["sample_id", "id", "type", "start", "end"];

/// Parse a coordinate, clamping negative values to 0.
///
/// ```rust
/// use plasmid_prep::annotation::parse_coordinate;
/// assert_eq!(parse_coordinate("120")?, 120);
/// assert_eq!(parse_coordinate("-5")?, 0);
/// assert!(parse_coordinate("12.5").is_err());
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
pub fn parse_coordinate(value: &str) -> Result<usize, Report> {
    let coord: i64 =
        value.trim().parse().wrap_err_with(|| format!("Invalid coordinate: {value:?}"))?;
    if coord < 0 {
        warn!("Negative coordinate {coord} was clamped to 0.");
    }
    usize::try_from(coord.max(0)).wrap_err_with(|| format!("Coordinate out of range: {value:?}"))
}

/// Parse one table row into a `(sample_id, feature)` pair.
fn parse_row(table: &Table<String>, row: usize) -> Result<(String, FeatureInterval), Report> {
    let sample_id = table.get("sample_id", row)?.to_string();
    let id = table.get("id", row)?.to_string();
    let feature_type = FeatureType::from(table.get("type", row)?.as_str());
    let start = parse_coordinate(table.get("start", row)?)?;
    let end = parse_coordinate(table.get("end", row)?)?;

    let strand = match table.get_header_index("strand") {
        Ok(_) => parse_strand(table.get("strand", row)?)?,
        Err(_) => None,
    };

    Ok((sample_id, FeatureInterval { id, feature_type, start, end, strand }))
}

/// Read a feature table and group the features by sample.
///
/// The delimiter is chosen from the file extension. Features keep the order
/// they appear in within each sample.
pub fn read_features<P>(path: &P) -> Result<BTreeMap<String, Vec<FeatureInterval>>, Report>
where
    P: AsRef<Path> + std::fmt::Debug,
{
    let table = Table::read(path, None)?;

    let missing: Vec<_> =
        REQUIRED_COLUMNS.into_iter().filter(|c| table.get_header_index(c).is_err()).collect();
    if !missing.is_empty() {
        return Err(eyre!("Feature table {path:?} is missing columns: {missing:?}"))
            .suggestion(format!("Required columns: {}", REQUIRED_COLUMNS.join(", ")));
    }

    let mut features: BTreeMap<String, Vec<FeatureInterval>> = BTreeMap::new();
    for row in 0..table.rows.len() {
        match parse_row(&table, row) {
            Ok((sample_id, feature)) => features.entry(sample_id).or_default().push(feature),
            // header is line 1
            Err(e) => warn!("Skipping line {} of {path:?}: {e}", row + 2),
        }
    }

    debug!(
        "Read {} features for {} samples from {path:?}",
        features.values().map(Vec::len).sum::<usize>(),
        features.len()
    );
    Ok(features)
}
