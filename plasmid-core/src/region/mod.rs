//! Partition a plasmid sequence into insert (cargo) and backbone (vector) regions.
//!
//! Inserts are inferred from the gaps between backbone features: any stretch of
//! at least [`MIN_GAP_SIZE`] bases that no origin, marker, promoter or terminator
//! covers. Coordinates are treated as linear. A gap that wraps around the end
//! of a circular plasmid is reported as two pieces.

#[cfg(test)]
mod tests;

use crate::feature::FeatureInterval;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fmt::{Display, Formatter};
use std::ops::Range;

/// Minimum number of uncovered bases for a gap to be called an insert.
pub const MIN_GAP_SIZE: usize = 300;
/// Confidence assigned to each individual gap-derived insert.
pub const INSERT_CONFIDENCE: f64 = 0.7;
/// Confidence of a partition backed by at least one backbone feature.
pub const PARTITION_CONFIDENCE: f64 = 0.8;

// ----------------------------------------------------------------------------
// Method
// ----------------------------------------------------------------------------

/// How the insert regions of a [`Partition`] were (or were not) detected.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Method {
    /// The sequence was empty.
    #[default]
    #[serde(rename = "empty")]
    Empty,
    /// No backbone features were supplied, so no inserts were guessed.
    #[serde(rename = "no_backbone")]
    NoBackbone,
    /// Inserts are the gaps between backbone features.
    #[serde(rename = "backbone_gap")]
    BackboneGap,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let method = match self {
            Method::Empty => "empty",
            Method::NoBackbone => "no_backbone",
            Method::BackboneGap => "backbone_gap",
        };
        write!(f, "{method}")
    }
}

// ----------------------------------------------------------------------------
// Regions
// ----------------------------------------------------------------------------

/// A putative insert: an uncovered stretch of at least `min_gap_size` bases.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InsertRegion {
    pub start: usize,
    pub end: usize,
    pub length: usize,
    pub insert_type: String,
    pub confidence: f64,
    pub features_included: Vec<String>,
}

impl InsertRegion {
    /// Create an insert region from a gap between backbone features.
    pub fn from_gap(gap: Range<usize>) -> Self {
        InsertRegion {
            start: gap.start,
            end: gap.end,
            length: gap.len(),
            insert_type: "gap_in_backbone".to_string(),
            confidence: INSERT_CONFIDENCE,
            features_included: vec!["unknown_cargo".to_string()],
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A stretch of vector backbone, the complement of the insert regions.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BackboneRegion {
    pub start: usize,
    pub end: usize,
    pub length: usize,
    #[serde(rename = "type")]
    pub region_type: String,
}

impl BackboneRegion {
    pub fn new(start: usize, end: usize) -> Self {
        BackboneRegion { start, end, length: end - start, region_type: "backbone".to_string() }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

// ----------------------------------------------------------------------------
// Partition Params
// ----------------------------------------------------------------------------

/// Tunable thresholds for [`partition_regions_with`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PartitionParams {
    /// Minimum length of an uncovered gap to be called an insert.
    pub min_gap_size: usize,
}

impl Default for PartitionParams {
    fn default() -> Self {
        PartitionParams { min_gap_size: MIN_GAP_SIZE }
    }
}

// ----------------------------------------------------------------------------
// Partition
// ----------------------------------------------------------------------------

/// Insert regions, backbone regions and the masked sequence of one plasmid.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Partition {
    pub insert_regions: Vec<InsertRegion>,
    pub backbone_regions: Vec<BackboneRegion>,
    /// The input sequence with each insert replaced by an `<INSERT_n>` token.
    pub masked_sequence: String,
    pub method: Method,
    pub confidence: f64,
}

impl Partition {
    pub fn has_identifiable_insert(&self) -> bool {
        !self.insert_regions.is_empty()
    }

    /// Returns the longest insert region, the first one if there is a tie.
    ///
    /// ```rust
    /// use plasmid_core::{partition_regions, FeatureInterval, FeatureType};
    ///
    /// let sequence = "A".repeat(2000);
    /// let features = vec![
    ///     FeatureInterval::new(FeatureType::Origin, 400, 500),
    ///     FeatureInterval::new(FeatureType::Marker, 1500, 1600),
    /// ];
    /// let partition = partition_regions(&sequence, &features);
    /// let main = partition.main_insert().unwrap();
    /// assert_eq!((main.start, main.end), (500, 1500));
    /// ```
    pub fn main_insert(&self) -> Option<&InsertRegion> {
        self.insert_regions.iter().rev().max_by_key(|region| region.length)
    }

    /// Returns the bases of the [main insert](Partition::main_insert), or an empty str.
    pub fn insert_sequence<'s>(&self, sequence: &'s str) -> &'s str {
        self.main_insert().and_then(|region| sequence.get(region.range())).unwrap_or_default()
    }

    pub fn insert_length(&self) -> usize {
        self.insert_regions.iter().map(|region| region.length).sum()
    }

    pub fn backbone_length(&self) -> usize {
        self.backbone_regions.iter().map(|region| region.length).sum()
    }
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Partition a sequence into insert and backbone regions using [`MIN_GAP_SIZE`].
///
/// ## Examples
///
/// A single origin covering the first 400 bases of a 1 kb plasmid leaves one insert.
///
/// ```rust
/// use plasmid_core::{partition_regions, FeatureInterval, FeatureType, region::Method};
///
/// let sequence = "ACGT".repeat(250);
/// let features = vec![FeatureInterval::new(FeatureType::Origin, 0, 400)];
/// let partition = partition_regions(&sequence, &features);
///
/// assert_eq!(partition.method, Method::BackboneGap);
/// assert_eq!(partition.insert_regions.len(), 1);
/// assert_eq!(partition.insert_regions[0].start, 400);
/// assert_eq!(partition.insert_regions[0].length, 600);
/// assert_eq!(partition.masked_sequence, format!("{}<INSERT_1>", &sequence[0..400]));
/// ```
///
/// Without backbone evidence, nothing is guessed.
///
/// ```rust
/// use plasmid_core::{partition_regions, FeatureInterval, FeatureType, region::Method};
///
/// let sequence = "ACGT".repeat(250);
/// let features = vec![FeatureInterval::new(FeatureType::Other, 0, 400)];
/// let partition = partition_regions(&sequence, &features);
///
/// assert_eq!(partition.method, Method::NoBackbone);
/// assert!(partition.insert_regions.is_empty());
/// assert_eq!(partition.confidence, 0.0);
/// assert_eq!(partition.masked_sequence, sequence);
/// ```
pub fn partition_regions(sequence: &str, features: &[FeatureInterval]) -> Partition {
    partition_regions_with(sequence, features, &PartitionParams::default())
}

/// Partition a sequence into insert and backbone regions with custom [`PartitionParams`].
pub fn partition_regions_with(
    sequence: &str,
    features: &[FeatureInterval],
    params: &PartitionParams,
) -> Partition {
    let sequence_length = sequence.len();
    let (insert_regions, confidence, method) =
        find_insert_regions(sequence_length, features, params.min_gap_size);
    let backbone_regions = backbone_regions(sequence_length, &insert_regions);
    let masked_sequence = mask_inserts(sequence, &insert_regions);

    Partition { insert_regions, backbone_regions, masked_sequence, method, confidence }
}

/// Find uncovered gaps of at least `min_gap_size` bases between backbone features.
///
/// Returns the insert regions sorted by start, the partition confidence, and the detection [`Method`].
///
/// ```rust
/// use plasmid_core::{FeatureInterval, FeatureType, region::{find_insert_regions, Method}};
///
/// let features = vec![
///     FeatureInterval::new(FeatureType::Promoter, 100, 200),
///     FeatureInterval::new(FeatureType::Terminator, 150, 300),
/// ];
/// let (inserts, confidence, method) = find_insert_regions(1000, &features, 300);
/// assert_eq!(inserts.len(), 1);
/// assert_eq!((inserts[0].start, inserts[0].end), (300, 1000));
/// assert_eq!(confidence, 0.8);
/// assert_eq!(method, Method::BackboneGap);
/// ```
pub fn find_insert_regions(
    sequence_length: usize,
    features: &[FeatureInterval],
    min_gap_size: usize,
) -> (Vec<InsertRegion>, f64, Method) {
    if sequence_length == 0 {
        return (Vec::new(), 0.0, Method::Empty);
    }

    // backbone intervals clipped to the sequence, sorted by start
    let covered = features
        .iter()
        .filter(|feature| feature.is_backbone())
        .filter_map(|feature| feature.clip(sequence_length))
        .sorted_by_key(|range| (range.start, range.end))
        .collect_vec();

    if covered.is_empty() {
        return (Vec::new(), 0.0, Method::NoBackbone);
    }

    // walk the merged coverage, every uncovered stretch is a gap
    let mut gaps = Vec::new();
    let mut cursor = 0;
    for range in covered {
        if range.start > cursor {
            gaps.push(cursor..range.start);
        }
        cursor = cursor.max(range.end);
    }
    if cursor < sequence_length {
        gaps.push(cursor..sequence_length);
    }

    let insert_regions = gaps
        .into_iter()
        .filter(|gap| gap.len() >= min_gap_size)
        .map(InsertRegion::from_gap)
        .collect_vec();

    (insert_regions, PARTITION_CONFIDENCE, Method::BackboneGap)
}

/// Returns the backbone regions, the complement of `insert_regions` over `[0, sequence_length)`.
///
/// ```rust
/// use plasmid_core::region::{backbone_regions, InsertRegion};
///
/// let inserts = vec![InsertRegion::from_gap(100..400), InsertRegion::from_gap(600..1000)];
/// let backbone = backbone_regions(1000, &inserts);
/// let ranges: Vec<_> = backbone.iter().map(|r| r.range()).collect();
/// assert_eq!(ranges, vec![0..100, 400..600]);
/// ```
pub fn backbone_regions(sequence_length: usize, insert_regions: &[InsertRegion]) -> Vec<BackboneRegion> {
    let mut backbone = Vec::new();
    let mut cursor = 0;

    for region in insert_regions.iter().sorted_by_key(|region| region.start) {
        let start = region.start.min(sequence_length);
        if start > cursor {
            backbone.push(BackboneRegion::new(cursor, start));
        }
        cursor = cursor.max(region.end.min(sequence_length));
    }
    if cursor < sequence_length {
        backbone.push(BackboneRegion::new(cursor, sequence_length));
    }

    backbone
}

/// Replace each insert region of `sequence` with an `<INSERT_n>` token.
///
/// Tokens are numbered from the last insert to the first, so the insert with
/// the highest start offset is `<INSERT_1>`.
///
/// ```rust
/// use plasmid_core::region::{mask_inserts, InsertRegion};
///
/// let sequence = "AAAACCCCGGGGTTTT";
/// let inserts = vec![InsertRegion::from_gap(4..8), InsertRegion::from_gap(12..16)];
/// assert_eq!(mask_inserts(sequence, &inserts), "AAAA<INSERT_2>GGGG<INSERT_1>");
/// assert_eq!(mask_inserts(sequence, &[]), sequence);
/// ```
pub fn mask_inserts(sequence: &str, insert_regions: &[InsertRegion]) -> String {
    if insert_regions.is_empty() {
        return sequence.to_string();
    }

    let bases = sequence.as_bytes();
    let num_regions = insert_regions.len();
    let mut masked: Vec<u8> = Vec::with_capacity(bases.len());
    let mut cursor = 0;

    for (i, region) in insert_regions.iter().sorted_by_key(|region| region.start).enumerate() {
        let start = region.start.clamp(cursor, bases.len());
        let end = region.end.clamp(start, bases.len());
        masked.extend_from_slice(&bases[cursor..start]);
        masked.extend_from_slice(format!("<INSERT_{}>", num_regions - i).as_bytes());
        cursor = end;
    }
    masked.extend_from_slice(&bases[cursor..]);

    String::from_utf8_lossy(&masked).into_owned()
}
