//! Sequence complexity metrics and a synthesis risk score.
//!
//! All metrics run on the upper-cased sequence. Symbols other than `A`, `C`,
//! `G`, `T` never form homopolymers or k-mers, but still count towards the
//! sequence length.

mod complexity;
mod gc;
mod hairpin;
mod homopolymer;
mod repeat;
mod risk;

pub use complexity::{linguistic_complexity, KMER_SIZE};
pub use gc::{gc_content, gc_extremes, GcExtremes, GcWindow, HIGH_GC, LOW_GC};
pub use hairpin::{find_hairpins, LOOP_LENGTHS, STEM_LENGTH};
pub use homopolymer::{find_homopolymers, Homopolymer, Homopolymers, MIN_HOMOPOLYMER_LENGTH};
pub use repeat::{find_tandem_repeats, TandemRepeat, TandemRepeats, MIN_REPEAT_COPIES, REPEAT_UNIT_LENGTHS};
pub use risk::{synthesis_risk, SynthesisRisk};

use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fmt::{Display, Formatter};

/// Size of the sliding window used by [`gc_extremes`].
pub const GC_WINDOW_SIZE: usize = 50;

// ----------------------------------------------------------------------------
// QC Params
// ----------------------------------------------------------------------------

/// Thresholds for [`score_sequence_with`].
///
/// The defaults reproduce [`score_sequence`]. Risk weights are not configurable.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct QcParams {
    /// Shortest run of one base reported as a homopolymer.
    pub homopolymer_min_length: usize,
    /// Shortest tandem repeat unit.
    pub repeat_min_unit: usize,
    /// Longest tandem repeat unit.
    pub repeat_max_unit: usize,
    /// Minimum consecutive copies of a unit.
    pub repeat_min_copies: usize,
    /// k-mer size for linguistic complexity.
    pub kmer_size: usize,
    /// Window size for GC extremes.
    pub gc_window_size: usize,
    /// Hairpin stem arm length.
    pub stem_length: usize,
    pub loop_min: usize,
    pub loop_max: usize,
}

impl Default for QcParams {
    fn default() -> Self {
        QcParams {
            homopolymer_min_length: MIN_HOMOPOLYMER_LENGTH,
            repeat_min_unit: *REPEAT_UNIT_LENGTHS.start(),
            repeat_max_unit: *REPEAT_UNIT_LENGTHS.end(),
            repeat_min_copies: MIN_REPEAT_COPIES,
            kmer_size: KMER_SIZE,
            gc_window_size: GC_WINDOW_SIZE,
            stem_length: STEM_LENGTH,
            loop_min: *LOOP_LENGTHS.start(),
            loop_max: *LOOP_LENGTHS.end(),
        }
    }
}

// ----------------------------------------------------------------------------
// Sequence QC Result
// ----------------------------------------------------------------------------

/// All complexity metrics of one sequence.
///
/// Field names match the columns of the downstream export schema.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SequenceQCResult {
    pub gc_content: f64,
    pub linguistic_complexity: f64,
    pub homopolymers: Homopolymers,
    pub tandem_repeats: TandemRepeats,
    pub gc_extremes: GcExtremes,
    pub hairpin_estimate: usize,
    pub synthesis_risk: f64,
    pub synthesis_risk_reasons: Vec<String>,
}

impl Display for SequenceQCResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        write!(f, "{json}")
    }
}

/// Score a sequence with the default [`QcParams`].
///
/// ## Examples
///
/// ```rust
/// use plasmid_core::score_sequence;
///
/// let qc = score_sequence("");
/// assert_eq!(qc.gc_content, 0.0);
/// assert_eq!(qc.homopolymers.max_length, 0);
/// assert_eq!(qc.synthesis_risk, 0.0);
/// assert!(qc.synthesis_risk_reasons.is_empty());
/// ```
///
/// A run of ten `G` is high GC and a long homopolymer.
///
/// ```rust
/// use plasmid_core::score_sequence;
///
/// let qc = score_sequence(&"g".repeat(10));
/// assert_eq!(qc.gc_content, 1.0);
/// assert_eq!(qc.homopolymers.positions[0].length, 10);
/// assert_eq!(qc.tandem_repeats.count, 0);
/// assert!((qc.synthesis_risk - 0.40).abs() < 1e-9);
/// assert_eq!(qc.synthesis_risk_reasons, ["High GC content (100.0%)", "Long homopolymer (10 bp)"]);
/// ```
pub fn score_sequence(sequence: &str) -> SequenceQCResult {
    score_sequence_with(sequence, &QcParams::default())
}

/// Score a sequence with custom [`QcParams`].
pub fn score_sequence_with(sequence: &str, params: &QcParams) -> SequenceQCResult {
    let sequence = sequence.to_ascii_uppercase();
    let bases = sequence.as_bytes();

    let gc_content = gc_content(bases);
    let homopolymers = find_homopolymers(bases, params.homopolymer_min_length);
    let tandem_repeats = find_tandem_repeats(
        bases,
        params.repeat_min_unit..=params.repeat_max_unit,
        params.repeat_min_copies,
    );
    let linguistic_complexity = linguistic_complexity(bases, params.kmer_size);
    let gc_extremes = gc_extremes(bases, params.gc_window_size);
    let hairpin_estimate = find_hairpins(bases, params.stem_length, params.loop_min..=params.loop_max);

    let risk = synthesis_risk(gc_content, &homopolymers, &tandem_repeats, &gc_extremes, hairpin_estimate);

    SequenceQCResult {
        gc_content,
        linguistic_complexity,
        homopolymers,
        tandem_repeats,
        gc_extremes,
        hairpin_estimate,
        synthesis_risk: risk.score,
        synthesis_risk_reasons: risk.reasons,
    }
}
