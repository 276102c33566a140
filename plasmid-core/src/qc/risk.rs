use crate::qc::{GcExtremes, Homopolymers, TandemRepeats};
use serde::{Deserialize, Serialize};

// Penalty weights. These are heuristic and kept fixed for compatibility with
// existing exports.
pub const GC_PENALTY: f64 = 0.15;
pub const LONG_HOMOPOLYMER_PENALTY: f64 = 0.25;
pub const MODERATE_HOMOPOLYMER_PENALTY: f64 = 0.10;
pub const HIGH_REPEAT_PENALTY: f64 = 0.20;
pub const MODERATE_REPEAT_PENALTY: f64 = 0.10;
pub const GC_EXTREME_PENALTY: f64 = 0.15;
pub const HAIRPIN_PENALTY: f64 = 0.15;

/// A heuristic estimate of how hard a sequence is to synthesize, with reasons.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SynthesisRisk {
    /// Sum of penalties, clamped to `[0, 1]`.
    pub score: f64,
    pub reasons: Vec<String>,
}

impl SynthesisRisk {
    fn penalize(&mut self, weight: f64, reason: String) {
        self.score += weight;
        self.reasons.push(reason);
    }
}

/// Combine the individual sequence metrics into a [`SynthesisRisk`].
///
/// Each category adds its penalty at most once, and tiered categories only add
/// the higher tier. Reasons follow the order GC content, homopolymers,
/// repeats, GC extremes, hairpins.
pub fn synthesis_risk(
    gc_content: f64,
    homopolymers: &Homopolymers,
    repeats: &TandemRepeats,
    gc_extremes: &GcExtremes,
    hairpins: usize,
) -> SynthesisRisk {
    let mut risk = SynthesisRisk::default();

    if gc_content > 0.65 {
        risk.penalize(GC_PENALTY, format!("High GC content ({})", percent(gc_content)));
    } else if gc_content < 0.35 {
        risk.penalize(GC_PENALTY, format!("Low GC content ({})", percent(gc_content)));
    }

    let max_length = homopolymers.max_length;
    if max_length >= 8 {
        risk.penalize(LONG_HOMOPOLYMER_PENALTY, format!("Long homopolymer ({max_length} bp)"));
    } else if max_length >= 6 {
        risk.penalize(MODERATE_HOMOPOLYMER_PENALTY, format!("Moderate homopolymer ({max_length} bp)"));
    }

    let fraction = repeats.fraction;
    if fraction > 0.10 {
        risk.penalize(HIGH_REPEAT_PENALTY, format!("High repeat content ({})", percent(fraction)));
    } else if fraction > 0.05 {
        risk.penalize(MODERATE_REPEAT_PENALTY, format!("Moderate repeat content ({})", percent(fraction)));
    }

    let extreme_count = gc_extremes.count();
    if extreme_count > 5 {
        risk.penalize(GC_EXTREME_PENALTY, format!("Many GC extreme regions ({extreme_count})"));
    }

    if hairpins > 10 {
        risk.penalize(HAIRPIN_PENALTY, format!("Many potential hairpins ({hairpins})"));
    }

    risk.score = risk.score.clamp(0.0, 1.0);
    risk
}

/// Format a fraction as a percentage with one decimal, ex. `0.6523` => `65.2%`.
fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}
