use itertools::Itertools;
use itertools::MinMaxResult;
use serde::{Deserialize, Serialize};

/// GC fraction above which a window is flagged as high GC.
pub const HIGH_GC: f64 = 0.70;
/// GC fraction below which a window is flagged as low GC.
pub const LOW_GC: f64 = 0.30;
/// Maximum number of example windows kept per category.
pub const MAX_REPORTED_WINDOWS: usize = 10;

/// Returns the fraction of `G` and `C` bases, counting every symbol in the denominator.
///
/// ```rust
/// use plasmid_core::qc::gc_content;
/// assert_eq!(gc_content(b"GGCCAATT"), 0.5);
/// assert_eq!(gc_content(b"GCNN"), 0.5);
/// assert_eq!(gc_content(b""), 0.0);
/// ```
pub fn gc_content(sequence: &[u8]) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let gc = sequence.iter().filter(|b| matches!(b, b'G' | b'C')).count();
    gc as f64 / sequence.len() as f64
}

/// A window with extreme GC content.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GcWindow {
    pub start: usize,
    pub end: usize,
    pub gc: f64,
}

/// Windows of extreme GC content, which tend to cause synthesis failures.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct GcExtremes {
    /// Number of half-overlapping windows with GC above [`HIGH_GC`].
    pub high_gc_regions: usize,
    /// Number of half-overlapping windows with GC below [`LOW_GC`].
    pub low_gc_regions: usize,
    /// Spread between the highest and lowest GC of the non-overlapping windows.
    pub gc_range: f64,
    pub high_gc_positions: Vec<GcWindow>,
    pub low_gc_positions: Vec<GcWindow>,
}

impl GcExtremes {
    pub fn count(&self) -> usize {
        self.high_gc_regions + self.low_gc_regions
    }
}

/// Scan `window_size` windows for extreme GC content.
///
/// Windows advance by half their size. A sequence shorter than one window has no extremes.
///
/// ```rust
/// use plasmid_core::qc::gc_extremes;
///
/// let sequence = format!("{}{}", "GC".repeat(50), "AT".repeat(50));
/// let extremes = gc_extremes(sequence.as_bytes(), 50);
/// assert_eq!(extremes.high_gc_regions, 3);
/// assert_eq!(extremes.low_gc_regions, 3);
/// assert_eq!(extremes.gc_range, 1.0);
/// ```
pub fn gc_extremes(sequence: &[u8], window_size: usize) -> GcExtremes {
    let mut extremes = GcExtremes::default();
    if window_size == 0 || sequence.len() < window_size {
        return extremes;
    }

    let step = (window_size / 2).max(1);
    let mut high_gc = Vec::new();
    let mut low_gc = Vec::new();

    for start in (0..=sequence.len() - window_size).step_by(step) {
        let end = start + window_size;
        let gc = gc_content(&sequence[start..end]);
        if gc > HIGH_GC {
            high_gc.push(GcWindow { start, end, gc });
        } else if gc < LOW_GC {
            low_gc.push(GcWindow { start, end, gc });
        }
    }

    // spread is measured on non-overlapping windows
    extremes.gc_range = match sequence.chunks_exact(window_size).map(gc_content).minmax_by(f64::total_cmp) {
        MinMaxResult::MinMax(min, max) => max - min,
        MinMaxResult::OneElement(_) | MinMaxResult::NoElements => 0.0,
    };

    extremes.high_gc_regions = high_gc.len();
    extremes.low_gc_regions = low_gc.len();
    high_gc.truncate(MAX_REPORTED_WINDOWS);
    low_gc.truncate(MAX_REPORTED_WINDOWS);
    extremes.high_gc_positions = high_gc;
    extremes.low_gc_positions = low_gc;

    extremes
}
