use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Unit lengths scanned for tandem repeats.
pub const REPEAT_UNIT_LENGTHS: RangeInclusive<usize> = 2..=10;
/// Minimum consecutive copies of a unit to call a tandem repeat.
pub const MIN_REPEAT_COPIES: usize = 3;
/// Maximum number of repeats kept in [`TandemRepeats::repeats`].
pub const MAX_REPORTED_REPEATS: usize = 20;

/// A short motif repeated back to back.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TandemRepeat {
    pub start: usize,
    pub end: usize,
    pub unit: String,
    pub unit_length: usize,
    pub copies: usize,
    pub total_length: usize,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TandemRepeats {
    pub count: usize,
    /// Bases covered by all repeats, summed over every unit length.
    pub total_bases: usize,
    /// `total_bases` divided by the sequence length.
    ///
    /// Repeats found at different unit lengths may overlap, so this can exceed 1.
    pub fraction: f64,
    /// Total length of the longest single repeat.
    pub longest: usize,
    pub repeats: Vec<TandemRepeat>,
}

/// Find tandem repeats for every unit length in `unit_lengths`.
///
/// Each unit length is scanned left to right. A unit repeated at least
/// `min_copies` times is recorded and the scan jumps past it. Units made of a
/// single base are skipped, those runs are homopolymers.
///
/// ```rust
/// use plasmid_core::qc::find_tandem_repeats;
///
/// let repeats = find_tandem_repeats(b"GGCACACACATT", 2..=10, 3);
/// assert_eq!(repeats.count, 1);
/// assert_eq!(repeats.repeats[0].unit, "CA");
/// assert_eq!(repeats.repeats[0].copies, 4);
/// assert_eq!((repeats.repeats[0].start, repeats.repeats[0].end), (2, 10));
/// assert_eq!(repeats.total_bases, 8);
/// ```
pub fn find_tandem_repeats(
    sequence: &[u8],
    unit_lengths: RangeInclusive<usize>,
    min_copies: usize,
) -> TandemRepeats {
    let mut repeats = Vec::new();

    for unit_length in unit_lengths.filter(|unit_length| *unit_length > 0) {
        let min_span = unit_length * min_copies.max(1);
        let mut i = 0;
        while i + min_span <= sequence.len() {
            let unit = &sequence[i..i + unit_length];
            if unit.iter().all(|base| *base == unit[0]) {
                i += 1;
                continue;
            }

            // count consecutive copies
            let mut copies = 1;
            let mut j = i + unit_length;
            while j + unit_length <= sequence.len() && &sequence[j..j + unit_length] == unit {
                copies += 1;
                j += unit_length;
            }

            if copies >= min_copies {
                repeats.push(TandemRepeat {
                    start: i,
                    end: j,
                    unit: String::from_utf8_lossy(unit).into_owned(),
                    unit_length,
                    copies,
                    total_length: copies * unit_length,
                });
                i = j;
            } else {
                i += 1;
            }
        }
    }

    let total_bases: usize = repeats.iter().map(|repeat| repeat.total_length).sum();
    let fraction = match sequence.is_empty() {
        true => 0.0,
        false => total_bases as f64 / sequence.len() as f64,
    };
    let longest = repeats.iter().map(|repeat| repeat.total_length).max().unwrap_or(0);
    let count = repeats.len();
    repeats.truncate(MAX_REPORTED_REPEATS);

    TandemRepeats { count, total_bases, fraction, longest, repeats }
}
