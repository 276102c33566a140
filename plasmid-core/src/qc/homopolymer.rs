use serde::{Deserialize, Serialize};

/// Shortest run of one base reported as a homopolymer.
pub const MIN_HOMOPOLYMER_LENGTH: usize = 5;
/// Maximum number of runs kept in [`Homopolymers::positions`].
pub const MAX_REPORTED_HOMOPOLYMERS: usize = 20;

/// A maximal run of one repeated base.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Homopolymer {
    pub start: usize,
    pub end: usize,
    pub base: char,
    pub length: usize,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Homopolymers {
    /// Length of the longest run, 0 if there are none.
    pub max_length: usize,
    pub count: usize,
    pub total_bases: usize,
    /// The first runs in scan order.
    pub positions: Vec<Homopolymer>,
}

/// Find maximal runs of a single `A`, `C`, `G` or `T` at least `min_length` long.
///
/// ```rust
/// use plasmid_core::qc::find_homopolymers;
///
/// let homopolymers = find_homopolymers(b"ACAAAAAAGTNNNNNNNCCCCC", 5);
/// assert_eq!(homopolymers.count, 2);
/// assert_eq!(homopolymers.max_length, 6);
/// assert_eq!(homopolymers.total_bases, 11);
/// assert_eq!(homopolymers.positions[0].base, 'A');
/// assert_eq!((homopolymers.positions[1].start, homopolymers.positions[1].end), (17, 22));
/// ```
pub fn find_homopolymers(sequence: &[u8], min_length: usize) -> Homopolymers {
    let mut runs = Vec::new();

    let mut i = 0;
    while i < sequence.len() {
        let base = sequence[i];
        if !matches!(base, b'A' | b'C' | b'G' | b'T') {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < sequence.len() && sequence[j] == base {
            j += 1;
        }

        let length = j - i;
        if length >= min_length {
            runs.push(Homopolymer { start: i, end: j, base: base as char, length });
        }
        i = j;
    }

    let max_length = runs.iter().map(|run| run.length).max().unwrap_or(0);
    let total_bases = runs.iter().map(|run| run.length).sum();
    let count = runs.len();
    runs.truncate(MAX_REPORTED_HOMOPOLYMERS);

    Homopolymers { max_length, count, total_bases, positions: runs }
}
