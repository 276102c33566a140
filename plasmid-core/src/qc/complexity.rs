use std::collections::BTreeSet;

/// Default k-mer size for [`linguistic_complexity`].
pub const KMER_SIZE: usize = 3;

/// Ratio of distinct `k`-mers observed to the number possible.
///
/// Only k-mers made entirely of `A`, `C`, `G`, `T` are counted. The number
/// possible is `min(4^k, length - k + 1)`.
///
/// ```rust
/// use plasmid_core::qc::linguistic_complexity;
///
/// assert_eq!(linguistic_complexity(b"AAAAAA", 3), 0.25);
/// assert_eq!(linguistic_complexity(b"ACGTAC", 3), 1.0);
/// assert_eq!(linguistic_complexity(b"AC", 3), 0.0);
/// ```
pub fn linguistic_complexity(sequence: &[u8], k: usize) -> f64 {
    if k == 0 || sequence.len() < k {
        return 0.0;
    }

    let observed = sequence
        .windows(k)
        .filter(|kmer| kmer.iter().all(|base| matches!(base, b'A' | b'C' | b'G' | b'T')))
        .collect::<BTreeSet<_>>()
        .len();

    let windows = sequence.len() - k + 1;
    let possible = 4_usize.checked_pow(k as u32).map_or(windows, |kmers| kmers.min(windows));

    observed as f64 / possible as f64
}
