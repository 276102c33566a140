use std::ops::RangeInclusive;

/// Length of each arm of a hairpin stem.
pub const STEM_LENGTH: usize = 6;
/// Loop lengths tried between the two stem arms.
pub const LOOP_LENGTHS: RangeInclusive<usize> = 3..=8;

/// Complement of a base. Anything other than `A`, `C`, `G`, `T` pairs with `N`.
fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        _ => b'N',
    }
}

/// Estimate the number of hairpins from short inverted repeats.
///
/// For each start position, the stem is compared against the reverse
/// complement of the bases following each candidate loop. A position counts at
/// most once.
///
/// ```rust
/// use plasmid_core::qc::find_hairpins;
///
/// // GGATCC-TTTT-GGATCC, the stem is its own reverse complement
/// let sequence = b"GGATCCTTTTGGATCCAAAAAAA";
/// assert_eq!(find_hairpins(sequence, 6, 3..=8), 1);
/// assert_eq!(find_hairpins(b"ACGT", 6, 3..=8), 0);
/// // runs of N pair with themselves
/// assert_eq!(find_hairpins(&[b'N'; 40], 6, 3..=8), 25);
/// ```
pub fn find_hairpins(sequence: &[u8], stem_length: usize, loop_lengths: RangeInclusive<usize>) -> usize {
    let min_loop = *loop_lengths.start();
    let num_starts = sequence.len().saturating_sub(stem_length * 2 + min_loop);

    (0..num_starts)
        .filter(|&i| {
            let stem = &sequence[i..i + stem_length];
            loop_lengths
                .clone()
                .map(|loop_length| i + stem_length + loop_length)
                .take_while(|j| j + stem_length <= sequence.len())
                .any(|j| {
                    let arm = &sequence[j..j + stem_length];
                    arm.iter().zip(stem.iter().rev()).all(|(a, s)| *a == complement(*s))
                })
        })
        .count()
}
