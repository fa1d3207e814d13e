//! Citation indices over a multiset of citation counts.

use itertools::Itertools;

fn sorted_descending(citations: &[u64]) -> Vec<u64> {
    citations.iter().copied().sorted_unstable_by(|a, b| b.cmp(a)).collect()
}

/// Sum of citation counts, saturating at `u64::MAX`.
pub(crate) fn total_citations(citations: &[u64]) -> u64 {
    citations.iter().fold(0, |sum, &count| sum.saturating_add(count))
}

/// Largest `h` such that `h` values are at least `h`.
///
/// # Examples
///
/// ```
/// use bibliostat::metrics::h_index;
///
/// assert_eq!(h_index(&[10, 8, 5, 4, 3]), 4);
/// assert_eq!(h_index(&[]), 0);
/// ```
pub fn h_index(citations: &[u64]) -> usize {
    sorted_descending(citations)
        .iter()
        .enumerate()
        .take_while(|&(i, &count)| count >= i as u64 + 1)
        .count()
}

/// Largest `g` such that the `g` most cited values sum to at least `g²`.
///
/// The scan stops at the first rank whose cumulative sum falls short, so `g` never
/// exceeds the number of values.
pub fn g_index(citations: &[u64]) -> usize {
    let mut cumulative: u64 = 0;
    let mut g = 0;
    for (i, count) in sorted_descending(citations).into_iter().enumerate() {
        cumulative = cumulative.saturating_add(count);
        let rank = i as u64 + 1;
        if cumulative < rank.saturating_mul(rank) {
            break;
        }
        g = i + 1;
    }
    g
}

/// Number of values that are at least `k` (i10 for `k = 10`, i100 for `k = 100`, ...).
pub fn i_index(citations: &[u64], k: u64) -> usize {
    citations.iter().filter(|&&count| count >= k).count()
}
