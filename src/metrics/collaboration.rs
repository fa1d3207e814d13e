//! Collaboration measures over the number of authors per publication.
//!
//! All functions take one author count per record. Records without authors count
//! as publications but are never treated as sole-authored.

use itertools::Itertools;
use std::collections::BTreeMap;

/// Number of records with exactly `j` authors, for every `j >= 1` that occurs.
pub fn author_count_distribution(author_counts: &[usize]) -> BTreeMap<usize, usize> {
    author_counts
        .iter()
        .copied()
        .filter(|&count| count > 0)
        .counts()
        .into_iter()
        .collect()
}

/// Collaboration Index: mean number of authors per record. 0 without records.
pub fn collaboration_index(author_counts: &[usize]) -> f64 {
    if author_counts.is_empty() {
        return 0.0;
    }
    author_counts.iter().sum::<usize>() as f64 / author_counts.len() as f64
}

/// Collaboration Coefficient (Ajiferuke et al., 1988): `1 - Σ_j (f_j / j) / N`.
///
/// `f_j` is the number of records with exactly `j >= 1` authors and `N` is the
/// number of records, including those without authors. 0 without records.
///
/// # Examples
///
/// ```
/// use bibliostat::metrics::collaboration_coefficient;
///
/// let cc = collaboration_coefficient(&[1, 1, 2, 3]);
/// assert!((cc - 0.2917).abs() < 1e-4);
/// ```
pub fn collaboration_coefficient(author_counts: &[usize]) -> f64 {
    if author_counts.is_empty() {
        return 0.0;
    }
    let weighted: f64 = author_count_distribution(author_counts)
        .into_iter()
        .map(|(authors, records)| records as f64 / authors as f64)
        .sum();
    1.0 - weighted / author_counts.len() as f64
}

/// Degree of collaboration: share of records with two or more authors.
pub fn degree_of_collaboration(author_counts: &[usize]) -> f64 {
    if author_counts.is_empty() {
        return 0.0;
    }
    let multi = author_counts.iter().filter(|&&count| count >= 2).count();
    multi as f64 / author_counts.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn round3(value: f64) -> f64 {
        (value * 1000.0).round() / 1000.0
    }

    #[test]
    fn test_distribution_skips_zero_authors() {
        let distribution = author_count_distribution(&[1, 1, 2, 3, 0]);
        assert_eq!(distribution, BTreeMap::from([(1, 2), (2, 1), (3, 1)]));
    }

    #[test]
    fn test_collaboration_index() {
        assert_eq!(collaboration_index(&[1, 1, 2, 3]), 1.75);
        assert_eq!(collaboration_index(&[]), 0.0);
    }

    #[test]
    fn test_collaboration_coefficient() {
        assert_eq!(round3(collaboration_coefficient(&[1, 1, 2, 3])), 0.292);
        assert_eq!(collaboration_coefficient(&[1, 1, 1]), 0.0);
        assert_eq!(collaboration_coefficient(&[]), 0.0);
    }

    #[test]
    fn test_zero_author_records_count_in_denominator_only() {
        // Sum over j >= 1 is 2/1 + 1/2 + 1/3 with N = 5 instead of 4.
        let expected = 1.0 - (2.0 + 0.5 + 1.0 / 3.0) / 5.0;
        let cc = collaboration_coefficient(&[1, 1, 2, 3, 0]);
        assert!((cc - expected).abs() < 1e-12);
        assert_eq!(collaboration_index(&[1, 1, 2, 3, 0]), 7.0 / 5.0);
    }

    #[test]
    fn test_degree_of_collaboration() {
        assert_eq!(degree_of_collaboration(&[1, 2, 3, 0]), 0.5);
    }
}
