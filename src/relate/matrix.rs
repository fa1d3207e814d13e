use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::hash::Hash;

/// Dense symmetric co-occurrence matrix over the most frequent entities.
///
/// Cell `(i, j)` counts the records listing both `labels[i]` and `labels[j]`;
/// the diagonal counts the records listing `labels[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooccurrenceMatrix<K> {
    pub labels: Vec<K>,
    pub cells: Vec<Vec<usize>>,
}

impl<K: Ord + Hash + Clone> CooccurrenceMatrix<K> {
    /// Matrix of the `n` entities listed by the most records, ties in entity order.
    pub fn top_n<I, L>(lists: I, n: usize) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = K>,
    {
        let sets: Vec<BTreeSet<K>> = lists.into_iter().map(|list| list.into_iter().collect()).collect();

        let labels: Vec<K> = sets
            .iter()
            .flatten()
            .counts()
            .into_iter()
            .sorted_by(|(a, count_a), (b, count_b)| count_b.cmp(count_a).then_with(|| a.cmp(b)))
            .take(n)
            .map(|(label, _)| label.clone())
            .collect();

        let mut cells = vec![vec![0; labels.len()]; labels.len()];
        for set in &sets {
            let present: Vec<usize> = labels
                .iter()
                .enumerate()
                .filter(|(_, label)| set.contains(*label))
                .map(|(i, _)| i)
                .collect();
            for &i in &present {
                for &j in &present {
                    cells[i][j] += 1;
                }
            }
        }

        Self { labels, cells }
    }

    /// Cell of the two labels, `None` if either is not in the matrix.
    pub fn get(&self, a: &K, b: &K) -> Option<usize> {
        let i = self.labels.iter().position(|label| label == a)?;
        let j = self.labels.iter().position(|label| label == b)?;
        Some(self.cells[i][j])
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_top_n_matrix() {
        let lists = vec![
            vec!["vr", "education", "vr"],
            vec!["vr", "ar"],
            vec!["education", "ar", "vr"],
            vec!["games"],
        ];
        let matrix = CooccurrenceMatrix::top_n(lists, 3);
        assert_eq!(matrix.labels, vec!["vr", "ar", "education"]);
        assert_eq!(
            matrix.cells,
            vec![vec![3, 2, 2], vec![2, 2, 1], vec![2, 1, 2]]
        );
        assert_eq!(matrix.get(&"ar", &"education"), Some(1));
        assert_eq!(matrix.get(&"games", &"vr"), None);
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let matrix = CooccurrenceMatrix::top_n([vec![1, 2, 3], vec![2, 3], vec![3, 4]], 10);
        assert_eq!(matrix.len(), 4);
        for i in 0..matrix.len() {
            for j in 0..matrix.len() {
                assert_eq!(matrix.cells[i][j], matrix.cells[j][i]);
            }
        }
    }

    #[test]
    fn test_empty_matrix() {
        let matrix: CooccurrenceMatrix<&str> = CooccurrenceMatrix::top_n(Vec::<Vec<&str>>::new(), 5);
        assert!(matrix.is_empty());
        assert!(matrix.cells.is_empty());
    }
}
