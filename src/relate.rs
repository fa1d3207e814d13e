//! Pairwise relations between entities that appear in the same record.
//!
//! Every network is a [`CooccurrenceMap`] built from one normalized entity list
//! per record. Bibliographic coupling inverts the relation: records are the
//! entities and each reference lists the records citing it.
//!
//! # Example
//!
//! ```
//! use bibliostat::{Record, relate};
//!
//! let records = vec![
//!     Record { id: 0, references: Some("Ref A; Ref B".into()), ..Default::default() },
//!     Record { id: 1, references: Some("Ref A; Ref B; Ref C".into()), ..Default::default() },
//! ];
//! assert_eq!(relate::co_citation(&records).weight(&"Ref A".into(), &"Ref B".into()), 2);
//! assert_eq!(relate::bibliographic_coupling(&records).weight(&0, &1), 2);
//! ```

mod cooccurrence;
mod matrix;

pub use cooccurrence::{CooccurrenceMap, CooccurrencePair};
pub use matrix::CooccurrenceMatrix;

use crate::{AuthorSource, Entity, Record, TextSource};
use std::collections::BTreeMap;

/// Authors appearing on the same record.
pub fn co_authorship(records: &[Record], source: AuthorSource) -> CooccurrenceMap<Entity> {
    CooccurrenceMap::from_lists(records.iter().map(|record| record.author_list(source)))
}

/// References cited together by the same record.
pub fn co_citation(records: &[Record]) -> CooccurrenceMap<Entity> {
    CooccurrenceMap::from_lists(records.iter().map(Record::reference_list))
}

/// Lowercase words appearing in the same title or abstract.
pub fn co_word(records: &[Record], source: TextSource) -> CooccurrenceMap<Entity> {
    CooccurrenceMap::from_lists(records.iter().map(|record| record.words(source)))
}

/// Author keywords assigned to the same record.
pub fn keyword_cooccurrence(records: &[Record]) -> CooccurrenceMap<Entity> {
    CooccurrenceMap::from_lists(records.iter().map(Record::keyword_list))
}

/// Record pairs weighted by the number of references they share, keyed by record id.
pub fn bibliographic_coupling(records: &[Record]) -> CooccurrenceMap<usize> {
    let mut citing: BTreeMap<Entity, Vec<usize>> = BTreeMap::new();
    for record in records {
        for reference in record.reference_list() {
            citing.entry(reference).or_default().push(record.id);
        }
    }
    log::debug!("Coupling {} records through {} distinct references", records.len(), citing.len());
    CooccurrenceMap::from_lists(citing.into_values())
}

/// Co-occurrence matrix of the `n` most used author keywords.
pub fn keyword_matrix(records: &[Record], n: usize) -> CooccurrenceMatrix<Entity> {
    CooccurrenceMatrix::top_n(records.iter().map(Record::keyword_list), n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Record> {
        vec![
            Record {
                id: 0,
                title: Some("Virtual reality for education".to_string()),
                authors: Some("Smith, J.; Doe, A.".to_string()),
                references: Some("R1; R2; R3".to_string()),
                author_keywords: Some("VR; Education".to_string()),
                ..Default::default()
            },
            Record {
                id: 1,
                title: Some("Virtual labs".to_string()),
                authors: Some("Doe, A.; Smith, J.; Roe, B.".to_string()),
                references: Some("R2; R3; R2".to_string()),
                author_keywords: Some("vr; labs".to_string()),
                ..Default::default()
            },
            Record {
                id: 2,
                title: None,
                authors: Some("Roe, B.".to_string()),
                references: Some("R4".to_string()),
                author_keywords: Some("education".to_string()),
                ..Default::default()
            },
        ]
    }

    fn e(name: &str) -> Entity {
        Entity::from(name)
    }

    #[test]
    fn test_co_authorship() {
        let network = co_authorship(&sample(), AuthorSource::Authors);
        assert_eq!(network.weight(&e("Smith, J."), &e("Doe, A.")), 2);
        assert_eq!(network.weight(&e("Roe, B."), &e("Doe, A.")), 1);
        assert_eq!(network.len(), 3);
    }

    #[test]
    fn test_co_citation_and_coupling() {
        let records = sample();
        let network = co_citation(&records);
        assert_eq!(network.weight(&e("R2"), &e("R3")), 2);
        assert_eq!(network.weight(&e("R1"), &e("R2")), 1);
        assert_eq!(network.weight(&e("R4"), &e("R1")), 0);

        let coupling = bibliographic_coupling(&records);
        assert_eq!(coupling.weight(&0, &1), 2);
        assert_eq!(coupling.weight(&1, &0), 2);
        assert_eq!(coupling.weight(&0, &2), 0);
        assert_eq!(coupling.len(), 1);
    }

    #[test]
    fn test_co_word_and_keywords() {
        let records = sample();
        let words = co_word(&records, TextSource::Title);
        assert_eq!(words.weight(&e("virtual"), &e("reality")), 1);
        assert_eq!(words.weight(&e("virtual"), &e("labs")), 1);
        assert!(co_word(&records, TextSource::Abstract).is_empty());

        let keywords = keyword_cooccurrence(&records);
        assert_eq!(keywords.weight(&e("vr"), &e("education")), 1);
        assert_eq!(keywords.weight(&e("vr"), &e("labs")), 1);

        let matrix = keyword_matrix(&records, 2);
        assert_eq!(matrix.labels, vec![e("education"), e("vr")]);
        assert_eq!(matrix.cells, vec![vec![2, 1], vec![1, 2]]);
    }
}
