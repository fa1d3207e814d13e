//! Publication and citation metrics of a whole record set.

use super::collaboration::{collaboration_coefficient, collaboration_index, degree_of_collaboration};
use super::indices::{g_index, h_index, i_index, total_citations};
use crate::{AuthorSource, Record};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Summary sheet of publication-related and citation-related metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BibliometricSummary {
    /// TP: number of records
    pub total_publications: usize,
    /// NCA: distinct authors across all records
    pub contributing_authors: usize,
    /// SA: records with exactly one author
    pub sole_authored: usize,
    /// CA: records with two or more authors
    pub co_authored: usize,
    /// CI: mean authors per record
    pub collaboration_index: f64,
    /// CC: Collaboration Coefficient
    pub collaboration_coefficient: f64,
    /// DC: share of co-authored records
    pub degree_of_collaboration: f64,
    /// TC: citations of all records
    pub total_citations: u64,
    /// AC: citations per record
    pub average_citations: f64,
    /// NCP: records cited at least once
    pub cited_publications: usize,
    /// PCP: percentage of records cited at least once
    pub proportion_cited: f64,
    /// CCP: citations per cited record
    pub citations_per_cited_publication: f64,
    pub h_index: usize,
    pub g_index: usize,
    pub i10_index: usize,
    pub i100_index: usize,
    pub i200_index: usize,
}

fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}

impl BibliometricSummary {
    pub fn from_records(records: &[Record], source: AuthorSource) -> Self {
        let author_lists: Vec<_> = records.iter().map(|record| record.author_list(source)).collect();
        let author_counts: Vec<usize> = author_lists.iter().map(Vec::len).collect();
        let citations: Vec<u64> = records.iter().map(|record| record.cited_by).collect();

        let contributing_authors = author_lists.iter().flatten().collect::<BTreeSet<_>>().len();
        let total_citations = total_citations(&citations);
        let cited_publications = citations.iter().filter(|&&count| count > 0).count();
        let total_publications = records.len();

        Self {
            total_publications,
            contributing_authors,
            sole_authored: author_counts.iter().filter(|&&count| count == 1).count(),
            co_authored: author_counts.iter().filter(|&&count| count >= 2).count(),
            collaboration_index: collaboration_index(&author_counts),
            collaboration_coefficient: collaboration_coefficient(&author_counts),
            degree_of_collaboration: degree_of_collaboration(&author_counts),
            total_citations,
            average_citations: ratio(total_citations as f64, total_publications),
            cited_publications,
            proportion_cited: ratio(cited_publications as f64 * 100.0, total_publications),
            citations_per_cited_publication: ratio(total_citations as f64, cited_publications),
            h_index: h_index(&citations),
            g_index: g_index(&citations),
            i10_index: i_index(&citations, 10),
            i100_index: i_index(&citations, 100),
            i200_index: i_index(&citations, 200),
        }
    }
}

/// The `n` most cited records, most cited first. Ties keep input order.
pub fn most_cited(records: &[Record], n: usize) -> Vec<&Record> {
    let mut ranked: Vec<&Record> = records.iter().collect();
    ranked.sort_by(|a, b| b.cited_by.cmp(&a.cited_by));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: usize, authors: Option<&str>, cited_by: u64) -> Record {
        Record {
            id,
            authors: authors.map(String::from),
            cited_by,
            ..Default::default()
        }
    }

    #[test]
    fn test_summary() {
        let records = vec![
            record(0, Some("Smith, J."), 150),
            record(1, Some("Doe, A."), 12),
            record(2, Some("Smith, J.; Doe, A."), 0),
            record(3, Some("Smith, J.; Doe, A.; Roe, B."), 3),
            record(4, None, 5),
        ];
        let summary = BibliometricSummary::from_records(&records, AuthorSource::Authors);

        assert_eq!(summary.total_publications, 5);
        assert_eq!(summary.contributing_authors, 3);
        assert_eq!(summary.sole_authored, 2);
        assert_eq!(summary.co_authored, 2);
        assert_eq!(summary.collaboration_index, 7.0 / 5.0);
        assert_eq!(summary.degree_of_collaboration, 0.4);
        assert_eq!(summary.total_citations, 170);
        assert_eq!(summary.average_citations, 34.0);
        assert_eq!(summary.cited_publications, 4);
        assert_eq!(summary.proportion_cited, 80.0);
        assert_eq!(summary.citations_per_cited_publication, 42.5);
        assert_eq!(summary.h_index, 3);
        assert_eq!(summary.g_index, 5);
        assert_eq!(summary.i10_index, 2);
        assert_eq!(summary.i100_index, 1);
        assert_eq!(summary.i200_index, 0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = BibliometricSummary::from_records(&[], AuthorSource::Authors);
        assert_eq!(summary.total_publications, 0);
        assert_eq!(summary.average_citations, 0.0);
        assert_eq!(summary.citations_per_cited_publication, 0.0);
        assert_eq!(summary.collaboration_coefficient, 0.0);
    }

    #[test]
    fn test_huge_citation_counts_do_not_overflow() {
        let records: Vec<Record> = (0..3).map(|id| record(id, Some("Doe, A."), u64::MAX / 2)).collect();
        let summary = BibliometricSummary::from_records(&records, AuthorSource::Authors);
        assert_eq!(summary.total_citations, u64::MAX);
        assert_eq!(summary.h_index, 3);
    }

    #[test]
    fn test_most_cited() {
        let records = vec![
            record(0, None, 3),
            record(1, None, 9),
            record(2, None, 3),
            record(3, None, 1),
        ];
        let ids: Vec<usize> = most_cited(&records, 3).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 0, 2]);
    }
}
