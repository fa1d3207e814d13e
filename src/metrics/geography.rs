//! Country production and author affiliation profiles, from the
//! `Authors with affiliations` column.

use crate::{AuthorSource, Entity, Record};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::hash::Hash;

/// Publications and citations credited to a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryProduction {
    pub country: Entity,
    /// Records with at least one author from the country
    pub publications: usize,
    /// Single-country publications: records whose authors are all from this country
    pub scp: usize,
    /// Multiple-country publications: records that also list another country
    pub mcp: usize,
    /// Citations shared equally among the distinct countries of each record
    pub citations: f64,
}

/// Production of every country, most productive first, ties by name.
///
/// Each record counts once for every distinct country among its authors, and its
/// citations are split evenly between those countries. A record with a single
/// country is an SCP for it, a record with several is an MCP for each.
pub fn country_production(records: &[Record]) -> Vec<CountryProduction> {
    let mut production: BTreeMap<Entity, CountryProduction> = BTreeMap::new();
    for record in records {
        let countries = record.countries();
        let share = record.cited_by as f64 / countries.len().max(1) as f64;
        let single_country = countries.len() == 1;
        for country in countries {
            let entry = production
                .entry(country.clone())
                .or_insert_with(|| CountryProduction {
                    country,
                    publications: 0,
                    scp: 0,
                    mcp: 0,
                    citations: 0.0,
                });
            entry.publications += 1;
            if single_country {
                entry.scp += 1;
            } else {
                entry.mcp += 1;
            }
            entry.citations += share;
        }
    }
    production
        .into_values()
        .sorted_by(|a, b| b.publications.cmp(&a.publications))
        .collect()
}

/// Re-orders country rows by citations, highest first, ties by name.
pub fn by_citations(mut rows: Vec<CountryProduction>) -> Vec<CountryProduction> {
    rows.sort_by(|a, b| {
        b.citations
            .total_cmp(&a.citations)
            .then_with(|| a.country.cmp(&b.country))
    });
    rows
}

/// An author's productivity together with their usual institution and country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorProfile {
    pub author: Entity,
    /// Entries of the author in the `Authors with affiliations` column
    pub publications: usize,
    /// Most frequent institution, ties by name
    pub institution: Entity,
    /// Most frequent country, ties by name
    pub country: Option<Entity>,
    /// `publications` as a percentage of all records
    pub contribution: f64,
}

/// Most frequent value, the smallest one on ties.
fn mode<T: Ord + Hash + Clone>(values: &[T]) -> Option<T> {
    values
        .iter()
        .counts()
        .into_iter()
        .max_by(|(a, count_a), (b, count_b)| count_a.cmp(count_b).then_with(|| b.cmp(a)))
        .map(|(value, _)| value.clone())
}

/// The `n` authors with the most entries in the `Authors with affiliations` column.
pub fn top_affiliated_authors(records: &[Record], n: usize) -> Vec<AuthorProfile> {
    let mut institutions: BTreeMap<Entity, Vec<Entity>> = BTreeMap::new();
    let mut countries: BTreeMap<Entity, Vec<Entity>> = BTreeMap::new();

    for author in records.iter().flat_map(Record::affiliated_authors) {
        institutions
            .entry(author.name.clone())
            .or_default()
            .push(author.institution);
        let seen = countries.entry(author.name).or_default();
        if let Some(country) = author.country {
            seen.push(country);
        }
    }

    institutions
        .into_iter()
        .sorted_by(|a, b| b.1.len().cmp(&a.1.len()))
        .take(n)
        .map(|(author, author_institutions)| {
            let publications = author_institutions.len();
            AuthorProfile {
                country: countries.get(&author).and_then(|seen| mode(seen)),
                institution: mode(&author_institutions).unwrap_or_default(),
                contribution: publications as f64 * 100.0 / records.len() as f64,
                publications,
                author,
            }
        })
        .collect()
}

/// Every affiliation listed on the records of each author.
///
/// Affiliations and authors are not aligned in the export, so each author of a
/// record is associated with all of that record's affiliations.
pub fn author_affiliations(records: &[Record], source: AuthorSource) -> BTreeMap<Entity, BTreeSet<Entity>> {
    let mut affiliations: BTreeMap<Entity, BTreeSet<Entity>> = BTreeMap::new();
    for record in records {
        let record_affiliations = record.affiliation_list();
        for author in record.author_list(source) {
            affiliations
                .entry(author)
                .or_default()
                .extend(record_affiliations.iter().cloned());
        }
    }
    affiliations
}
