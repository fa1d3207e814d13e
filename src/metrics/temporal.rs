//! Production and citations per publication year.

use crate::{Entity, Record};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Publications and citations of one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    pub year: i32,
    pub publications: usize,
    pub total_citations: u64,
    /// Mean citations per publication of the year, 0 for an empty year
    pub mean_citations: f64,
}

impl YearRow {
    fn empty(year: i32) -> Self {
        Self {
            year,
            publications: 0,
            total_citations: 0,
            mean_citations: 0.0,
        }
    }
}

fn dated(records: &[Record], until: Option<i32>) -> impl Iterator<Item = (i32, &Record)> {
    records
        .iter()
        .filter_map(|record| record.year.map(|year| (year, record)))
        .filter(move |(year, _)| until.is_none_or(|last| *year <= last))
}

/// Annual production in year order. Records without a year are skipped, as are
/// records after `until` when it is given.
pub fn annual_production(records: &[Record], until: Option<i32>) -> Vec<YearRow> {
    let mut rows: BTreeMap<i32, YearRow> = BTreeMap::new();
    for (year, record) in dated(records, until) {
        let row = rows.entry(year).or_insert_with(|| YearRow::empty(year));
        row.publications += 1;
        row.total_citations = row.total_citations.saturating_add(record.cited_by);
    }
    rows.into_values()
        .map(|mut row| {
            row.mean_citations = row.total_citations as f64 / row.publications as f64;
            row
        })
        .collect()
}

/// Inserts empty rows for the years missing between the first and last row.
pub fn fill_gaps(rows: Vec<YearRow>) -> Vec<YearRow> {
    let (Some(first), Some(last)) = (rows.first().map(|r| r.year), rows.last().map(|r| r.year)) else {
        return rows;
    };
    let mut by_year: BTreeMap<i32, YearRow> = rows.into_iter().map(|row| (row.year, row)).collect();
    (first..=last)
        .map(|year| by_year.remove(&year).unwrap_or_else(|| YearRow::empty(year)))
        .collect()
}

/// The `n` most productive journals of every year, most productive first, ties by name.
pub fn top_journals_per_year(
    records: &[Record],
    n: usize,
    until: Option<i32>,
) -> BTreeMap<i32, Vec<(Entity, usize)>> {
    let mut counts: BTreeMap<i32, BTreeMap<Entity, usize>> = BTreeMap::new();
    for (year, record) in dated(records, until) {
        if let Some(journal) = record.source_title.as_deref() {
            *counts.entry(year).or_default().entry(Entity::from(journal)).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(year, journals)| {
            let top = journals
                .into_iter()
                .sorted_by(|a, b| b.1.cmp(&a.1))
                .take(n)
                .collect();
            (year, top)
        })
        .collect()
}
