//! Per-entity aggregation: authors, journals, keywords, or anything else a record lists.

use super::indices::{g_index, h_index, total_citations};
use crate::{AuthorSource, Entity, Record};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Accumulated statistics of one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityStat {
    /// Number of records listing the entity
    pub publications: usize,
    /// Citation count of every such record, in record order
    pub citations: Vec<u64>,
    /// Ids of the records listing the entity
    pub records: BTreeSet<usize>,
}

impl EntityStat {
    fn add(&mut self, record: &Record) {
        if self.records.insert(record.id) {
            self.publications += 1;
            self.citations.push(record.cited_by);
        }
    }

    pub fn total_citations(&self) -> u64 {
        total_citations(&self.citations)
    }

    pub fn h_index(&self) -> usize {
        h_index(&self.citations)
    }

    pub fn g_index(&self) -> usize {
        g_index(&self.citations)
    }
}

/// Ordering used by [`EntityTable::ranked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Ranking {
    #[default]
    Publications,
    Citations,
    HIndex,
}

/// One line of a ranked entity table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRow {
    pub name: Entity,
    pub publications: usize,
    pub total_citations: u64,
    pub h_index: usize,
    pub g_index: usize,
}

/// Statistics of every distinct entity extracted from a record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityTable {
    stats: BTreeMap<Entity, EntityStat>,
}

impl EntityTable {
    /// Builds a table from the entities `extract` lists for each record.
    ///
    /// An entity listed several times by the same record counts once for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bibliostat::{Entity, Record, metrics::EntityTable};
    ///
    /// let records = vec![
    ///     Record { id: 0, cited_by: 4, source_title: Some("Computers & Education".into()), ..Default::default() },
    ///     Record { id: 1, cited_by: 1, source_title: Some("Computers & Education".into()), ..Default::default() },
    /// ];
    /// let journals = EntityTable::from_records(&records, |r| r.source_title.as_deref().map(Entity::from));
    /// assert_eq!(journals.get("Computers & Education").unwrap().total_citations(), 5);
    /// ```
    pub fn from_records<F, I>(records: &[Record], mut extract: F) -> Self
    where
        F: FnMut(&Record) -> I,
        I: IntoIterator<Item = Entity>,
    {
        let mut stats: BTreeMap<Entity, EntityStat> = BTreeMap::new();
        for record in records {
            for entity in extract(record) {
                stats.entry(entity).or_default().add(record);
            }
        }
        Self { stats }
    }

    /// Authors of the chosen column.
    pub fn authors(records: &[Record], source: AuthorSource) -> Self {
        Self::from_records(records, |record| record.author_list(source))
    }

    /// Journals / source titles.
    pub fn journals(records: &[Record]) -> Self {
        Self::from_records(records, |record| record.source_title.as_deref().map(Entity::from))
    }

    /// Lowercased author keywords.
    pub fn keywords(records: &[Record]) -> Self {
        Self::from_records(records, Record::keyword_list)
    }

    /// Document types such as "Article" or "Review".
    pub fn document_types(records: &[Record]) -> Self {
        Self::from_records(records, |record| record.document_type.as_deref().map(Entity::from))
    }

    pub fn get(&self, name: &str) -> Option<&EntityStat> {
        self.stats.get(name)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Entities in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&Entity, &EntityStat)> {
        self.stats.iter()
    }

    /// All rows, best first by `ranking`, ties broken by name.
    pub fn ranked(&self, ranking: Ranking) -> Vec<EntityRow> {
        let mut rows: Vec<EntityRow> = self
            .stats
            .iter()
            .map(|(name, stat)| EntityRow {
                name: name.clone(),
                publications: stat.publications,
                total_citations: stat.total_citations(),
                h_index: stat.h_index(),
                g_index: stat.g_index(),
            })
            .collect();

        // Rows come out of the map in name order; the sort is stable.
        match ranking {
            Ranking::Publications => rows.sort_by(|a, b| b.publications.cmp(&a.publications)),
            Ranking::Citations => rows.sort_by(|a, b| b.total_citations.cmp(&a.total_citations)),
            Ranking::HIndex => rows.sort_by(|a, b| b.h_index.cmp(&a.h_index)),
        }
        rows
    }

    /// The first `n` rows of [`EntityTable::ranked`].
    pub fn top(&self, ranking: Ranking, n: usize) -> Vec<EntityRow> {
        let mut rows = self.ranked(ranking);
        rows.truncate(n);
        rows
    }
}
