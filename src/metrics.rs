//! Aggregate indicators over a record set.
//!
//! Every function here is a pure function of the records it is given: citation
//! indices ([`h_index`], [`g_index`], [`i_index`]), collaboration measures,
//! per-entity tables, annual and country production, and the summary sheet.
//!
//! # Example
//!
//! ```
//! use bibliostat::metrics::{g_index, h_index, collaboration_coefficient};
//!
//! let citations = [10, 8, 5, 4, 3];
//! assert_eq!(h_index(&citations), 4);
//! assert_eq!(g_index(&citations), 5);
//!
//! let cc = collaboration_coefficient(&[1, 1, 2, 3]);
//! assert_eq!((cc * 1000.0).round() / 1000.0, 0.292);
//! ```

mod collaboration;
mod entity;
mod geography;
mod indices;
mod summary;
mod temporal;

pub use collaboration::{
    author_count_distribution, collaboration_coefficient, collaboration_index, degree_of_collaboration,
};
pub use entity::{EntityRow, EntityStat, EntityTable, Ranking};
pub use geography::{
    AuthorProfile, CountryProduction, author_affiliations, by_citations, country_production,
    top_affiliated_authors,
};
pub use indices::{g_index, h_index, i_index};
pub use summary::{BibliometricSummary, most_cited};
pub use temporal::{YearRow, annual_production, fill_gaps, top_journals_per_year};
