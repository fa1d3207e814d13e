use bibliostat::metrics::{self, BibliometricSummary, EntityTable, Ranking};
use bibliostat::{AuthorSource, Entity, Field, Loader, LoaderConfig, TextSource, relate};
use pretty_assertions::assert_eq;
use std::io::Write;

const SCOPUS_EXPORT: &str = "\
\u{feff}Authors,Author full names,Title,Year,Source title,Cited by,Affiliations,Authors with affiliations,Author Keywords,References,Document Type
\"Smith, J.; Doe, A.\",\"Smith, John (1001); Doe, Ann (1002)\",Virtual reality in science education,2019,Computers & Education,40,\"Univ A, Madrid, Spain; Univ B, Beijing, China\",\"Smith, J., Univ A, Madrid, Spain; Doe, A., Univ B, Beijing, China\",Virtual Reality; Education,R1; R2; R3,Article
\"Doe, A.\",\"Doe, Ann (1002)\",Immersive labs,2019,Computers & Education,12,\"Univ B, Beijing, China\",\"Doe, A., Univ B, Beijing, China\",virtual reality; labs,R2; R3,Article
\"Roe, B.; Smith, J.; Doe, A.\",\"Roe, Bea (1003); Smith, John (1001); Doe, Ann (1002)\",Serious games and virtual reality,2021,Interactive Learning Environments,5,\"Univ C, Sevilla, Spain; Univ A, Madrid, Spain\",\"Roe, B., Univ C, Sevilla, Spain; Smith, J., Univ A, Madrid, Spain; Doe, A., Univ B, Beijing, China\",Games; Virtual reality,R3; R4,Review
,,Untitled editorial,2022,Computers & Education,0,,,,,Editorial
";

fn load() -> Vec<bibliostat::Record> {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SCOPUS_EXPORT.as_bytes()).unwrap();
    Loader::new().load_path(file.path()).unwrap()
}

fn e(name: &str) -> Entity {
    Entity::from(name)
}

#[test]
fn test_load_scopus_export() {
    let records = load();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].title.as_deref(), Some("Virtual reality in science education"));
    assert_eq!(records[2].year, Some(2021));
    assert_eq!(records[1].cited_by, 12);
    assert_eq!(records[3].authors, None);
    assert_eq!(
        records.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );
}

#[test]
fn test_summary_and_tables() {
    let records = load();
    let summary = BibliometricSummary::from_records(&records, AuthorSource::Authors);
    assert_eq!(summary.total_publications, 4);
    assert_eq!(summary.contributing_authors, 3);
    assert_eq!(summary.sole_authored, 1);
    assert_eq!(summary.co_authored, 2);
    assert_eq!(summary.collaboration_index, 1.5);
    assert_eq!(summary.total_citations, 57);
    assert_eq!(summary.cited_publications, 3);
    assert_eq!(summary.h_index, 3);
    assert_eq!(summary.i10_index, 2);

    let full_names = BibliometricSummary::from_records(&records, AuthorSource::FullNames);
    assert_eq!(full_names.contributing_authors, 3);

    let authors = EntityTable::authors(&records, AuthorSource::FullNames);
    let top = authors.top(Ranking::Publications, 1);
    assert_eq!(top[0].name, "Doe, Ann");
    assert_eq!(top[0].publications, 3);
    assert_eq!(top[0].total_citations, 57);

    let journals = EntityTable::journals(&records).ranked(Ranking::Publications);
    assert_eq!(journals[0].name, "Computers & Education");
    assert_eq!(journals[0].publications, 3);

    let keywords = EntityTable::keywords(&records);
    assert_eq!(keywords.get("virtual reality").map(|stat| stat.publications), Some(3));
}

#[test]
fn test_temporal_and_geography() {
    let records = load();
    let years = metrics::fill_gaps(metrics::annual_production(&records, Some(2021)));
    assert_eq!(
        years.iter().map(|row| (row.year, row.publications)).collect::<Vec<_>>(),
        vec![(2019, 2), (2020, 0), (2021, 1)]
    );
    assert_eq!(years[0].mean_citations, 26.0);

    let countries = metrics::country_production(&records);
    assert_eq!(countries[0].country, "China");
    assert_eq!(countries[0].publications, 3);
    let spain = countries.iter().find(|row| row.country == "Spain").unwrap();
    assert_eq!(spain.publications, 2);
    assert_eq!((spain.scp, spain.mcp), (0, 2));
    assert_eq!((countries[0].scp, countries[0].mcp), (1, 2));
    assert_eq!(spain.citations, 20.0 + 2.5);

    let profiles = metrics::top_affiliated_authors(&records, 1);
    assert_eq!(profiles[0].author, "Doe, A.");
    assert_eq!(profiles[0].institution, "Univ B");
    assert_eq!(profiles[0].contribution, 75.0);
}

#[test]
fn test_networks() {
    let records = load();

    let authors = relate::co_authorship(&records, AuthorSource::Authors);
    assert_eq!(authors.weight(&e("Doe, A."), &e("Smith, J.")), 2);
    assert_eq!(authors.weight(&e("Smith, J."), &e("Doe, A.")), 2);
    assert_eq!(authors.strength()[&e("Doe, A.")], 3);

    let json = serde_json::to_value(&authors).unwrap();
    assert_eq!(json[0]["source"], "Doe, A.");
    assert_eq!(json[0]["target"], "Roe, B.");
    assert_eq!(json[0]["weight"], 1);

    let citations = relate::co_citation(&records);
    assert_eq!(citations.weight(&e("R2"), &e("R3")), 2);
    assert_eq!(citations.top(1)[0].weight, 2);

    let coupling = relate::bibliographic_coupling(&records);
    assert_eq!(coupling.weight(&0, &1), 2);
    assert_eq!(coupling.weight(&0, &2), 1);
    assert_eq!(coupling.weight(&0, &3), 0);

    let words = relate::co_word(&records, TextSource::Title);
    assert_eq!(words.weight(&e("virtual"), &e("reality")), 2);

    let matrix = relate::keyword_matrix(&records, 2);
    assert_eq!(matrix.labels[0], "virtual reality");
    assert_eq!(matrix.cells[0][0], 3);
}

#[test]
fn test_semicolon_export_with_custom_columns() {
    let mut config = LoaderConfig::new();
    config
        .set_header_mapping(Field::Authors, vec!["AU".to_string()])
        .set_header_mapping(Field::CitedBy, vec!["TC".to_string()]);
    let loader = Loader::new().with_config(config);

    let records = loader.load_bytes(b"AU;TC\nSmith J., Doe A.;7\nRoe B.;1\n").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].author_count(AuthorSource::Authors), 2);
    assert_eq!(records[0].cited_by, 7);
}
