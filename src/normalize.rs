//! Splitting of multi-valued cells into token lists.
//!
//! Export cells such as author lists, references or keywords hold several values
//! joined by a separator. Everything here is deterministic and tolerant: an absent
//! or unusable cell yields an empty list instead of an error.

use crate::regex::Regex;
use crate::{BibliometricError, Entity, Result};
use compact_str::{CompactString, ToCompactString};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static PARENTHETICAL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());

static LEADING_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\s*").unwrap());

/// How the values of a cell are separated.
#[derive(Debug, Clone)]
pub enum Separator {
    /// `;`, used by current Scopus exports for authors, references and keywords
    Semicolon,
    /// `, `, used by older exports for author lists
    CommaSpace,
    /// Any other separator
    Pattern(Regex),
}

impl Separator {
    /// Raw pieces of `raw`, untrimmed and possibly empty.
    pub fn split<'a>(&self, raw: &'a str) -> Vec<&'a str> {
        match self {
            Separator::Semicolon => raw.split(';').collect(),
            Separator::CommaSpace => raw.split(", ").collect(),
            Separator::Pattern(regex) => regex.split(raw).collect(),
        }
    }
}

/// Trimmed, non-empty tokens of `raw`, in input order.
pub fn split_field(raw: Option<&str>, separator: &Separator) -> Vec<Entity> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    separator
        .split(raw)
        .into_iter()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(CompactString::from)
        .collect()
}

/// Like [`split_field`], but reports a cell with no usable value.
///
/// # Errors
///
/// Returns [`BibliometricError::MalformedField`] when the cell is absent or holds
/// only separators and whitespace.
pub fn try_split_field(raw: Option<&str>, field: &str, separator: &Separator) -> Result<Vec<Entity>> {
    let tokens = split_field(raw, separator);
    if tokens.is_empty() {
        return Err(BibliometricError::MalformedField {
            field: field.to_string(),
            message: match raw {
                None => "value is missing".to_string(),
                Some(_) => "no values between separators".to_string(),
            },
        });
    }
    Ok(tokens)
}

/// Removes parenthetical suffixes (author IDs, affiliation numbers) and leading
/// sequence numbers from an author name.
pub fn clean_author_name(name: &str) -> Entity {
    let without_ids = PARENTHETICAL_REGEX.replace_all(name, "");
    LEADING_NUMBER_REGEX
        .replace(without_ids.trim(), "")
        .trim()
        .to_compact_string()
}

/// Picks the separator of an `Authors` cell.
///
/// Cells containing `;` are semicolon separated. Otherwise the cell is treated as
/// the older `Surname I., Surname I.` format only if every `, ` piece looks like
/// a surname followed by initials; a lone `Surname, I.` stays one name.
pub fn author_separator(raw: &str) -> Separator {
    if raw.contains(';') {
        return Separator::Semicolon;
    }
    let pieces: Vec<&str> = raw.split(", ").map(str::trim).collect();
    if pieces.len() > 1 && pieces.iter().all(|piece| piece.contains(char::is_whitespace)) {
        Separator::CommaSpace
    } else {
        Separator::Semicolon
    }
}

/// Author names of a cell, cleaned with [`clean_author_name`]. Not deduplicated.
pub fn split_authors(raw: Option<&str>, separator: &Separator) -> Vec<Entity> {
    split_field(raw, separator)
        .iter()
        .map(|name| clean_author_name(name))
        .filter(|name| !name.is_empty())
        .collect()
}

/// `;` separated keywords, lowercased.
pub fn normalize_keywords(raw: Option<&str>) -> Vec<Entity> {
    split_field(raw, &Separator::Semicolon)
        .into_iter()
        .map(|keyword| keyword.to_lowercase().to_compact_string())
        .collect()
}

/// Distinct lowercase words of `text`, sorted.
///
/// A word is a run of Unicode letters, digits or `_`, whichever regex backend is enabled.
pub fn title_words(text: &str) -> Vec<Entity> {
    let lower = text.to_lowercase();
    lower
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty())
        .map(CompactString::from)
        .sorted()
        .dedup()
        .collect()
}

/// An author as listed in the `Authors with affiliations` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliatedAuthor {
    pub name: Entity,
    pub institution: Entity,
    pub country: Option<Entity>,
}

/// Whether `c` can start a new author entry.
fn starts_entry(c: char) -> bool {
    c.is_uppercase() || ('\u{C0}'..='\u{FF}').contains(&c)
}

/// Splits an `Authors with affiliations` cell into per-author entries.
///
/// Entries are separated by `;` followed by an uppercase letter. A `;` inside an
/// affiliation (followed by anything else) stays part of the entry.
fn split_entries(raw: &str) -> Vec<String> {
    let mut entries: Vec<String> = Vec::new();
    for (i, piece) in raw.split(';').enumerate() {
        let trimmed = piece.trim_start();
        match entries.last_mut() {
            Some(current) if i > 0 && !trimmed.chars().next().is_some_and(starts_entry) => {
                current.push(';');
                current.push_str(piece);
            }
            _ => entries.push(trimmed.to_string()),
        }
    }
    entries
}

/// Whether `part` is a block of initials such as `J.`, `J.A.` or `M.-L.`.
fn is_initials(part: &str) -> bool {
    !part.is_empty()
        && part.len() <= 10
        && part.contains('.')
        && part
            .chars()
            .all(|c| c.is_uppercase() || matches!(c, '.' | '-' | ' '))
}

fn is_place_name(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
}

fn is_postal_code(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// Country of an entry: a trailing segment made of letters only, possibly
/// followed by a numeric postal code, or else a bracketed name.
pub fn country_of(entry: &str) -> Option<Entity> {
    if entry.contains(',') {
        let segments: Vec<&str> = entry.rsplit(',').map(str::trim).take(2).collect();
        let last = match segments.as_slice() {
            [code, previous] if is_postal_code(code) => *previous,
            [last, ..] => *last,
            [] => "",
        };
        if is_place_name(last) {
            return Some(last.to_compact_string());
        }
    }

    let start = entry.find('[')?;
    let end = start + entry[start..].find(']')?;
    let bracketed = entry[start + 1..end].trim();
    is_place_name(bracketed).then(|| bracketed.to_compact_string())
}

fn parse_affiliated_author(entry: &str) -> Option<AffiliatedAuthor> {
    let parts: Vec<&str> = entry.split(',').map(str::trim).collect();
    if parts.len() < 2 {
        return None;
    }

    // "Surname, I., Institution, ..." keeps the initials with the name.
    let (name, rest) = if parts.len() > 2 && is_initials(parts[1]) {
        (format!("{}, {}", parts[0], parts[1]), &parts[2..])
    } else {
        (parts[0].to_string(), &parts[1..])
    };

    let name = clean_author_name(&name);
    let institution = remove_brackets(rest[0]);
    let institution = institution.split('(').next().unwrap_or_default().trim();

    if name.is_empty() || institution.is_empty() {
        return None;
    }

    Some(AffiliatedAuthor {
        name,
        institution: institution.to_compact_string(),
        country: country_of(entry),
    })
}

/// Removes every `[...]` group.
fn remove_brackets(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '[' => depth += 1,
            ']' if depth > 0 => depth -= 1,
            _ if depth == 0 => result.push(c),
            _ => {}
        }
    }
    result
}

/// Authors with institution and country from an `Authors with affiliations` cell.
///
/// Entries without a comma, or with an empty name or institution, are skipped.
pub fn split_affiliated_authors(raw: Option<&str>) -> Vec<AffiliatedAuthor> {
    raw.map(split_entries)
        .unwrap_or_default()
        .iter()
        .filter_map(|entry| parse_affiliated_author(entry))
        .collect()
}
