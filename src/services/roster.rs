use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use thiserror::Error;
use validator::Validate;

use crate::models::{Participant, ResponseRow};

/// Errors that can occur while loading the response sheet
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: {message}")]
    InvalidRow { row: usize, message: String },

    #[error("row {row} ({name}): column '{column}' must list at least one language")]
    EmptyLanguages {
        row: usize,
        name: String,
        column: &'static str,
    },

    #[error("row {row} ({name}): only_native must be 'Yes' or 'No', got '{value}'")]
    InvalidOnlyNative {
        row: usize,
        name: String,
        value: String,
    },

    #[error("row {row}: duplicate participant name '{name}'; names are the matching key")]
    DuplicateName { row: usize, name: String },
}

/// The loaded response sheet.
///
/// Raw rows are kept for pass-through into the report; `participants`
/// holds the parsed form at the same indices.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub rows: Vec<ResponseRow>,
    pub participants: Vec<Participant>,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

/// Read and validate the response CSV.
///
/// Every row must parse; a malformed row fails the whole load with an
/// error naming the offending 1-based data row. Duplicate names are
/// rejected here because downstream records are keyed by name.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster, RosterError> {
    let mut reader = csv::Reader::from_path(path.as_ref()).map_err(|source| RosterError::Open {
        path: path.as_ref().display().to_string(),
        source,
    })?;

    let mut roster = Roster::default();
    let mut seen: HashSet<String> = HashSet::new();

    for (index, result) in reader.deserialize::<ResponseRow>().enumerate() {
        let row_number = index + 1;
        let row = result?;

        row.validate().map_err(|e| RosterError::InvalidRow {
            row: row_number,
            message: e.to_string(),
        })?;

        let participant = parse_participant(&row, row_number)?;
        if !seen.insert(participant.name.clone()) {
            return Err(RosterError::DuplicateName {
                row: row_number,
                name: participant.name,
            });
        }

        roster.rows.push(row);
        roster.participants.push(participant);
    }

    Ok(roster)
}

fn parse_participant(row: &ResponseRow, row_number: usize) -> Result<Participant, RosterError> {
    let name = row.full_name();

    let practice = split_languages(&row.language_to_practice);
    if practice.is_empty() {
        return Err(RosterError::EmptyLanguages {
            row: row_number,
            name,
            column: "language_to_practice",
        });
    }

    let native = split_languages(&row.native);
    if native.is_empty() {
        return Err(RosterError::EmptyLanguages {
            row: row_number,
            name,
            column: "native",
        });
    }

    // A blank or missing advanced column simply means no advanced offer.
    let advanced = row
        .advanced
        .as_deref()
        .map(split_languages)
        .unwrap_or_default();

    let only_native = match row.only_native.trim() {
        v if v.eq_ignore_ascii_case("yes") => true,
        v if v.eq_ignore_ascii_case("no") => false,
        other => {
            return Err(RosterError::InvalidOnlyNative {
                row: row_number,
                name,
                value: other.to_string(),
            })
        }
    };

    Ok(Participant {
        name,
        practice,
        native,
        advanced,
        only_native,
        email: row.email.clone(),
        facebook: row.facebook.clone(),
    })
}

/// Split a comma-separated language list, trimming whitespace and
/// dropping empty entries.
fn split_languages(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
