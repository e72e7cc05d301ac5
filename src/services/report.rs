use std::path::Path;

use thiserror::Error;

use crate::models::MatchRow;

/// Errors that can occur while writing the match report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the augmented match report, creating the parent directory if
/// needed.
pub fn write_report<P: AsRef<Path>>(path: P, rows: &[MatchRow]) -> Result<(), ReportError> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path.as_ref()).map_err(|source| ReportError::Create {
        path: path.as_ref().display().to_string(),
        source,
    })?;

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
