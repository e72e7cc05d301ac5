//! End-to-end matching run: load, count, pair, render, report.

use thiserror::Error;
use tracing::info;

use crate::config::Settings;
use crate::core::{count_candidates, pair_all, MessageRenderer};
use crate::models::{MatchKind, MatchRow, PAIR_NOT_FOUND};
use crate::services::{load_roster, load_templates, write_report};
use crate::services::{ReportError, RosterError, TemplateError};

/// Errors that can abort a matching run
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Totals of one matching run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub participants: usize,
    pub matched: usize,
    pub unmatched: usize,
}

/// Run the whole matching pipeline.
///
/// The run is atomic: any error aborts before the report is written.
pub fn run(settings: &Settings) -> Result<RunSummary, PipelineError> {
    let templates = load_templates(&settings.templates)?;
    let renderer = MessageRenderer::new(templates);

    let roster = load_roster(&settings.io.input_file)?;
    info!(
        "Loaded {} responses from {}",
        roster.len(),
        settings.io.input_file
    );

    let counts = count_candidates(&roster.participants);
    let book = pair_all(&roster.participants, &counts);
    info!("Paired {} of {} participants", book.len(), roster.len());

    let mut rows = Vec::with_capacity(roster.len());
    for (raw, participant) in roster.rows.iter().zip(&roster.participants) {
        let record = book.get(&participant.name);
        let message = renderer.render(participant, record);

        rows.push(MatchRow {
            first: raw.first.clone(),
            second: raw.second.clone(),
            language_to_practice: raw.language_to_practice.clone(),
            native: raw.native.clone(),
            advanced: raw.advanced.clone().unwrap_or_default(),
            only_native: raw.only_native.clone(),
            email: raw.email.clone(),
            facebook: raw.facebook.clone(),
            name: participant.name.clone(),
            match_name: record
                .map(|r| r.partner_name.clone())
                .unwrap_or_else(|| PAIR_NOT_FOUND.to_string()),
            match_type: record
                .map(|r| r.kind.label().to_string())
                .unwrap_or_else(|| MatchKind::NO_MATCH.to_string()),
            options: counts.get(&participant.name),
            message,
        });
    }

    write_report(&settings.io.output_file, &rows)?;
    info!("Wrote {} rows to {}", rows.len(), settings.io.output_file);

    let matched = book.len();
    Ok(RunSummary {
        participants: roster.len(),
        matched,
        unmatched: roster.len() - matched,
    })
}
