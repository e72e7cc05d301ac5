//! Tandem Match - deterministic pair matcher for a language exchange program
//!
//! This library pairs program participants based on mutual language
//! compatibility and renders a personalized notification message for
//! each of them. The pipeline is a single synchronous pass:
//!
//! 1. Load and validate the response sheet (CSV)
//! 2. Classify pairwise compatibility (full / partial / none)
//! 3. Count candidates per participant to set the priority order
//! 4. Greedily pair participants, scarcest first
//! 5. Render notification messages from injected templates
//! 6. Write the augmented match report (CSV)
//!
//! The result is deterministic for a given input: matching order and
//! rendered language lists never depend on hash or set iteration order.

pub mod config;
pub mod core;
pub mod models;
pub mod pipeline;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    count_candidates, full_match, pair_all, partial_match, CandidateCounts, MatchBook,
    MessageRenderer, MessageTemplates,
};
pub use crate::models::{Compatibility, MatchKind, MatchRecord, Participant, PAIR_NOT_FOUND};
pub use crate::pipeline::{run, PipelineError, RunSummary};
