// Core algorithm exports
pub mod compat;
pub mod counting;
pub mod matcher;
pub mod render;

pub use compat::{compatible, full_match, partial_match};
pub use counting::{count_candidates, CandidateCounts};
pub use matcher::{pair_all, MatchBook};
pub use render::{join_languages, MessageRenderer, MessageTemplates};
