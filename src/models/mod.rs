// Data model exports
pub mod domain;
pub mod rows;

pub use domain::{Compatibility, MatchKind, MatchRecord, Participant, PAIR_NOT_FOUND};
pub use rows::{MatchRow, ResponseRow};
