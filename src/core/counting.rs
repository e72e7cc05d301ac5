use std::collections::HashMap;

use crate::core::compat::compatible;
use crate::models::Participant;

/// Number of potential partners per participant.
///
/// Computed once before matching begins and used purely to establish the
/// matching priority order (scarcest first); it is not updated while
/// pairs are being assigned.
#[derive(Debug, Clone, Default)]
pub struct CandidateCounts {
    by_name: HashMap<String, usize>,
}

impl CandidateCounts {
    /// Candidate count for a participant, 0 if unknown.
    pub fn get(&self, name: &str) -> usize {
        self.by_name.get(name).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Count, for every participant, how many others satisfy any of the
/// three directional compatibility rules with them.
///
/// O(n²) pairwise scan; fine at the expected scale of tens to low
/// hundreds of participants. The result is independent of roster order.
pub fn count_candidates(roster: &[Participant]) -> CandidateCounts {
    let mut by_name = HashMap::with_capacity(roster.len());

    for (i, person) in roster.iter().enumerate() {
        let count = roster
            .iter()
            .enumerate()
            .filter(|&(j, candidate)| j != i && compatible(person, candidate))
            .count();
        by_name.insert(person.name.clone(), count);
    }

    CandidateCounts { by_name }
}
