use std::collections::{HashMap, HashSet};

use crate::core::compat::{full_match, partial_match};
use crate::core::counting::CandidateCounts;
use crate::models::{Compatibility, MatchKind, MatchRecord, Participant};

/// All confirmed matches of one run, keyed by participant name.
///
/// Every pair is stored as two mirrored records; entries are never
/// mutated once inserted.
#[derive(Debug, Clone, Default)]
pub struct MatchBook {
    records: HashMap<String, MatchRecord>,
}

impl MatchBook {
    /// Record for a participant, if they were paired.
    pub fn get(&self, name: &str) -> Option<&MatchRecord> {
        self.records.get(name)
    }

    /// Number of matched participants (two per pair).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Store the mirrored records for a full match. `compat` is oriented
    /// towards `person`.
    fn insert_full(&mut self, person: &Participant, partner: &Participant, compat: Compatibility) {
        self.insert_pair(person, partner, MatchKind::Full, MatchKind::Full, compat);
    }

    /// Store the mirrored records for a partial match. `compat` is
    /// oriented towards the advanced-offering side.
    fn insert_partial(
        &mut self,
        advanced_side: &Participant,
        native_side: &Participant,
        compat: Compatibility,
    ) {
        self.insert_pair(
            advanced_side,
            native_side,
            MatchKind::PartialWithAdvanced,
            MatchKind::PartialWithNative,
            compat,
        );
    }

    fn insert_pair(
        &mut self,
        person: &Participant,
        partner: &Participant,
        person_kind: MatchKind,
        partner_kind: MatchKind,
        compat: Compatibility,
    ) {
        let mirrored = compat.clone().swapped();

        self.records.insert(
            person.name.clone(),
            MatchRecord {
                partner_name: partner.name.clone(),
                kind: person_kind,
                partner_email: partner.email.clone(),
                partner_facebook: partner.facebook.clone(),
                speak: compat.speak,
                learn: compat.learn,
            },
        );
        self.records.insert(
            partner.name.clone(),
            MatchRecord {
                partner_name: person.name.clone(),
                kind: partner_kind,
                partner_email: person.email.clone(),
                partner_facebook: person.facebook.clone(),
                speak: mirrored.speak,
                learn: mirrored.learn,
            },
        );
    }
}

/// Greedily pair the roster, scarcest first.
///
/// Participants are visited in ascending candidate-count order (stable,
/// so roster order breaks ties) to give the most constrained ones first
/// pick. For each unmatched participant the candidates are scanned in
/// roster order and the first rule that fires wins, in priority order:
/// full match, partial offering advanced, partial offering native. Both
/// sides of a confirmed pair are excluded from the rest of the pass, so
/// nobody ends up with two partners.
pub fn pair_all(roster: &[Participant], counts: &CandidateCounts) -> MatchBook {
    let mut order: Vec<usize> = (0..roster.len()).collect();
    order.sort_by_key(|&i| counts.get(&roster[i].name));

    let mut done: HashSet<&str> = HashSet::with_capacity(roster.len());
    let mut book = MatchBook::default();

    for &i in &order {
        let person = &roster[i];
        if done.contains(person.name.as_str()) {
            continue;
        }

        for (j, candidate) in roster.iter().enumerate() {
            if j == i || done.contains(candidate.name.as_str()) {
                continue;
            }

            if let Some(compat) = full_match(person, candidate) {
                book.insert_full(person, candidate, compat);
            } else if let Some(compat) = partial_match(person, candidate) {
                book.insert_partial(person, candidate, compat);
            } else if let Some(compat) = partial_match(candidate, person) {
                book.insert_partial(candidate, person, compat);
            } else {
                continue;
            }

            done.insert(person.name.as_str());
            done.insert(candidate.name.as_str());
            break;
        }
    }

    book
}
