use std::collections::BTreeSet;

use crate::models::{Compatibility, Participant};

fn intersect(a: &BTreeSet<String>, b: &BTreeSet<String>) -> BTreeSet<String> {
    a.intersection(b).cloned().collect()
}

/// Full match: both partners can offer their native language.
///
/// `speak` = person.practice ∩ candidate.native,
/// `learn` = person.native ∩ candidate.practice;
/// matched iff both sets are non-empty. The rule is directional, so
/// callers probe both orderings where needed.
#[inline]
pub fn full_match(person: &Participant, candidate: &Participant) -> Option<Compatibility> {
    let speak = intersect(&person.practice, &candidate.native);
    let learn = intersect(&person.native, &candidate.practice);

    if speak.is_empty() || learn.is_empty() {
        return None;
    }

    Some(Compatibility { speak, learn })
}

/// Partial match: `person` offers an advanced language, `candidate` a
/// native one in return.
///
/// `speak` = candidate.native ∩ person.practice,
/// `learn` = person.advanced ∩ candidate.practice;
/// matched iff both sets are non-empty and the native-level side is
/// willing to be paired with an advanced-level learner.
#[inline]
pub fn partial_match(person: &Participant, candidate: &Participant) -> Option<Compatibility> {
    if candidate.only_native {
        return None;
    }

    let speak = intersect(&candidate.native, &person.practice);
    let learn = intersect(&person.advanced, &candidate.practice);

    if speak.is_empty() || learn.is_empty() {
        return None;
    }

    Some(Compatibility { speak, learn })
}

/// Whether any of the three directional rules holds for the pair.
#[inline]
pub fn compatible(a: &Participant, b: &Participant) -> bool {
    full_match(a, b).is_some() || partial_match(a, b).is_some() || partial_match(b, a).is_some()
}
