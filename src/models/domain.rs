use std::collections::BTreeSet;
use std::fmt;

/// Sentinel written to the `match_name` column for unmatched participants.
pub const PAIR_NOT_FOUND: &str = "Pair not found";

/// One signup, parsed and validated from a response row.
///
/// `name` is the matching key and must be unique across the roster;
/// the roster loader rejects duplicates. Language sets are ordered so
/// that comma-joined renderings come out the same on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    /// Languages the participant wants to practice.
    pub practice: BTreeSet<String>,
    /// Languages spoken natively.
    pub native: BTreeSet<String>,
    /// Languages spoken at advanced (non-native) level; empty if unspecified.
    pub advanced: BTreeSet<String>,
    /// Only willing to be matched with partners offering their native language.
    pub only_native: bool,
    pub email: String,
    pub facebook: String,
}

/// Which rule confirmed a pair, from one participant's point of view.
///
/// In a partial pair the side offering its advanced language is
/// `PartialWithAdvanced` and the side offering its native language is
/// `PartialWithNative`. Unmatched participants have no record at all and
/// are reported as `no_match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Full,
    PartialWithAdvanced,
    PartialWithNative,
}

impl MatchKind {
    /// Label written to the `match_type` column for unmatched rows.
    pub const NO_MATCH: &'static str = "no_match";

    /// The `match_type` column value for this kind.
    pub fn label(self) -> &'static str {
        match self {
            MatchKind::Full => "full_match",
            MatchKind::PartialWithAdvanced => "partial_match_with_advanced",
            MatchKind::PartialWithNative => "partial_match_with_native",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Languages that satisfied a compatibility rule for an ordered pair.
///
/// `speak` are the languages the first participant gets to practice,
/// `learn` the ones their partner gets to practice. Not persisted;
/// consumed immediately by the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compatibility {
    pub speak: BTreeSet<String>,
    pub learn: BTreeSet<String>,
}

impl Compatibility {
    /// The same result seen from the partner's side.
    pub fn swapped(self) -> Self {
        Compatibility {
            speak: self.learn,
            learn: self.speak,
        }
    }
}

/// A confirmed match, as stored for one of the two participants.
///
/// Created once per pair in two mirrored copies (speak/learn swapped)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub partner_name: String,
    pub kind: MatchKind,
    pub partner_email: String,
    pub partner_facebook: String,
    pub speak: BTreeSet<String>,
    pub learn: BTreeSet<String>,
}
