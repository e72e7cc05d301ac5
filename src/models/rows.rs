use serde::{Deserialize, Serialize};
use validator::Validate;

/// One row of the response sheet, as exported by the signup form.
///
/// Language columns hold comma-separated lists; `advanced` may be blank
/// or missing entirely. Contact fields are opaque and carried through to
/// the report unmodified.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResponseRow {
    #[validate(length(min = 1))]
    pub first: String,
    #[validate(length(min = 1))]
    pub second: String,
    #[validate(length(min = 1))]
    pub language_to_practice: String,
    #[validate(length(min = 1))]
    pub native: String,
    #[serde(default)]
    pub advanced: Option<String>,
    #[validate(length(min = 1))]
    pub only_native: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub facebook: String,
}

impl ResponseRow {
    /// Display name used as the matching key.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.second)
    }
}

/// One row of the match report: the input row passed through, augmented
/// with the match metadata and the rendered notification message.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRow {
    pub first: String,
    pub second: String,
    pub language_to_practice: String,
    pub native: String,
    pub advanced: String,
    pub only_native: String,
    pub email: String,
    pub facebook: String,
    pub name: String,
    pub match_name: String,
    pub match_type: String,
    pub options: usize,
    pub message: String,
}
