use std::collections::BTreeSet;

use crate::models::{MatchKind, MatchRecord, Participant};

/// The four notification templates, loaded by the caller and injected.
///
/// Each template is a single-line message with `[name]`, `[match_name]`,
/// `[match_email]`, `[match_speak]` and `[match_learn]` placeholders;
/// placeholders a template does not use are simply left alone.
#[derive(Debug, Clone, Default)]
pub struct MessageTemplates {
    pub full_match: String,
    pub partial_with_advanced: String,
    pub partial_with_native: String,
    pub no_match: String,
}

/// Renders personalized notification messages from match records.
#[derive(Debug, Clone)]
pub struct MessageRenderer {
    templates: MessageTemplates,
}

impl MessageRenderer {
    pub fn new(templates: MessageTemplates) -> Self {
        Self { templates }
    }

    /// Render the notification for one participant.
    ///
    /// Unmatched participants (no record) get the no-match template with
    /// only their name substituted. Placeholder values that do not occur
    /// in the template are ignored; placeholder-looking text we do not
    /// recognize passes through untouched.
    pub fn render(&self, participant: &Participant, record: Option<&MatchRecord>) -> String {
        let record = match record {
            Some(record) => record,
            None => return self.templates.no_match.replace("[name]", &participant.name),
        };

        let template = match record.kind {
            MatchKind::Full => &self.templates.full_match,
            MatchKind::PartialWithAdvanced => &self.templates.partial_with_advanced,
            MatchKind::PartialWithNative => &self.templates.partial_with_native,
        };

        template
            .replace("[name]", &participant.name)
            .replace("[match_name]", &record.partner_name)
            .replace("[match_email]", &record.partner_email)
            .replace("[match_speak]", &join_languages(&record.speak))
            .replace("[match_learn]", &join_languages(&record.learn))
    }
}

/// Comma-space join; the ordered set keeps the output deterministic.
pub fn join_languages(languages: &BTreeSet<String>) -> String {
    languages
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
