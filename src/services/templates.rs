use std::path::Path;

use thiserror::Error;

use crate::config::TemplateSettings;
use crate::core::render::MessageTemplates;

/// Errors that can occur while loading message templates
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Load the four notification templates named in the settings.
///
/// Templates are single-line messages: newlines in the files are folded
/// into spaces, matching how the messages are later pasted into emails.
pub fn load_templates(settings: &TemplateSettings) -> Result<MessageTemplates, TemplateError> {
    Ok(MessageTemplates {
        full_match: read_template(&settings.full_match)?,
        partial_with_advanced: read_template(&settings.partial_match_with_advanced)?,
        partial_with_native: read_template(&settings.partial_match_with_native)?,
        no_match: read_template(&settings.no_match)?,
    })
}

fn read_template<P: AsRef<Path>>(path: P) -> Result<String, TemplateError> {
    let raw = std::fs::read_to_string(path.as_ref()).map_err(|source| TemplateError::Read {
        path: path.as_ref().display().to_string(),
        source,
    })?;

    Ok(raw.replace("\r\n", " ").replace('\n', " ").trim().to_string())
}
