// Service exports
pub mod report;
pub mod roster;
pub mod templates;

pub use report::{write_report, ReportError};
pub use roster::{load_roster, Roster, RosterError};
pub use templates::{load_templates, TemplateError};
