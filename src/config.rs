use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub io: IoSettings,
    #[serde(default)]
    pub templates: TemplateSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Input and output file locations. CLI flags override these.
#[derive(Debug, Clone, Deserialize)]
pub struct IoSettings {
    #[serde(default = "default_input_file")]
    pub input_file: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

impl Default for IoSettings {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            output_file: default_output_file(),
        }
    }
}

fn default_input_file() -> String {
    "./responses/responses.csv".to_string()
}

fn default_output_file() -> String {
    "./results/matches.csv".to_string()
}

/// Locations of the four notification template files.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateSettings {
    #[serde(default = "default_full_match_template")]
    pub full_match: String,
    #[serde(default = "default_partial_with_advanced_template")]
    pub partial_match_with_advanced: String,
    #[serde(default = "default_partial_with_native_template")]
    pub partial_match_with_native: String,
    #[serde(default = "default_no_match_template")]
    pub no_match: String,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            full_match: default_full_match_template(),
            partial_match_with_advanced: default_partial_with_advanced_template(),
            partial_match_with_native: default_partial_with_native_template(),
            no_match: default_no_match_template(),
        }
    }
}

fn default_full_match_template() -> String {
    "./templates/full_match_message.txt".to_string()
}

fn default_partial_with_advanced_template() -> String {
    "./templates/partial_match_with_advanced_message.txt".to_string()
}

fn default_partial_with_native_template() -> String {
    "./templates/partial_match_with_native_message.txt".to_string()
}

fn default_no_match_template() -> String {
    "./templates/no_match_message.txt".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TANDEM__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. TANDEM__IO__INPUT_FILE -> io.input_file
            .add_source(
                Environment::with_prefix("TANDEM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("TANDEM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
