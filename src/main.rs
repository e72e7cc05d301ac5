use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tandem_match::config::{LoggingSettings, Settings};
use tandem_match::pipeline;

/// Create language exchange partner matches from a response sheet.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Input CSV with the signup responses
    #[arg(long)]
    input_file: Option<String>,

    /// Output CSV with the matches
    #[arg(long)]
    output_file: Option<String>,

    /// Configuration file (default: config/default.toml + config/local.toml)
    #[arg(long)]
    config: Option<String>,
}

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.clone()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

fn main() {
    let cli = Cli::parse();

    let settings = match cli.config.as_deref() {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let mut settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Some(input_file) = cli.input_file {
        settings.io.input_file = input_file;
    }
    if let Some(output_file) = cli.output_file {
        settings.io.output_file = output_file;
    }

    init_logging(&settings.logging);

    info!("Starting tandem-match run...");

    match pipeline::run(&settings) {
        Ok(summary) => {
            info!(
                "Done: {} participants, {} matched, {} without a pair",
                summary.participants, summary.matched, summary.unmatched
            );
        }
        Err(e) => {
            error!("Matching run failed: {e}");
            std::process::exit(1);
        }
    }
}
