//! Paint Shop - Main entry point
//!
//! Reads an order file, resolves a finish for every colour and prints the
//! batch. Any failure prints its message in place of the batch.

use anyhow::Context;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use paintshop::cli::Cli;
use paintshop::RunConfig;

/// Exit status for an unreadable or invalid settings file (EX_CONFIG)
const CONFIG_EXIT_CODE: i32 = 78;

/// Initialize the logger with appropriate settings
fn init_logger(default_filter: &str) {
    // RUST_LOG wins over flags and settings
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the settings file (if any) and apply command-line overrides
fn load_config(cli: &Cli) -> anyhow::Result<RunConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let config = RunConfig::load_from_file(path)?;
            config
                .validate()
                .with_context(|| format!("Invalid settings in {:?}", path))?;
            config
        }
        None => RunConfig::default(),
    };

    if let Some(format) = cli.format {
        config.output = format;
    }
    if cli.strict {
        config.strict_codes = true;
    }

    Ok(config)
}

/// Main application entry point
fn main() {
    // clap prints usage and exits on a missing input path
    let cli = Cli::parse_args();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✗ Failed to load settings: {:#}", e);
            std::process::exit(CONFIG_EXIT_CODE);
        }
    };

    let default_filter = cli
        .verbosity_filter()
        .or(config.log_filter.as_deref())
        .unwrap_or("warn");
    init_logger(default_filter);
    info!("Paint shop starting up");
    debug!("Settings: {:?}", config);

    let result = if cli.check {
        info!("Checking order file: {:?}", cli.input);
        paintshop::check(&cli.input, &config)
    } else {
        info!("Resolving order file: {:?}", cli.input);
        paintshop::try_run(&cli.input, &config)
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Run failed: {}", e);
            println!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
