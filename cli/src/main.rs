//! Workout Tracker
//!
//! Reads sensor packages (the built-in reference session or a configured
//! JSON/CSV file), computes distance, mean speed and calories for each
//! workout and prints one summary per workout.
//!
//! Reports go to stdout; logs go to stderr.

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_tracker_cli::{batch, config, output, packages};
use workout_tracker_shared::Calibration;

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        "Starting workout tracker"
    );

    batch::ensure_calibration(&Calibration::STANDARD)?;

    let packages = packages::load(&config.input)?;
    let outcome = batch::process_batch(&packages, &config.batch)?;

    let rendered = output::render(&outcome.reports, config.output.format)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    if !outcome.is_complete() {
        let indices: Vec<usize> = outcome.failures.iter().map(|f| f.index).collect();
        error!(?indices, "Some packages were rejected");
        anyhow::bail!(
            "{} of {} packages were rejected",
            outcome.failures.len(),
            packages.len()
        );
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "workout_tracker_cli=info,workout_tracker=info".into()
        } else {
            "workout_tracker_cli=debug,workout_tracker=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
