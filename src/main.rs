use lead_scoring_engine::config::Config;
use lead_scoring_engine::pipeline;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the application.
///
/// This function initializes the application, including:
/// - Logging and tracing.
/// - Configuration loading.
///
/// It then runs the scoring workflow over the configured dataset and prints
/// the summary report.
///
/// # Returns
///
/// * `anyhow::Result<()>` - Ok if the batch completes, or an error if
///   configuration, loading, or persistence fails.
fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lead_scoring_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Score the dataset
    let report = pipeline::run_scoring_workflow(&config)?;

    if config.report_json {
        println!("{}", serde_json::to_string_pretty(&report.to_json())?);
    } else {
        println!("{}", report.render());
    }

    tracing::info!("Lead scoring completed successfully");
    Ok(())
}
