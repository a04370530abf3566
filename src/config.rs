use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path of the lead dataset to score.
    pub input_path: PathBuf,
    /// Path the annotated dataset is written to.
    pub output_path: PathBuf,
    /// Emit the summary report as JSON instead of the text banner.
    pub report_json: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            input_path: csv_path_var("LEADS_INPUT", "leads_mock_data.csv")?,
            output_path: csv_path_var("LEADS_OUTPUT", "scored_leads_final.csv")?,
            report_json: match std::env::var("REPORT_JSON") {
                Ok(value) => match value.trim().to_lowercase().as_str() {
                    "1" | "true" | "yes" => true,
                    "0" | "false" | "no" | "" => false,
                    _ => anyhow::bail!("REPORT_JSON must be a boolean (true/false/1/0)"),
                },
                Err(_) => false,
            },
        };

        // Log successful configuration load
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Input dataset: {}", config.input_path.display());
        tracing::debug!("Output dataset: {}", config.output_path.display());
        tracing::debug!("JSON report: {}", config.report_json);

        Ok(config)
    }
}

/// Reads a dataset path variable, falling back to the default, and validates
/// that it names a CSV file.
fn csv_path_var(var: &str, default: &str) -> anyhow::Result<PathBuf> {
    let value = std::env::var(var).unwrap_or_else(|_| default.to_string());
    if value.trim().is_empty() {
        anyhow::bail!("{} cannot be empty", var);
    }
    if !value.to_lowercase().ends_with(".csv") {
        anyhow::bail!("{} must point to a .csv file, got '{}'", var, value);
    }
    Ok(PathBuf::from(value))
}
