//! Scoring pipeline.
//!
//! Per-record transform plus the batch workflow that ties loading, scoring,
//! persistence and reporting together:
//! 1. Load the lead dataset from CSV
//! 2. Score every lead (profile + behavior + segment)
//! 3. Persist the annotated dataset
//! 4. Compute the summary report

use crate::config::Config;
use crate::csv_storage;
use crate::errors::{AppError, ResultExt};
use crate::models::{LeadRecord, ScoredLead};
use crate::report::SummaryReport;
use crate::scoring::{classify, score_behavior, score_profile};

/// Scores a single lead.
///
/// Pure per-record transform: profile score, behavior score, their sum, and
/// the segment derived from that sum. The input record is carried into the
/// output unchanged.
pub fn score_lead(record: &LeadRecord) -> ScoredLead {
    let profile_score = score_profile(&record.job_title, record.company_size, record.sector);
    let behavior_score = score_behavior(
        record.requested_demo,
        record.downloaded_whitepaper,
        record.web_visits,
        record.emails_opened,
    );
    let lead_score = profile_score + behavior_score;
    let segment = classify(lead_score);

    ScoredLead {
        record: record.clone(),
        profile_score,
        behavior_score,
        lead_score,
        segment,
    }
}

/// Scores a batch of leads.
///
/// Total, order-preserving map: every record produces exactly one scored
/// lead, at the same index. Records do not influence each other.
pub fn run(records: &[LeadRecord]) -> Vec<ScoredLead> {
    records.iter().map(score_lead).collect()
}

/// Complete scoring workflow for a dataset file.
///
/// This is the main entry point that orchestrates the batch:
/// 1. Load leads from the input CSV
/// 2. Score every lead
/// 3. Persist the annotated dataset
/// 4. Compute the summary report
///
/// Validation happens entirely inside step 1; once loading succeeds, the
/// scoring steps cannot fail and no partial output is ever written.
pub fn run_scoring_workflow(config: &Config) -> Result<SummaryReport, AppError> {
    tracing::info!(
        "Starting lead scoring workflow: {} -> {}",
        config.input_path.display(),
        config.output_path.display()
    );

    // Step 1: Load the dataset
    tracing::info!("Step 1: Loading lead dataset");
    let dataset = csv_storage::load_leads_from_path(&config.input_path)
        .context("Failed to load lead dataset")?;
    tracing::info!("✓ Loaded {} leads", dataset.records.len());

    // Step 2: Score every lead
    tracing::info!("Step 2: Scoring {} leads", dataset.records.len());
    let scored = run(&dataset.records);

    // Step 3: Persist the annotated dataset
    tracing::info!("Step 3: Writing scored dataset");
    csv_storage::write_scored_to_path(&config.output_path, &dataset, &scored)
        .context("Failed to write scored dataset")?;
    tracing::info!("✓ Scored dataset saved to {}", config.output_path.display());

    // Step 4: Summarize
    tracing::info!("Step 4: Computing summary report");
    let report = SummaryReport::compute(&scored);
    if report.converted.is_none() {
        tracing::warn!("No converted leads found in the dataset");
    }

    Ok(report)
}
