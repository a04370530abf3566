//! Lead Scoring Engine Library
//!
//! This library scores a tabular dataset of sales leads: every lead gets a
//! profile score (max 50), a behavior score (max 50), their sum as the total
//! lead score, and a Hot/Warm/Cold priority segment, after which the
//! annotated dataset is persisted and an aggregate summary is reported.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `csv_storage`: Dataset load and persistence.
//! - `errors`: Error handling types.
//! - `models`: Core data models.
//! - `pipeline`: Batch scoring workflow.
//! - `report`: Aggregate summary statistics.
//! - `scoring`: Scoring and segmentation business rules.

pub mod config;
pub mod csv_storage;
pub mod errors;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod scoring;
