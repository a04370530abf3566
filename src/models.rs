use serde::{Deserialize, Serialize};
use std::fmt;

// ============ Categorical Types ============

/// Company size category from the dataset.
///
/// The dataset labels are matched exactly; anything unrecognized (including
/// an empty cell) becomes `Other` and scores as the lowest tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    /// Large account, biggest budget.
    Enterprise,
    /// Small/medium business ("Pyme" in the source dataset).
    Pyme,
    /// Micro business, limited budget.
    Micro,
    /// Unrecognized or missing category.
    Other,
}

impl CompanySize {
    /// Parses a raw dataset cell into a company size category.
    ///
    /// Unrecognized values are not an error; they route to `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Enterprise" => CompanySize::Enterprise,
            "Pyme" => CompanySize::Pyme,
            "Micro" => CompanySize::Micro,
            _ => CompanySize::Other,
        }
    }
}

/// Industry sector category from the dataset.
///
/// Only Technology and Finance are distinguished; the source dataset uses the
/// Spanish labels (`Tecnología`, `Finanzas`), with the English spellings
/// accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sector {
    Technology,
    Finance,
    /// Every other sector (Retail, Salud, ...).
    Other,
}

impl Sector {
    /// Parses a raw dataset cell into a sector category.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Tecnología" | "Technology" => Sector::Technology,
            "Finanzas" | "Finance" => Sector::Finance,
            _ => Sector::Other,
        }
    }
}

/// Priority segment assigned from the total lead score.
///
/// Variants are ordered coldest-first so the derived `Ord` matches
/// follow-up priority (`Cold < Warm < Hot`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Segment {
    Cold,
    Warm,
    Hot,
}

impl Segment {
    /// Dataset label for the segment, as written to the output CSV.
    pub fn as_label(&self) -> &'static str {
        match self {
            Segment::Hot => "Hot Lead",
            Segment::Warm => "Warm Lead",
            Segment::Cold => "Cold Lead",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

// ============ Records ============

/// A single sales lead as loaded from the dataset.
///
/// Immutable input to the scoring core. Counts are unsigned by construction:
/// negative values are rejected at the load boundary, so a `LeadRecord` that
/// exists always satisfies the scoring preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    /// Free-text job title; may be empty. Matching is case-insensitive.
    pub job_title: String,
    /// Company size category.
    pub company_size: CompanySize,
    /// Industry sector category.
    pub sector: Sector,
    /// Whether the lead requested a product demo.
    pub requested_demo: bool,
    /// Whether the lead downloaded a whitepaper.
    pub downloaded_whitepaper: bool,
    /// Number of website visits recorded for the lead.
    pub web_visits: u32,
    /// Number of marketing emails the lead opened.
    pub emails_opened: u32,
    /// Final funnel status (e.g. `Convertido`, `Perdido`).
    pub conversion_status: String,
}

impl LeadRecord {
    /// Whether the lead ended up converting.
    ///
    /// The source dataset marks conversions as `Convertido`; the English
    /// `Converted` is accepted as an alias. Comparison is case-insensitive.
    pub fn is_converted(&self) -> bool {
        let status = self.conversion_status.trim();
        status.eq_ignore_ascii_case("Convertido") || status.eq_ignore_ascii_case("Converted")
    }
}

/// A lead annotated with its derived scores and segment.
///
/// Produced exactly once per `LeadRecord`; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredLead {
    /// The original record, carried through unchanged.
    pub record: LeadRecord,
    /// Profile component, in `[0, 50]`.
    pub profile_score: u8,
    /// Behavior component, in `[0, 50]`.
    pub behavior_score: u8,
    /// Total score, `profile_score + behavior_score`, in `[0, 100]`.
    pub lead_score: u8,
    /// Priority segment derived from `lead_score` alone.
    pub segment: Segment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_size_parsing() {
        assert_eq!(CompanySize::parse("Enterprise"), CompanySize::Enterprise);
        assert_eq!(CompanySize::parse("Pyme"), CompanySize::Pyme);
        assert_eq!(CompanySize::parse("Micro"), CompanySize::Micro);
        assert_eq!(CompanySize::parse("  Pyme  "), CompanySize::Pyme);
        assert_eq!(CompanySize::parse("Startup"), CompanySize::Other);
        assert_eq!(CompanySize::parse(""), CompanySize::Other);
    }

    #[test]
    fn test_sector_parsing_accepts_both_spellings() {
        assert_eq!(Sector::parse("Tecnología"), Sector::Technology);
        assert_eq!(Sector::parse("Technology"), Sector::Technology);
        assert_eq!(Sector::parse("Finanzas"), Sector::Finance);
        assert_eq!(Sector::parse("Finance"), Sector::Finance);
        assert_eq!(Sector::parse("Retail"), Sector::Other);
        assert_eq!(Sector::parse(""), Sector::Other);
    }

    #[test]
    fn test_segment_ordering_matches_priority() {
        assert!(Segment::Cold < Segment::Warm);
        assert!(Segment::Warm < Segment::Hot);
    }

    #[test]
    fn test_segment_labels() {
        assert_eq!(Segment::Hot.as_label(), "Hot Lead");
        assert_eq!(Segment::Warm.as_label(), "Warm Lead");
        assert_eq!(Segment::Cold.as_label(), "Cold Lead");
    }

    #[test]
    fn test_conversion_status_detection() {
        let mut lead = sample_lead();
        lead.conversion_status = "Convertido".to_string();
        assert!(lead.is_converted());
        lead.conversion_status = "converted".to_string();
        assert!(lead.is_converted());
        lead.conversion_status = "Perdido".to_string();
        assert!(!lead.is_converted());
        lead.conversion_status = String::new();
        assert!(!lead.is_converted());
    }

    fn sample_lead() -> LeadRecord {
        LeadRecord {
            job_title: "Analyst".to_string(),
            company_size: CompanySize::Micro,
            sector: Sector::Other,
            requested_demo: false,
            downloaded_whitepaper: false,
            web_visits: 0,
            emails_opened: 0,
            conversion_status: "En Proceso".to_string(),
        }
    }
}
