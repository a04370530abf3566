//! Lead scoring business rules.
//!
//! Two independent component scores (profile, behavior), each capped at 50
//! points, sum to the total lead score in `[0, 100]`, which maps to a
//! priority segment. All functions here are pure: same inputs, same outputs,
//! no state between records.

use crate::models::{CompanySize, Sector, Segment};
use once_cell::sync::Lazy;
use regex::Regex;

// ============ Rule Constants ============

/// C-level / VP titles: maximum decision power and budget.
pub const C_LEVEL_POINTS: u8 = 20;
/// Directors: high influence on purchase decisions.
pub const DIRECTOR_POINTS: u8 = 15;
/// Managers: moderate influence.
pub const MANAGER_POINTS: u8 = 10;
/// Junior or unrecognized titles: usually early-stage researchers.
pub const JUNIOR_POINTS: u8 = 5;

/// Enterprise accounts: largest budgets.
pub const ENTERPRISE_POINTS: u8 = 15;
/// SMB ("Pyme") accounts: mid-market potential.
pub const PYME_POINTS: u8 = 10;
/// Micro and unrecognized company sizes: limited budget.
pub const MICRO_POINTS: u8 = 5;

/// Technology and Finance: high B2B adoption sectors.
pub const PRIORITY_SECTOR_POINTS: u8 = 15;
/// Every other sector.
pub const OTHER_SECTOR_POINTS: u8 = 5;

/// Demo request: the strongest buying-intent signal.
pub const DEMO_POINTS: u8 = 40;
/// Whitepaper download: early engagement signal.
pub const WHITEPAPER_POINTS: u8 = 10;
/// Web visits count one point each, up to this cap.
pub const WEB_VISITS_CAP: u32 = 10;
/// Opened emails count one point each, up to this cap.
pub const EMAILS_OPENED_CAP: u32 = 10;

/// Ceiling for each component score.
pub const COMPONENT_MAX: u8 = 50;

/// Minimum total score for the Hot segment (inclusive).
pub const HOT_THRESHOLD: u8 = 70;
/// Minimum total score for the Warm segment (inclusive).
pub const WARM_THRESHOLD: u8 = 40;

// Title tiers in priority order; the first matching tier wins. Matching runs
// over the lowercased title. The C-level alternation requires full token
// boundaries so a stray "vp" inside another word does not promote a title;
// the director/manager patterns anchor only the word start so Spanish
// inflections ("Directora") still match.
static TITLE_TIERS: Lazy<[(Regex, u8); 3]> = Lazy::new(|| {
    [
        (
            Regex::new(r"\b(ceo|cto|cfo|cmo|coo|vp)\b").unwrap(),
            C_LEVEL_POINTS,
        ),
        (Regex::new(r"\bdirector").unwrap(), DIRECTOR_POINTS),
        (Regex::new(r"\b(gerente|manager)").unwrap(), MANAGER_POINTS),
    ]
});

/// Scores the static profile attributes of a lead (max 50 points).
///
/// Three additive signals: job title tier, company size, sector. Each signal
/// has a default branch, so the function is total: unrecognized or empty
/// values score the lowest tier instead of failing. The sum is explicitly
/// capped at 50 so the contract survives future weight changes.
pub fn score_profile(job_title: &str, company_size: CompanySize, sector: Sector) -> u8 {
    let title_points = title_tier_points(job_title);

    let size_points = match company_size {
        CompanySize::Enterprise => ENTERPRISE_POINTS,
        CompanySize::Pyme => PYME_POINTS,
        CompanySize::Micro | CompanySize::Other => MICRO_POINTS,
    };

    let sector_points = match sector {
        Sector::Technology | Sector::Finance => PRIORITY_SECTOR_POINTS,
        Sector::Other => OTHER_SECTOR_POINTS,
    };

    let total = title_points as u32 + size_points as u32 + sector_points as u32;
    total.min(COMPONENT_MAX as u32) as u8
}

/// Resolves the job-title tier, case-insensitively, first match wins.
fn title_tier_points(job_title: &str) -> u8 {
    let lowered = job_title.to_lowercase();
    for (pattern, points) in TITLE_TIERS.iter() {
        if pattern.is_match(&lowered) {
            return *points;
        }
    }
    JUNIOR_POINTS
}

/// Scores the observed behavior of a lead (max 50 points).
///
/// A demo request dominates (40 pts); a whitepaper download adds 10; web
/// visits and opened emails add one point each, capped at 10 apiece so
/// casual repeat traffic cannot outweigh real intent. The 50-point ceiling
/// means behavior alone can never reach the Hot threshold.
pub fn score_behavior(
    requested_demo: bool,
    downloaded_whitepaper: bool,
    web_visits: u32,
    emails_opened: u32,
) -> u8 {
    let mut score: u32 = 0;

    if requested_demo {
        score += DEMO_POINTS as u32;
    }
    if downloaded_whitepaper {
        score += WHITEPAPER_POINTS as u32;
    }
    score += web_visits.min(WEB_VISITS_CAP);
    score += emails_opened.min(EMAILS_OPENED_CAP);

    score.min(COMPONENT_MAX as u32) as u8
}

/// Maps a total lead score to its priority segment.
///
/// Bands are closed on the lower bound: `>= 70` Hot, `>= 40` Warm, the rest
/// Cold. Pure and order-independent across records.
pub fn classify(lead_score: u8) -> Segment {
    if lead_score >= HOT_THRESHOLD {
        Segment::Hot
    } else if lead_score >= WARM_THRESHOLD {
        Segment::Warm
    } else {
        Segment::Cold
    }
}
