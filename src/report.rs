//! Aggregate summary over a scored batch.
//!
//! Reproduces the report the sales team reads after every scoring run:
//! segment distribution, lead-score statistics, and the conversion breakdown
//! used to sanity-check the scoring rules against observed outcomes.

use crate::models::{ScoredLead, Segment};
use serde_json::{json, Value};

/// Lead-score statistics over a non-empty batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreStats {
    pub mean: f64,
    pub min: u8,
    pub max: u8,
    /// Median; averages the two middle values for even-sized batches.
    pub median: f64,
}

/// Conversion statistics, present when at least one lead converted.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedStats {
    /// Number of converted leads.
    pub total: usize,
    /// Lead-score statistics restricted to the converted leads.
    pub score_stats: ScoreStats,
    /// Converted leads per segment.
    pub hot: usize,
    pub warm: usize,
    pub cold: usize,
}

/// Aggregate report over one scored batch.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub total_leads: usize,
    /// Leads per segment.
    pub hot: usize,
    pub warm: usize,
    pub cold: usize,
    /// `None` for an empty batch.
    pub score_stats: Option<ScoreStats>,
    /// `None` when no lead converted.
    pub converted: Option<ConvertedStats>,
}

impl SummaryReport {
    /// Computes the report from a scored batch.
    pub fn compute(scored: &[ScoredLead]) -> Self {
        let total_leads = scored.len();
        let count_in = |segment: Segment| scored.iter().filter(|l| l.segment == segment).count();

        let hot = count_in(Segment::Hot);
        let warm = count_in(Segment::Warm);
        let cold = count_in(Segment::Cold);

        let score_stats = score_stats_over(scored.iter().map(|l| l.lead_score).collect());

        let converted_leads: Vec<&ScoredLead> =
            scored.iter().filter(|l| l.record.is_converted()).collect();
        let converted = score_stats_over(converted_leads.iter().map(|l| l.lead_score).collect())
            .map(|stats| {
                let count_converted = |segment: Segment| {
                    converted_leads.iter().filter(|l| l.segment == segment).count()
                };
                ConvertedStats {
                    total: converted_leads.len(),
                    score_stats: stats,
                    hot: count_converted(Segment::Hot),
                    warm: count_converted(Segment::Warm),
                    cold: count_converted(Segment::Cold),
                }
            });

        SummaryReport {
            total_leads,
            hot,
            warm,
            cold,
            score_stats,
            converted,
        }
    }

    /// Percentage share of a segment count against the whole batch.
    pub fn share(&self, count: usize) -> f64 {
        percentage(count, self.total_leads)
    }

    /// Renders the report as the banner-formatted text block.
    ///
    /// Headings follow the original Spanish-language report the sales team
    /// is used to.
    pub fn render(&self) -> String {
        let separator = "=".repeat(60);
        let mut out = String::new();

        out.push_str(&separator);
        out.push_str("\nRESUMEN DE LEAD SCORING\n");
        out.push_str(&separator);
        out.push('\n');

        out.push_str(&format!("\nTotal de leads: {}\n", self.total_leads));
        out.push_str("\n[INFO] Distribucion por Segmento:\n");
        out.push_str(&format!(
            "   - Hot Leads:  {:3} ({:.1}%)\n",
            self.hot,
            self.share(self.hot)
        ));
        out.push_str(&format!(
            "   - Warm Leads: {:3} ({:.1}%)\n",
            self.warm,
            self.share(self.warm)
        ));
        out.push_str(&format!(
            "   - Cold Leads: {:3} ({:.1}%)\n",
            self.cold,
            self.share(self.cold)
        ));

        match &self.converted {
            Some(converted) => {
                out.push_str(&format!(
                    "\n[OK] Score Promedio de Leads Convertidos: {:.2} puntos\n",
                    converted.score_stats.mean
                ));
                out.push_str(&format!(
                    "   Rango: {} - {} puntos (mediana {:.2})\n",
                    converted.score_stats.min,
                    converted.score_stats.max,
                    converted.score_stats.median
                ));
                out.push_str(&format!("   Total de Convertidos: {}\n", converted.total));

                out.push_str("\n[INFO] Convertidos por Segmento:\n");
                out.push_str(&converted_line("Hot Leads", converted.hot, self.hot));
                out.push_str(&converted_line("Warm Leads", converted.warm, self.warm));
                out.push_str(&converted_line("Cold Leads", converted.cold, self.cold));
            }
            None => {
                out.push_str("\n[WARNING] No se encontraron leads convertidos en el dataset\n");
            }
        }

        if let Some(stats) = &self.score_stats {
            out.push_str("\n[INFO] Estadisticas Generales:\n");
            out.push_str(&format!("   - Score Promedio Total: {:.2} puntos\n", stats.mean));
            out.push_str(&format!("   - Score Minimo: {} puntos\n", stats.min));
            out.push_str(&format!("   - Score Maximo: {} puntos\n", stats.max));
            out.push_str(&format!("   - Score Mediano: {:.2} puntos\n", stats.median));
        }

        out.push('\n');
        out.push_str(&separator);
        out.push('\n');
        out
    }

    /// JSON rendering of the report, for machine consumers.
    pub fn to_json(&self) -> Value {
        json!({
            "total_leads": self.total_leads,
            "segments": {
                "hot": { "count": self.hot, "share_pct": self.share(self.hot) },
                "warm": { "count": self.warm, "share_pct": self.share(self.warm) },
                "cold": { "count": self.cold, "share_pct": self.share(self.cold) },
            },
            "lead_score": self.score_stats.as_ref().map(|s| json!({
                "mean": s.mean,
                "min": s.min,
                "max": s.max,
                "median": s.median,
            })),
            "converted": self.converted.as_ref().map(|c| json!({
                "total": c.total,
                "lead_score": {
                    "mean": c.score_stats.mean,
                    "min": c.score_stats.min,
                    "max": c.score_stats.max,
                    "median": c.score_stats.median,
                },
                "by_segment": {
                    "hot": { "count": c.hot, "rate_pct": percentage(c.hot, self.hot) },
                    "warm": { "count": c.warm, "rate_pct": percentage(c.warm, self.warm) },
                    "cold": { "count": c.cold, "rate_pct": percentage(c.cold, self.cold) },
                },
            })),
        })
    }
}

/// One converted-by-segment report line, with the conversion rate against
/// that segment's population (omitted when the segment is empty).
fn converted_line(label: &str, converted: usize, population: usize) -> String {
    if population > 0 {
        format!(
            "   - {} convertidos: {:3} ({:.1}% de {})\n",
            label,
            converted,
            percentage(converted, population),
            label
        )
    } else {
        format!("   - {} convertidos:   0\n", label)
    }
}

/// Lead-score statistics over a batch; `None` for an empty batch.
fn score_stats_over(mut scores: Vec<u8>) -> Option<ScoreStats> {
    if scores.is_empty() {
        return None;
    }
    scores.sort_unstable();
    let sum: u32 = scores.iter().map(|&s| s as u32).sum();
    Some(ScoreStats {
        mean: sum as f64 / scores.len() as f64,
        min: scores[0],
        max: scores[scores.len() - 1],
        median: median_of_sorted(&scores),
    })
}

/// Percentage of `part` in `total`, 0 when `total` is 0.
fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Median of an ascending-sorted slice of scores.
fn median_of_sorted(sorted: &[u8]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2] as f64
    } else {
        (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
    }
}
