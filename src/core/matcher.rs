use std::cmp::Ordering;
use std::panic::{self, AssertUnwindSafe};

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{CandidateProfile, ExcludedOpportunity, Opportunity, RankedOpportunity, ScoreBreakdown};
use crate::core::{
    scoring::score_validated,
    tiers::{match_tier, notification_enabled, priority_level},
    urgency::days_until,
    validation::{validate_opportunity, ValidationError},
};

/// Results scoring below this total are never returned
pub const MIN_SCORE: u8 = 30;

/// Why a single opportunity was dropped from a ranking pass
#[derive(Debug, Error)]
pub enum MatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("opportunity {0}: scoring failed unexpectedly")]
    ScoringPanicked(String),
}

/// Result of the ranking process
#[derive(Debug)]
pub struct RankResult {
    pub ranked: Vec<RankedOpportunity>,
    pub excluded: Vec<ExcludedOpportunity>,
    pub total_opportunities: usize,
    pub below_threshold: usize,
}

/// Signature of the per-opportunity scorer run inside the panic boundary
type Scorer = fn(&CandidateProfile, &Opportunity, NaiveDate, NaiveDate) -> ScoreBreakdown;

/// Scored entry together with the parsed deadline used for tie-breaking
struct Scored {
    entry: RankedOpportunity,
    deadline: NaiveDate,
}

/// Ranking orchestrator
///
/// # Pipeline Stages
/// 1. Per-record validation (bad records are excluded, not fatal)
/// 2. Eligibility gate and weighted scoring
/// 3. Minimum-score filter
/// 4. Sorting and limiting
///
/// Holds no mutable state; one instance is shared by every request.
#[derive(Debug, Clone)]
pub struct Matcher {
    max_results: usize,
}

impl Matcher {
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }

    /// Score one opportunity, turning a panic into an error for its id
    fn score_one(
        scorer: Scorer,
        profile: &CandidateProfile,
        opportunity: Opportunity,
        today: NaiveDate,
    ) -> Result<Scored, MatchError> {
        let deadline = validate_opportunity(&opportunity)?;

        let score = panic::catch_unwind(AssertUnwindSafe(|| {
            scorer(profile, &opportunity, deadline, today)
        }))
        .map_err(|_| MatchError::ScoringPanicked(opportunity.id.clone()))?;

        let days = days_until(deadline, today);
        let entry = RankedOpportunity {
            match_tier: match_tier(score.total),
            priority_level: priority_level(score.total, opportunity.amount, days),
            notification_enabled: notification_enabled(score.total),
            days_until_deadline: days,
            score,
            opportunity,
        };

        Ok(Scored { entry, deadline })
    }

    /// Rank opportunities for one candidate
    ///
    /// # Arguments
    /// * `profile` - The candidate being matched
    /// * `opportunities` - Everything discovery produced so far
    /// * `today` - Date deadlines are measured from
    /// * `limit` - Maximum number of results, capped at the configured maximum
    ///
    /// # Returns
    /// RankResult with entries scoring at least [`MIN_SCORE`], best first.
    /// Ties are broken by earlier deadline, then by opportunity id.
    pub fn rank(
        &self,
        profile: &CandidateProfile,
        opportunities: Vec<Opportunity>,
        today: NaiveDate,
        limit: Option<usize>,
    ) -> RankResult {
        self.rank_with(score_validated, profile, opportunities, today, limit)
    }

    fn rank_with(
        &self,
        scorer: Scorer,
        profile: &CandidateProfile,
        opportunities: Vec<Opportunity>,
        today: NaiveDate,
        limit: Option<usize>,
    ) -> RankResult {
        let total_opportunities = opportunities.len();
        let mut excluded = Vec::new();
        let mut below_threshold = 0;

        let mut scored: Vec<Scored> = opportunities
            .into_iter()
            .filter_map(|opportunity| {
                let id = opportunity.id.clone();
                match Self::score_one(scorer, profile, opportunity, today) {
                    Ok(scored) => Some(scored),
                    Err(e) => {
                        tracing::warn!(opportunity_id = %id, "Excluding opportunity from ranking: {}", e);
                        excluded.push(ExcludedOpportunity {
                            opportunity_id: id,
                            reason: e.to_string(),
                        });
                        None
                    }
                }
            })
            .filter(|scored| {
                let keep = scored.entry.score.total >= MIN_SCORE;
                if !keep {
                    below_threshold += 1;
                }
                keep
            })
            .collect();

        scored.sort_by(compare_ranked);

        let limit = limit.unwrap_or(self.max_results).min(self.max_results);
        scored.truncate(limit);

        tracing::debug!(
            "Ranked {} of {} opportunities ({} excluded, {} below threshold)",
            scored.len(),
            total_opportunities,
            excluded.len(),
            below_threshold
        );

        RankResult {
            ranked: scored.into_iter().map(|s| s.entry).collect(),
            excluded,
            total_opportunities,
            below_threshold,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Total descending, then deadline ascending, then id ascending
fn compare_ranked(a: &Scored, b: &Scored) -> Ordering {
    b.entry
        .score
        .total
        .cmp(&a.entry.score.total)
        .then_with(|| a.deadline.cmp(&b.deadline))
        .then_with(|| a.entry.opportunity.id.cmp(&b.entry.opportunity.id))
}
