use chrono::NaiveDate;

use crate::models::{CandidateProfile, Opportunity, ScoreBreakdown};
use crate::core::{
    effort::{effort_score, estimated_hours},
    eligibility::{eligibility_coverage, passes_gate},
    interest::interest_score,
    urgency::{days_until, urgency_score},
    validation::{validate_opportunity, ValidationError},
    value::value_score,
};

/// Integer points each factor contributes to the 0-100 total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub eligibility: u8,
    pub interest: u8,
    pub urgency: u8,
    pub value: u8,
    pub effort: u8,
}

impl ScoringWeights {
    pub fn sum(&self) -> u16 {
        self.eligibility as u16
            + self.interest as u16
            + self.urgency as u16
            + self.value as u16
            + self.effort as u16
    }
}

pub const WEIGHTS: ScoringWeights = ScoringWeights {
    eligibility: 30,
    interest: 25,
    urgency: 20,
    value: 15,
    effort: 10,
};

pub const INELIGIBLE_EXPLANATION: &str = "Not eligible based on your profile";
pub const FALLBACK_EXPLANATION: &str = "General match based on your profile";
pub const EXPLANATION_SEPARATOR: &str = " • ";

/// One line of the explanation generator
pub struct ExplanationRule {
    pub applies: fn(&ScoreBreakdown) -> bool,
    pub phrase: &'static str,
}

fn strong_interest(s: &ScoreBreakdown) -> bool {
    s.interest > 15
}

fn good_timing(s: &ScoreBreakdown) -> bool {
    s.urgency > 15
}

fn high_value(s: &ScoreBreakdown) -> bool {
    s.value > 10
}

fn low_effort(s: &ScoreBreakdown) -> bool {
    s.effort > 7
}

/// Explanation rules, evaluated in order
pub const EXPLANATION_RULES: &[ExplanationRule] = &[
    ExplanationRule { applies: strong_interest, phrase: "Strong alignment with your interests" },
    ExplanationRule { applies: good_timing, phrase: "Matches your timeline" },
    ExplanationRule { applies: high_value, phrase: "Significant financial value" },
    ExplanationRule { applies: low_effort, phrase: "Fits your available time" },
];

/// Raw 0-1 factor scores before weighting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeafScores {
    pub eligibility: f64,
    pub interest: f64,
    pub urgency: f64,
    pub value: f64,
    pub effort: f64,
}

/// Scale a 0-1 leaf score to its weight, rounding half away from zero
#[inline]
pub fn weighted_points(leaf: f64, weight: u8) -> u8 {
    (leaf.clamp(0.0, 1.0) * weight as f64).round() as u8
}

/// Build the human-readable explanation for a set of components
pub fn explain(breakdown: &ScoreBreakdown) -> String {
    let phrases: Vec<&str> = EXPLANATION_RULES
        .iter()
        .filter(|rule| (rule.applies)(breakdown))
        .map(|rule| rule.phrase)
        .collect();

    if phrases.is_empty() {
        FALLBACK_EXPLANATION.to_string()
    } else {
        phrases.join(EXPLANATION_SEPARATOR)
    }
}

/// Breakdown returned when the eligibility gate fails
pub fn ineligible_breakdown() -> ScoreBreakdown {
    ScoreBreakdown {
        eligibility: 0,
        interest: 0,
        urgency: 0,
        value: 0,
        effort: 0,
        total: 0,
        explanation: INELIGIBLE_EXPLANATION.to_string(),
    }
}

/// Combine leaf scores into a breakdown
///
/// Each component is rounded on its own and the total is the sum of the
/// rounded components, so it can differ from rounding the raw weighted sum.
pub fn combine(leaves: &LeafScores) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown {
        eligibility: weighted_points(leaves.eligibility, WEIGHTS.eligibility),
        interest: weighted_points(leaves.interest, WEIGHTS.interest),
        urgency: weighted_points(leaves.urgency, WEIGHTS.urgency),
        value: weighted_points(leaves.value, WEIGHTS.value),
        effort: weighted_points(leaves.effort, WEIGHTS.effort),
        total: 0,
        explanation: String::new(),
    };

    let total = breakdown.eligibility as u16
        + breakdown.interest as u16
        + breakdown.urgency as u16
        + breakdown.value as u16
        + breakdown.effort as u16;
    breakdown.total = total.min(100) as u8;
    breakdown.explanation = explain(&breakdown);
    breakdown
}

/// Score an opportunity whose deadline has already been validated
///
/// Gate failure short-circuits: no soft factor is computed.
pub fn score_validated(
    profile: &CandidateProfile,
    opportunity: &Opportunity,
    deadline: NaiveDate,
    today: NaiveDate,
) -> ScoreBreakdown {
    let coverage = eligibility_coverage(profile, opportunity);
    if !passes_gate(coverage) {
        return ineligible_breakdown();
    }

    let leaves = LeafScores {
        eligibility: coverage,
        interest: interest_score(&profile.interests, profile.major.as_deref(), &opportunity.tags),
        urgency: urgency_score(days_until(deadline, today), profile),
        value: value_score(opportunity.amount, profile.financial_need),
        effort: effort_score(estimated_hours(opportunity), profile.time_commitment),
    };

    combine(&leaves)
}

/// Calculate the score breakdown (0-100) for one opportunity
pub fn calculate_match_score(
    profile: &CandidateProfile,
    opportunity: &Opportunity,
    today: NaiveDate,
) -> Result<ScoreBreakdown, ValidationError> {
    let deadline = validate_opportunity(opportunity)?;
    Ok(score_validated(profile, opportunity, deadline, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AcademicStatus, EligibilityCriteria, MotivationIntent, OpportunityKind, Requirements,
        TimeCommitment,
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    fn create_opportunity(amount: f64, deadline: &str, tags: &[&str]) -> Opportunity {
        Opportunity {
            id: "opp".to_string(),
            name: "Test".to_string(),
            organization: None,
            kind: OpportunityKind::Scholarship,
            amount,
            deadline: Some(deadline.to_string()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            eligibility: EligibilityCriteria::default(),
            requirements: Requirements::default(),
            estimated_hours: None,
            source_url: None,
        }
    }

    fn leaves(eligibility: f64, interest: f64, urgency: f64, value: f64, effort: f64) -> LeafScores {
        LeafScores { eligibility, interest, urgency, value, effort }
    }

    #[test]
    fn test_weights_sum_to_100() {
        assert_eq!(WEIGHTS.sum(), 100);
    }

    #[test]
    fn test_component_wise_rounding() {
        // 0.5*25 = 12.5 -> 13, 0.5*15 = 7.5 -> 8
        let breakdown = combine(&leaves(0.7, 0.5, 0.5, 0.5, 0.7));
        assert_eq!(breakdown.eligibility, 21);
        assert_eq!(breakdown.interest, 13);
        assert_eq!(breakdown.urgency, 10);
        assert_eq!(breakdown.value, 8);
        assert_eq!(breakdown.effort, 7);
        // Raw sum is 21 + 12.5 + 10 + 7.5 + 7 = 58; rounded components give 59
        assert_eq!(breakdown.total, 59);
    }

    #[test]
    fn test_perfect_leaves_total_100() {
        let breakdown = combine(&leaves(1.0, 1.0, 1.0, 1.0, 1.0));
        assert_eq!(breakdown.total, 100);
        assert_eq!(
            breakdown.explanation,
            "Strong alignment with your interests • Matches your timeline • Significant financial value • Fits your available time"
        );
    }

    #[test]
    fn test_fallback_explanation() {
        let breakdown = combine(&leaves(1.0, 0.5, 0.5, 0.5, 0.5));
        assert_eq!(breakdown.explanation, FALLBACK_EXPLANATION);
    }

    #[test]
    fn test_explanation_thresholds_are_strict() {
        // interest 0.64*25 = 16 qualifies, 0.6*25 = 15 does not
        assert_eq!(combine(&leaves(1.0, 0.64, 0.0, 0.0, 0.0)).explanation, "Strong alignment with your interests");
        assert_eq!(combine(&leaves(1.0, 0.6, 0.0, 0.0, 0.0)).explanation, FALLBACK_EXPLANATION);
        // effort 0.8*10 = 8 qualifies
        assert_eq!(combine(&leaves(1.0, 0.0, 0.0, 0.0, 0.8)).explanation, "Fits your available time");
    }

    #[test]
    fn test_ineligible_short_circuit() {
        let mut profile = CandidateProfile::new(AcademicStatus::HighSchool);
        profile.gpa = Some(2.0);
        profile.interests = vec!["stem".to_string()];
        let mut opp = create_opportunity(10_000.0, "2026-01-20", &["graduate", "stem"]);
        opp.eligibility.gpa_min = Some(3.5);

        let breakdown = calculate_match_score(&profile, &opp, today()).unwrap();
        assert_eq!(breakdown, ineligible_breakdown());
    }

    #[test]
    fn test_urgent_funding_three_days_out() {
        let mut profile = CandidateProfile::new(AcademicStatus::Undergraduate);
        profile.motivation = vec![MotivationIntent::UrgentFunding];
        let opp = create_opportunity(500.0, "2026-01-04", &[]);

        let breakdown = calculate_match_score(&profile, &opp, today()).unwrap();
        assert_eq!(breakdown.urgency, 20);
    }

    #[test]
    fn test_value_extremes() {
        let mut profile = CandidateProfile::new(AcademicStatus::Undergraduate);
        profile.financial_need = Some(4_000.0);

        let full = calculate_match_score(&profile, &create_opportunity(4_000.0, "2026-02-01", &[]), today()).unwrap();
        assert_eq!(full.value, 15);

        let none = calculate_match_score(&profile, &create_opportunity(0.0, "2026-02-01", &[]), today()).unwrap();
        assert_eq!(none.value, 6);
    }

    #[test]
    fn test_effort_flexible() {
        let mut profile = CandidateProfile::new(AcademicStatus::Undergraduate);
        profile.time_commitment = Some(TimeCommitment::Flexible);
        let breakdown = calculate_match_score(&profile, &create_opportunity(0.0, "2026-02-01", &[]), today()).unwrap();
        assert_eq!(breakdown.effort, 8);
    }

    #[test]
    fn test_invalid_deadline_is_error() {
        let profile = CandidateProfile::new(AcademicStatus::Undergraduate);
        let result = calculate_match_score(&profile, &create_opportunity(0.0, "soon", &[]), today());
        assert!(matches!(result, Err(ValidationError::InvalidDeadline { .. })));
    }
}
