use crate::models::{Opportunity, TimeCommitment};

/// Hours every application takes regardless of requirements
pub const BASE_HOURS: f64 = 2.0;
pub const ESSAY_HOURS: f64 = 3.0;
pub const RECOMMENDATION_HOURS: f64 = 1.0;
pub const DOCUMENT_HOURS: f64 = 0.5;

/// Estimate the hours needed to apply
///
/// An upstream estimate from discovery wins; otherwise it is derived from
/// the requirement flags.
pub fn estimated_hours(opportunity: &Opportunity) -> f64 {
    if let Some(hours) = opportunity.estimated_hours {
        return hours;
    }

    let req = &opportunity.requirements;
    let mut hours = BASE_HOURS;
    if req.essay {
        hours += ESSAY_HOURS;
    }
    if req.recommendation {
        hours += RECOMMENDATION_HOURS;
    }
    if req.transcript {
        hours += DOCUMENT_HOURS;
    }
    hours
}

/// Calculate effort score (0-1) against the candidate's time preference
pub fn effort_score(hours: f64, preference: Option<TimeCommitment>) -> f64 {
    match preference {
        Some(TimeCommitment::FewHours) => {
            if hours <= 5.0 {
                1.0
            } else if hours <= 10.0 {
                0.6
            } else {
                0.3
            }
        }
        Some(TimeCommitment::Weekends) => {
            if (10.0..=48.0).contains(&hours) {
                1.0
            } else {
                0.5
            }
        }
        _ => 0.8,
    }
}
