use chrono::NaiveDate;

use crate::models::{CandidateProfile, MotivationIntent};

/// Whole calendar days from `today` until `deadline`; negative once passed
#[inline]
pub fn days_until(deadline: NaiveDate, today: NaiveDate) -> i64 {
    deadline.signed_duration_since(today).num_days()
}

/// Calculate urgency score (0-1)
///
/// Policy, first match wins:
/// 1. urgent funding: <=7 days 1.0, <=30 days 0.7, else 0.3
/// 2. long-term planning: >60 days 1.0, >30 days 0.7, else 0.4
/// 3. otherwise: 7..=60 days 0.8, else 0.5
///
/// Passed deadlines fall through the same branches.
pub fn urgency_score(days_until_deadline: i64, profile: &CandidateProfile) -> f64 {
    let days = days_until_deadline;

    if profile.has_intent(MotivationIntent::UrgentFunding) {
        if days <= 7 {
            1.0
        } else if days <= 30 {
            0.7
        } else {
            0.3
        }
    } else if profile.has_intent(MotivationIntent::LongTermPlanning) {
        if days > 60 {
            1.0
        } else if days > 30 {
            0.7
        } else {
            0.4
        }
    } else if (7..=60).contains(&days) {
        0.8
    } else {
        0.5
    }
}
