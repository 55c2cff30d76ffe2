use crate::models::{MatchTier, PriorityLevel};

/// Award amount that makes an opportunity high priority on its own
const HIGH_VALUE_AMOUNT: f64 = 10_000.0;
const MEDIUM_VALUE_AMOUNT: f64 = 5_000.0;

/// Totals at or above this are worth a reminder
const NOTIFY_MIN_TOTAL: u8 = 70;

/// Days before the deadline at which an opportunity counts as closing soon
const CLOSING_SOON_DAYS: i64 = 7;

/// Bucket a total score into a match tier
pub fn match_tier(total: u8) -> MatchTier {
    match total {
        85..=u8::MAX => MatchTier::Excellent,
        70..=84 => MatchTier::Great,
        55..=69 => MatchTier::Good,
        _ => MatchTier::Potential,
    }
}

/// Whether the candidate should be reminded about this opportunity
pub fn notification_enabled(total: u8) -> bool {
    total >= NOTIFY_MIN_TOTAL
}

/// Decide how soon the candidate should act
///
/// Deadlines that already passed never count as closing soon.
pub fn priority_level(total: u8, amount: f64, days_until_deadline: i64) -> PriorityLevel {
    let closing_soon = (0..=CLOSING_SOON_DAYS).contains(&days_until_deadline);

    if closing_soon && total >= 70 {
        PriorityLevel::Urgent
    } else if closing_soon || amount >= HIGH_VALUE_AMOUNT {
        PriorityLevel::High
    } else if amount >= MEDIUM_VALUE_AMOUNT || total >= 80 {
        PriorityLevel::Medium
    } else {
        PriorityLevel::Low
    }
}
