// Core algorithm exports
pub mod effort;
pub mod eligibility;
pub mod interest;
pub mod matcher;
pub mod scoring;
pub mod tiers;
pub mod urgency;
pub mod validation;
pub mod value;

pub use eligibility::{eligibility_coverage, passes_gate};
pub use matcher::{MatchError, Matcher, RankResult, MIN_SCORE};
pub use scoring::{calculate_match_score, score_validated, ScoringWeights, WEIGHTS};
pub use tiers::{match_tier, notification_enabled, priority_level};
pub use validation::{validate_opportunity, ValidationError};
