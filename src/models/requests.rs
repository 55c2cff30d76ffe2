use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{CandidateProfile, Opportunity};

/// Request to rank a batch of opportunities for one candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(nested)]
    pub profile: CandidateProfile,
    #[serde(default)]
    pub opportunities: Vec<Opportunity>,
    /// Evaluation date; defaults to the current UTC date
    #[serde(default)]
    pub today: Option<NaiveDate>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to score a single opportunity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[validate(nested)]
    pub profile: CandidateProfile,
    pub opportunity: Opportunity,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}
