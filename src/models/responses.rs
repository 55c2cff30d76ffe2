use serde::{Deserialize, Serialize};
use crate::models::domain::{ExcludedOpportunity, MatchTier, PriorityLevel, RankedOpportunity, ScoreBreakdown};

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    #[serde(rename = "rankingId")]
    pub ranking_id: String,
    pub results: Vec<RankedOpportunity>,
    pub excluded: Vec<ExcludedOpportunity>,
    #[serde(rename = "totalOpportunities")]
    pub total_opportunities: usize,
    #[serde(rename = "belowThreshold")]
    pub below_threshold: usize,
    /// Sum of award amounts over the returned results
    #[serde(rename = "totalValue")]
    pub total_value: f64,
}

/// Response for the single-opportunity score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    #[serde(rename = "opportunityId")]
    pub opportunity_id: String,
    pub score: ScoreBreakdown,
    #[serde(rename = "matchTier")]
    pub match_tier: MatchTier,
    #[serde(rename = "priorityLevel")]
    pub priority_level: PriorityLevel,
    #[serde(rename = "notificationEnabled")]
    pub notification_enabled: bool,
    #[serde(rename = "daysUntilDeadline")]
    pub days_until_deadline: i64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
