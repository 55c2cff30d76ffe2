// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AcademicStatus, CandidateProfile, EligibilityCriteria, ExcludedOpportunity, MatchTier,
    MotivationIntent, Opportunity, OpportunityKind, PriorityLevel, RankedOpportunity,
    Requirements, ScoreBreakdown, TimeCommitment,
};
pub use requests::{RankRequest, ScoreRequest};
pub use responses::{ErrorResponse, HealthResponse, RankResponse, ScoreResponse};
