//! ScholarStream matching - opportunity ranking engine and HTTP service
//!
//! This library scores scholarships, hackathons, bounties and competitions
//! against a candidate profile. Each opportunity passes through a hard
//! eligibility gate and five weighted factors, and the ranked list carries a
//! plain-language explanation for every entry.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, Matcher, RankResult, ValidationError, WEIGHTS};
pub use crate::models::{CandidateProfile, Opportunity, RankedOpportunity, ScoreBreakdown};
