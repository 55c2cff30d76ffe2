use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Candidate's current academic standing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AcademicStatus {
    HighSchool,
    Undergraduate,
    Graduate,
    Other,
}

/// Why the candidate is looking for opportunities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotivationIntent {
    UrgentFunding,
    LongTermPlanning,
    Scholarships,
    Hackathons,
    Competitions,
    Open,
}

/// How much time the candidate is willing to put into one application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeCommitment {
    FewHours,
    Weekends,
    Ongoing,
    Flexible,
}

/// Candidate profile captured during onboarding
///
/// Only `academic_status` is required. Every other field defaults to
/// "no signal" and scores neutrally.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CandidateProfile {
    #[serde(rename = "academicStatus")]
    pub academic_status: AcademicStatus,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[validate(range(min = 0.0, max = 4.0))]
    #[serde(default)]
    pub gpa: Option<f64>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub background: Vec<String>,
    #[validate(range(min = 0.0))]
    #[serde(rename = "financialNeed", default)]
    pub financial_need: Option<f64>,
    #[serde(default)]
    pub motivation: Vec<MotivationIntent>,
    #[serde(rename = "timeCommitment", default)]
    pub time_commitment: Option<TimeCommitment>,
    #[serde(default)]
    pub availability: Option<String>,
}

impl CandidateProfile {
    /// Minimal profile with nothing but an academic status
    pub fn new(academic_status: AcademicStatus) -> Self {
        Self {
            academic_status,
            year: None,
            major: None,
            gpa: None,
            interests: vec![],
            background: vec![],
            financial_need: None,
            motivation: vec![],
            time_commitment: None,
            availability: None,
        }
    }

    pub fn has_intent(&self, intent: MotivationIntent) -> bool {
        self.motivation.contains(&intent)
    }
}

/// Kind of opportunity reported by discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityKind {
    #[default]
    Scholarship,
    Hackathon,
    Bounty,
    Competition,
    Grant,
}

/// Eligibility criteria attached to an opportunity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilityCriteria {
    #[serde(rename = "gpaMin", default)]
    pub gpa_min: Option<f64>,
    #[serde(rename = "gradeLevels", default)]
    pub grade_levels: Vec<String>,
    #[serde(default)]
    pub majors: Vec<String>,
    #[serde(default)]
    pub backgrounds: Vec<String>,
}

/// Application requirements that drive the effort estimate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    #[serde(default)]
    pub essay: bool,
    #[serde(default)]
    pub recommendation: bool,
    #[serde(default)]
    pub transcript: bool,
}

/// Either a well-typed value or anything else JSON can hold
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Malformed(IgnoredAny),
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Lenient::<String>::deserialize(deserializer)? {
        Lenient::Valid(id) => Ok(id),
        Lenient::Malformed(_) => Ok(String::new()),
    }
}

/// Malformed amounts become NaN so validation rejects that record alone
fn lenient_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Lenient::<f64>::deserialize(deserializer)? {
        Lenient::Valid(amount) => Ok(amount),
        Lenient::Malformed(_) => Ok(f64::NAN),
    }
}

fn lenient_deadline<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Lenient::<String>::deserialize(deserializer)? {
        Lenient::Valid(deadline) => Ok(Some(deadline)),
        Lenient::Malformed(_) => Ok(None),
    }
}

/// Opportunity record as produced by the discovery service
///
/// Discovery data is not trusted. `id`, `amount` and `deadline` accept any
/// JSON value so a bad record is reported on its own instead of failing the
/// whole request; a missing amount means no award, as discovery sends for
/// unpaid competitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub kind: OpportunityKind,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient_deadline")]
    pub deadline: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub eligibility: EligibilityCriteria,
    #[serde(default)]
    pub requirements: Requirements,
    #[serde(rename = "estimatedHours", default)]
    pub estimated_hours: Option<f64>,
    #[serde(rename = "sourceUrl", default)]
    pub source_url: Option<String>,
}

/// Coarse quality bucket for a total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Excellent,
    Great,
    Good,
    Potential,
}

/// How soon the candidate should act on an opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Urgent,
    High,
    Medium,
    Low,
}

/// Weighted component scores for one opportunity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub eligibility: u8,
    pub interest: u8,
    pub urgency: u8,
    pub value: u8,
    pub effort: u8,
    pub total: u8,
    pub explanation: String,
}

/// One entry of a ranked result list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedOpportunity {
    pub opportunity: Opportunity,
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

/// Opportunity dropped from a ranking pass because of bad data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedOpportunity {
    #[serde(rename = "opportunityId")]
    pub opportunity_id: String,
    pub reason: String,
}
