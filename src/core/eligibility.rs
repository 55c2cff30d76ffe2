use crate::models::{AcademicStatus, CandidateProfile, Opportunity};

/// Factor applied to the coverage fraction for every unmet eligibility signal
pub const MISMATCH_PENALTY: f64 = 0.7;

/// Coverage below this value makes an opportunity ineligible
pub const ELIGIBILITY_THRESHOLD: f64 = 0.5;

/// Infer which academic levels a single tag refers to
///
/// Whole-tag match only: "undergraduate" must not read as "graduate".
fn academic_level(tag: &str) -> Option<AcademicStatus> {
    match tag.trim().to_lowercase().as_str() {
        "high school" | "high-school" | "highschool" | "high school students" => {
            Some(AcademicStatus::HighSchool)
        }
        "undergraduate" | "undergrad" | "undergraduates" | "college" | "bachelor" | "bachelors" => {
            Some(AcademicStatus::Undergraduate)
        }
        "graduate" | "grad" | "masters" | "master's" | "phd" | "doctoral" | "postgraduate" => {
            Some(AcademicStatus::Graduate)
        }
        _ => None,
    }
}

/// Academic levels an opportunity targets, from its tags and grade levels
pub fn inferred_levels(opportunity: &Opportunity) -> Vec<AcademicStatus> {
    let mut levels = Vec::new();
    for level in opportunity
        .tags
        .iter()
        .chain(opportunity.eligibility.grade_levels.iter())
        .filter_map(|tag| academic_level(tag))
    {
        if !levels.contains(&level) {
            levels.push(level);
        }
    }
    levels
}

/// Case-insensitive substring containment in either direction
fn loosely_matches(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

fn level_matches(profile: &CandidateProfile, levels: &[AcademicStatus]) -> bool {
    levels.is_empty()
        || profile.academic_status == AcademicStatus::Other
        || levels.contains(&profile.academic_status)
}

fn gpa_matches(profile: &CandidateProfile, opportunity: &Opportunity) -> bool {
    match (opportunity.eligibility.gpa_min, profile.gpa) {
        (Some(min), Some(gpa)) => gpa >= min,
        _ => true,
    }
}

fn major_matches(profile: &CandidateProfile, opportunity: &Opportunity) -> bool {
    let majors = &opportunity.eligibility.majors;
    match profile.major.as_deref() {
        Some(major) if !major.trim().is_empty() && !majors.is_empty() => {
            majors.iter().any(|m| loosely_matches(m, major))
        }
        _ => true,
    }
}

fn background_matches(profile: &CandidateProfile, opportunity: &Opportunity) -> bool {
    let required = &opportunity.eligibility.backgrounds;
    if required.is_empty() || profile.background.is_empty() {
        return true;
    }
    required
        .iter()
        .any(|r| profile.background.iter().any(|b| loosely_matches(r, b)))
}

/// Compute the fraction of eligibility signals the candidate satisfies
///
/// Starts at 1.0 and multiplies by [`MISMATCH_PENALTY`] for every signal
/// that does not match. Absent profile fields always pass, and an
/// opportunity with no eligibility information keeps full coverage.
pub fn eligibility_coverage(profile: &CandidateProfile, opportunity: &Opportunity) -> f64 {
    let levels = inferred_levels(opportunity);

    let signals = [
        level_matches(profile, &levels),
        gpa_matches(profile, opportunity),
        major_matches(profile, opportunity),
        background_matches(profile, opportunity),
    ];

    let coverage = signals
        .iter()
        .filter(|matched| !**matched)
        .fold(1.0, |acc, _| acc * MISMATCH_PENALTY);

    coverage.clamp(0.0, 1.0)
}

/// Whether a coverage fraction clears the gate
#[inline]
pub fn passes_gate(coverage: f64) -> bool {
    coverage >= ELIGIBILITY_THRESHOLD
}
