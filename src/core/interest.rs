/// Score returned when either side has no tags to compare
pub const NEUTRAL_INTEREST: f64 = 0.5;

/// Flat bonus when the candidate's major is itself one of the tags
pub const MAJOR_BONUS: f64 = 0.3;

fn normalize(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Interests that match at least one tag by substring containment
///
/// Containment runs in both directions so "science" matches
/// "computer science" and vice versa.
pub fn shared_interests(interests: &[String], tags: &[String]) -> Vec<String> {
    let tags = normalize(tags);
    normalize(interests)
        .into_iter()
        .filter(|interest| {
            tags.iter()
                .any(|tag| tag.contains(interest.as_str()) || interest.contains(tag.as_str()))
        })
        .collect()
}

/// Calculate interest score (0-1)
///
/// Jaccard-style overlap between candidate interests and opportunity tags,
/// plus a bonus when the major equals a tag.
pub fn interest_score(interests: &[String], major: Option<&str>, tags: &[String]) -> f64 {
    let interests_norm = normalize(interests);
    let tags_norm = normalize(tags);

    if interests_norm.is_empty() || tags_norm.is_empty() {
        return NEUTRAL_INTEREST;
    }

    let intersection = shared_interests(interests, tags).len() as f64;
    let union = interests_norm.len() as f64 + tags_norm.len() as f64 - intersection;

    let mut score = if union > 0.0 {
        (intersection / union).clamp(0.0, 1.0)
    } else {
        0.0
    };

    if let Some(major) = major.map(|m| m.trim().to_lowercase()) {
        if !major.is_empty() && tags_norm.contains(&major) {
            score = (score + MAJOR_BONUS).min(1.0);
        }
    }

    score
}
