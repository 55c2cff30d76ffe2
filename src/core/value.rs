/// Score returned when the candidate stated no financial need
pub const NEUTRAL_VALUE: f64 = 0.5;

/// Share of the stated need an award covers, capped at full coverage
#[inline]
pub fn coverage_ratio(amount: f64, need: f64) -> f64 {
    (amount / need).clamp(0.0, 1.0)
}

/// Calculate value score (0-1)
///
/// Step curve over the coverage ratio. Surplus funding beyond the stated
/// need scores the same as exact coverage.
pub fn value_score(amount: f64, financial_need: Option<f64>) -> f64 {
    let need = match financial_need {
        Some(need) if need > 0.0 => need,
        _ => return NEUTRAL_VALUE,
    };

    let ratio = coverage_ratio(amount, need);

    if ratio >= 0.8 {
        1.0
    } else if ratio >= 0.5 {
        0.8
    } else if ratio >= 0.2 {
        0.6
    } else {
        0.4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_need_is_neutral() {
        assert_eq!(value_score(5000.0, None), 0.5);
        assert_eq!(value_score(5000.0, Some(0.0)), 0.5);
    }

    #[test]
    fn test_ratio_never_exceeds_one() {
        assert_eq!(coverage_ratio(50_000.0, 1000.0), 1.0);
        assert_eq!(value_score(50_000.0, Some(1000.0)), 1.0);
    }

    #[test]
    fn test_step_curve() {
        assert_eq!(value_score(10_000.0, Some(10_000.0)), 1.0);
        assert_eq!(value_score(8_000.0, Some(10_000.0)), 1.0);
        assert_eq!(value_score(5_000.0, Some(10_000.0)), 0.8);
        assert_eq!(value_score(2_000.0, Some(10_000.0)), 0.6);
        assert_eq!(value_score(1_999.0, Some(10_000.0)), 0.4);
        assert_eq!(value_score(0.0, Some(10_000.0)), 0.4);
    }
}
