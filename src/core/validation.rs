use chrono::{DateTime, NaiveDate};
use thiserror::Error;

use crate::models::Opportunity;

/// Data-quality problems found in a single opportunity record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("opportunity has an empty id")]
    MissingId,

    #[error("opportunity {id}: missing deadline")]
    MissingDeadline { id: String },

    #[error("opportunity {id}: unparseable deadline '{value}'")]
    InvalidDeadline { id: String, value: String },

    #[error("opportunity {id}: award amount must be finite and non-negative, got {amount}")]
    InvalidAmount { id: String, amount: f64 },

    #[error("opportunity {id}: estimated hours must be finite and non-negative, got {hours}")]
    InvalidEstimatedHours { id: String, hours: f64 },
}

/// Parse a deadline as either a calendar date or an RFC 3339 timestamp
///
/// Timestamps are reduced to the calendar date in their own offset.
pub fn parse_deadline(id: &str, raw: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|_| ValidationError::InvalidDeadline {
            id: id.to_string(),
            value: raw.to_string(),
        })
}

/// Check an opportunity record and return its parsed deadline
pub fn validate_opportunity(opportunity: &Opportunity) -> Result<NaiveDate, ValidationError> {
    let id = opportunity.id.trim();
    if id.is_empty() {
        return Err(ValidationError::MissingId);
    }

    if !opportunity.amount.is_finite() || opportunity.amount < 0.0 {
        return Err(ValidationError::InvalidAmount {
            id: id.to_string(),
            amount: opportunity.amount,
        });
    }

    if let Some(hours) = opportunity.estimated_hours {
        if !hours.is_finite() || hours < 0.0 {
            return Err(ValidationError::InvalidEstimatedHours {
                id: id.to_string(),
                hours,
            });
        }
    }

    let raw = opportunity
        .deadline
        .as_deref()
        .ok_or_else(|| ValidationError::MissingDeadline { id: id.to_string() })?;

    parse_deadline(id, raw)
}
