use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::engine::Violation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangeViolation {
    StartInPast,
    EndBeforeStart,
}

impl From<RangeViolation> for Violation {
    fn from(violation: RangeViolation) -> Self {
        match violation {
            RangeViolation::StartInPast => Violation::StartInPast,
            RangeViolation::EndBeforeStart => Violation::EndBeforeStart,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RangeCheck {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<RangeViolation>,
}

impl RangeCheck {
    pub const VALID: RangeCheck = RangeCheck {
        valid: true,
        reason: None,
    };

    pub fn invalid(reason: RangeViolation) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }

    pub fn violation(&self) -> Option<Violation> {
        self.reason.map(Violation::from)
    }
}

/// Checks a requested range against `today`.
///
/// A start in the past is reported before an inverted range.
pub fn validate_range(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> RangeCheck {
    if start < today {
        return RangeCheck::invalid(RangeViolation::StartInPast);
    }
    if start > end {
        return RangeCheck::invalid(RangeViolation::EndBeforeStart);
    }
    RangeCheck::VALID
}

/// Same as [`validate_range`] with `now` truncated to midnight.
pub fn validate_range_at(start: NaiveDate, end: NaiveDate, now: NaiveDateTime) -> RangeCheck {
    validate_range(start, end, now.date())
}
