use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::LeaveRequest;

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyTag {
    AlreadyStarted,
    Urgent,
    Upcoming,
    Normal,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Urgency {
    pub tag: UrgencyTag,
    #[schema(example = 2)]
    pub days_until_start: i64,
}

/// Inclusive upper bounds, in days, of the `URGENT` and `UPCOMING` bands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgencyThresholds {
    pub urgent_within: i64,
    pub upcoming_within: i64,
}

impl Default for UrgencyThresholds {
    fn default() -> Self {
        Self {
            urgent_within: 3,
            upcoming_within: 7,
        }
    }
}

impl UrgencyThresholds {
    pub fn classify(&self, days_until_start: i64) -> UrgencyTag {
        if days_until_start < 0 {
            UrgencyTag::AlreadyStarted
        } else if days_until_start <= self.urgent_within {
            UrgencyTag::Urgent
        } else if days_until_start <= self.upcoming_within {
            UrgencyTag::Upcoming
        } else {
            UrgencyTag::Normal
        }
    }
}

/// `ceil((start - now) / 1 day)`, with `start` taken at midnight.
pub fn days_until_start(start: NaiveDate, now: NaiveDateTime) -> i64 {
    let seconds = (start.and_time(NaiveTime::MIN) - now).num_seconds();
    let whole = seconds.div_euclid(SECONDS_PER_DAY);
    if seconds.rem_euclid(SECONDS_PER_DAY) > 0 {
        whole + 1
    } else {
        whole
    }
}

/// `None` unless the request is still pending.
pub fn classify_urgency_at(
    request: &LeaveRequest,
    now: NaiveDateTime,
    thresholds: &UrgencyThresholds,
) -> Option<Urgency> {
    if !request.is_pending() {
        return None;
    }

    let days_until_start = days_until_start(request.start_date, now);
    Some(Urgency {
        tag: thresholds.classify(days_until_start),
        days_until_start,
    })
}

pub fn classify_urgency(request: &LeaveRequest, today: NaiveDate) -> Option<Urgency> {
    classify_urgency_at(
        request,
        today.and_time(NaiveTime::MIN),
        &UrgencyThresholds::default(),
    )
}
