use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Saturday and Sunday are the only non-working days; holidays are not consulted.
pub fn is_working_day(day: NaiveDate) -> bool {
    !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Chargeable days between `start` and `end`, both inclusive.
///
/// A reversed range is an empty range and yields 0.
pub fn working_days(start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }

    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| is_working_day(*day))
        .count() as u32
}

/// Display breakdown of a leave period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDuration {
    #[schema(example = 7)]
    pub calendar_days: u32,
    #[schema(example = 5)]
    pub working_days: u32,
    #[schema(example = 2)]
    pub weekend_days: u32,
}

pub fn leave_duration(start: NaiveDate, end: NaiveDate) -> LeaveDuration {
    if start > end {
        return LeaveDuration::default();
    }

    let calendar_days = ((end - start).num_days() + 1) as u32;
    let working_days = working_days(start, end);

    LeaveDuration {
        calendar_days,
        working_days,
        weekend_days: calendar_days - working_days,
    }
}
