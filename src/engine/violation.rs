use serde::{Deserialize, Serialize};
use strum_macros::IntoStaticStr;

use crate::engine::transitions::LeaveAction;
use crate::model::LeaveStatus;

/// Business-rule outcome refusing a request or action.
///
/// Carries a stable tag plus structured data; wording is left to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, IntoStaticStr)]
#[serde(
    tag = "reason",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Violation {
    StartInPast,
    EndBeforeStart,
    InsufficientBalance {
        deficit: f64,
    },
    InvalidTransition {
        from: LeaveStatus,
        action: LeaveAction,
    },
    ReasonRequired,
    DocumentRequired,
    ExceedsMaxDuration {
        max_days: u32,
        requested_days: u32,
    },
    InsufficientNotice {
        required_days: u32,
        notice_days: i64,
    },
    ProbationRestricted,
}

impl Violation {
    pub fn code(&self) -> &'static str {
        self.into()
    }
}
