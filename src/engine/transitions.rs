//! Advisory request lifecycle: `pending -> {approved, rejected, cancelled}`.
//!
//! The Leave Service stays authoritative; these predicates only drive UI
//! enablement and refuse obviously illegal actions before a call is made.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};
use utoipa::ToSchema;

use crate::engine::Violation;
use crate::model::LeaveStatus;

#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, ToSchema, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveAction {
    Approve,
    Reject,
    Cancel,
}

impl LeaveAction {
    pub fn target(self) -> LeaveStatus {
        match self {
            LeaveAction::Approve => LeaveStatus::Approved,
            LeaveAction::Reject => LeaveStatus::Rejected,
            LeaveAction::Cancel => LeaveStatus::Cancelled,
        }
    }
}

pub fn can_cancel(status: LeaveStatus) -> bool {
    !status.is_terminal()
}

pub fn can_approve(status: LeaveStatus) -> bool {
    !status.is_terminal()
}

/// Rejection follows the approval predicate.
pub fn can_reject(status: LeaveStatus) -> bool {
    can_approve(status)
}

pub fn is_allowed(status: LeaveStatus, action: LeaveAction) -> bool {
    match action {
        LeaveAction::Approve => can_approve(status),
        LeaveAction::Reject => can_reject(status),
        LeaveAction::Cancel => can_cancel(status),
    }
}

/// Resulting status of `action`, or `INVALID_TRANSITION`.
pub fn check_transition(status: LeaveStatus, action: LeaveAction) -> Result<LeaveStatus, Violation> {
    if is_allowed(status, action) {
        Ok(action.target())
    } else {
        Err(Violation::InvalidTransition {
            from: status,
            action,
        })
    }
}
