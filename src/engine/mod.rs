//! Leave accounting: day counting, validation and eligibility.
//!
//! Every function here is a pure computation over caller-supplied snapshots.

pub mod date_range;
pub mod eligibility;
pub mod policy;
pub mod transitions;
pub mod urgency;
pub mod violation;
pub mod working_days;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::model::{LeaveBalance, LeaveDraft, LeavePolicy, LeaveRequest, LeaveTypeRule};

pub use date_range::{RangeCheck, RangeViolation, validate_range, validate_range_at};
pub use eligibility::{Eligibility, EligibilityViolation, evaluate_eligibility};
pub use policy::check_policy;
pub use transitions::{
    LeaveAction, can_approve, can_cancel, can_reject, check_transition, is_allowed,
};
pub use urgency::{
    Urgency, UrgencyTag, UrgencyThresholds, classify_urgency, classify_urgency_at,
    days_until_start,
};
pub use violation::Violation;
pub use working_days::{LeaveDuration, is_working_day, leave_duration, working_days};

/// Everything the engine can say about one draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveAssessment {
    pub working_days: u32,
    pub duration: LeaveDuration,
    pub range: RangeCheck,
    pub eligibility: Eligibility,
    /// Range, then policy, then balance violations.
    pub violations: Vec<Violation>,
}

impl LeaveAssessment {
    pub fn is_acceptable(&self) -> bool {
        self.violations.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct LeaveAccountingEngine {
    policy: LeavePolicy,
    thresholds: UrgencyThresholds,
}

impl LeaveAccountingEngine {
    pub fn new(policy: LeavePolicy, thresholds: UrgencyThresholds) -> Self {
        Self { policy, thresholds }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(config.load_policy()?, config.urgency_thresholds()?))
    }

    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    pub fn thresholds(&self) -> &UrgencyThresholds {
        &self.thresholds
    }

    pub fn rule_for(&self, draft: &LeaveDraft) -> &LeaveTypeRule {
        self.policy.rule_for(draft.leave_type)
    }

    /// Runs range, policy and balance checks for `draft` against `balance`.
    pub fn assess(
        &self,
        draft: &LeaveDraft,
        balance: &LeaveBalance,
        today: NaiveDate,
    ) -> LeaveAssessment {
        if !balance.is_consistent() {
            warn!(
                employee_id = balance.employee_id,
                total_accrued = balance.total_accrued,
                available = balance.available,
                taken = balance.taken,
                "Balance snapshot does not add up; judging against `available`"
            );
        }

        let rule = self.rule_for(draft);
        let duration = leave_duration(draft.start_date, draft.end_date);
        let range = validate_range(draft.start_date, draft.end_date, today);

        let mut violations: Vec<Violation> = range.violation().into_iter().collect();
        violations.extend(check_policy(
            rule,
            draft,
            duration.working_days,
            balance,
            today,
        ));

        let eligibility = evaluate_eligibility(balance, duration.working_days, rule);
        violations.extend(eligibility.violation());

        debug!(
            employee_id = balance.employee_id,
            leave_type = %draft.leave_type,
            working_days = duration.working_days,
            violations = violations.len(),
            "Leave draft assessed"
        );

        LeaveAssessment {
            working_days: duration.working_days,
            duration,
            range,
            eligibility,
            violations,
        }
    }

    pub fn urgency(&self, request: &LeaveRequest, now: NaiveDateTime) -> Option<Urgency> {
        classify_urgency_at(request, now, &self.thresholds)
    }
}
