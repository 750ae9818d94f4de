use chrono::NaiveDate;

use crate::engine::Violation;
use crate::model::{LeaveBalance, LeaveDraft, LeaveTypeRule};

/// Per-type requirements: reason, documents, maximum length, notice, probation.
///
/// `working_days` is the chargeable length of the draft.
pub fn check_policy(
    rule: &LeaveTypeRule,
    draft: &LeaveDraft,
    working_days: u32,
    balance: &LeaveBalance,
    today: NaiveDate,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if rule.reason_required && !draft.has_reason() {
        violations.push(Violation::ReasonRequired);
    }

    if rule.document_required && !draft.has_documents() {
        violations.push(Violation::DocumentRequired);
    }

    if let Some(max_days) = rule.max_duration_days {
        if working_days > max_days {
            violations.push(Violation::ExceedsMaxDuration {
                max_days,
                requested_days: working_days,
            });
        }
    }

    if rule.min_notice_days > 0 {
        let notice_days = (draft.start_date - today).num_days();
        if notice_days < i64::from(rule.min_notice_days) {
            violations.push(Violation::InsufficientNotice {
                required_days: rule.min_notice_days,
                notice_days,
            });
        }
    }

    if balance.probation && !rule.allowed_during_probation {
        violations.push(Violation::ProbationRestricted);
    }

    violations
}
