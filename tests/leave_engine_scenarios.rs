use chrono::NaiveDate;
use hrm_leave::engine::{
    EligibilityViolation, LeaveAction, RangeViolation, UrgencyTag, can_approve, can_cancel,
    check_transition, classify_urgency, evaluate_eligibility, validate_range, working_days,
};
use hrm_leave::{
    LeaveAccountingEngine, LeaveBalance, LeaveDraft, LeavePolicy, LeaveRequest, LeaveStatus,
    LeaveType, Violation,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn balance_json(available: f64, probation: bool) -> String {
    format!(
        r#"{{"employeeId": 40, "totalAccrued": 20, "available": {available}, "taken": {taken}, "hireDate": "2021-06-01", "probation": {probation}}}"#,
        taken = 20.0 - available,
    )
}

#[test]
fn monday_to_friday_is_five_working_days() {
    assert_eq!(working_days(date(2024, 1, 8), date(2024, 1, 12)), 5);
}

#[test]
fn weekend_request_is_zero_working_days() {
    assert_eq!(working_days(date(2024, 1, 6), date(2024, 1, 7)), 0);
}

#[test]
fn paid_leave_three_available_five_requested() {
    let balance = LeaveBalance::from_json(&balance_json(3.0, false)).unwrap();
    let policy = LeavePolicy::default();

    let result = evaluate_eligibility(&balance, 5, policy.rule_for(LeaveType::Paid));
    assert!(!result.eligible);
    assert_eq!(result.reason, Some(EligibilityViolation::InsufficientBalance));
    assert_eq!(result.deficit, Some(2.0));
}

#[test]
fn unpaid_leave_ignores_balance() {
    let balance = LeaveBalance::from_json(&balance_json(0.0, false)).unwrap();
    let policy = LeavePolicy::default();

    let result = evaluate_eligibility(&balance, 12, policy.rule_for(LeaveType::Unpaid));
    assert!(result.eligible);
    assert_eq!(result.deficit_days(), 0.0);
}

#[test]
fn start_before_today_is_in_the_past() {
    let check = validate_range(date(2024, 1, 5), date(2024, 1, 12), date(2024, 1, 10));
    assert!(!check.valid);
    assert_eq!(check.reason, Some(RangeViolation::StartInPast));
}

#[test]
fn approved_request_cannot_be_cancelled() {
    assert!(!can_cancel(LeaveStatus::Approved));
    assert!(!can_approve(LeaveStatus::Approved));
    assert!(check_transition(LeaveStatus::Approved, LeaveAction::Cancel).is_err());
    assert!(can_cancel(LeaveStatus::Pending));
}

#[test]
fn assessment_of_decoded_request() {
    let raw = r#"{
        "id": 12,
        "employeeId": 40,
        "type": "bereavement",
        "startDate": "2024-01-15",
        "endDate": "2024-01-23",
        "status": "pending",
        "createdAt": "2024-01-09T10:00:00Z"
    }"#;
    let request = LeaveRequest::from_json(raw).unwrap();
    let balance = LeaveBalance::from_json(&balance_json(0.0, true)).unwrap();
    let engine = LeaveAccountingEngine::default();

    let assessment = engine.assess(&LeaveDraft::from(&request), &balance, date(2024, 1, 10));
    assert_eq!(assessment.working_days, 7);
    assert_eq!(assessment.duration.calendar_days, 9);
    assert_eq!(
        assessment.violations,
        vec![Violation::ExceedsMaxDuration {
            max_days: 5,
            requested_days: 7,
        }]
    );

    let urgency = classify_urgency(&request, date(2024, 1, 10)).unwrap();
    assert_eq!(urgency.tag, UrgencyTag::Upcoming);
    assert_eq!(urgency.days_until_start, 5);
}

#[test]
fn assessment_serializes_tags_not_messages() {
    let balance = LeaveBalance::from_json(&balance_json(1.0, false)).unwrap();
    let draft = LeaveDraft::new(LeaveType::Paid, date(2024, 1, 8), date(2024, 1, 9));
    let assessment = LeaveAccountingEngine::default().assess(&draft, &balance, date(2024, 1, 10));

    let value = serde_json::to_value(&assessment).unwrap();
    assert_eq!(value["violations"][0]["reason"], "START_IN_PAST");
    assert_eq!(value["violations"][1]["reason"], "INSUFFICIENT_BALANCE");
    assert_eq!(value["violations"][1]["deficit"], 1.0);
    assert_eq!(value["range"]["reason"], "START_IN_PAST");
    assert_eq!(value["eligibility"]["eligible"], false);
}
