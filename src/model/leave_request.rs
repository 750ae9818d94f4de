use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use utoipa::ToSchema;

use crate::error::EngineError;
use crate::utils::dates::parse_iso_date;

#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveType {
    Paid,
    Sick,
    Maternity,
    Paternity,
    Unpaid,
    Training,
    Bereavement,
}

#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl LeaveStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

/// Leave request snapshot as read from the Leave Service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": 1,
    "employeeId": 1000,
    "type": "paid",
    "startDate": "2024-01-08",
    "endDate": "2024-01-12",
    "status": "pending",
    "reason": "Family trip",
    "documents": [],
    "createdAt": "2024-01-02T09:30:00Z"
}))]
pub struct LeaveRequest {
    pub id: u64,
    pub employee_id: u64,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl LeaveRequest {
    /// Decodes a request payload and checks its date invariant.
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        let request: LeaveRequest = serde_json::from_str(raw)
            .map_err(|e| EngineError::malformed("leaveRequest", e.to_string()))?;
        request.check_invariants()?;
        Ok(request)
    }

    pub fn check_invariants(&self) -> Result<(), EngineError> {
        if self.end_date < self.start_date {
            return Err(EngineError::malformed(
                "endDate",
                format!(
                    "end date {} precedes start date {}",
                    self.end_date, self.start_date
                ),
            ));
        }
        Ok(())
    }

    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }
}

/// What an employee fills in before a request exists on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDraft {
    #[serde(rename = "type")]
    #[schema(example = "paid")]
    pub leave_type: LeaveType,
    #[schema(example = "2026-01-05")]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-09")]
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default)]
    pub documents: Vec<String>,
}

impl LeaveDraft {
    pub fn new(leave_type: LeaveType, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            leave_type,
            start_date,
            end_date,
            reason: None,
            documents: Vec::new(),
        }
    }

    /// Builds a draft from raw form values; missing or unparsable dates are malformed.
    pub fn from_form(
        leave_type: LeaveType,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Self, EngineError> {
        Ok(Self::new(
            leave_type,
            parse_iso_date("startDate", start_date)?,
            parse_iso_date("endDate", end_date)?,
        ))
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.documents.push(document.into());
        self
    }

    /// A reason made only of whitespace counts as missing.
    pub fn has_reason(&self) -> bool {
        self.reason
            .as_deref()
            .is_some_and(|reason| !reason.trim().is_empty())
    }

    pub fn has_documents(&self) -> bool {
        self.documents.iter().any(|doc| !doc.trim().is_empty())
    }
}

impl From<&LeaveRequest> for LeaveDraft {
    fn from(request: &LeaveRequest) -> Self {
        Self {
            leave_type: request.leave_type,
            start_date: request.start_date,
            end_date: request.end_date,
            reason: request.reason.clone(),
            documents: request.documents.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn decodes_service_payload() {
        let raw = r#"{
            "id": 7,
            "employeeId": 42,
            "type": "sick",
            "startDate": "2024-01-08",
            "endDate": "2024-01-09",
            "status": "pending",
            "documents": ["doc-1.pdf"]
        }"#;

        let request = LeaveRequest::from_json(raw).unwrap();
        assert_eq!(request.employee_id, 42);
        assert_eq!(request.leave_type, LeaveType::Sick);
        assert_eq!(request.status, LeaveStatus::Pending);
        assert_eq!(request.reason, None);
        assert_eq!(request.documents, vec!["doc-1.pdf".to_string()]);
        assert!(request.created_at.is_none());
    }

    #[test]
    fn rejects_missing_dates_as_malformed() {
        let raw = r#"{"id": 1, "employeeId": 2, "type": "paid", "endDate": "2024-01-09", "status": "pending"}"#;
        let err = LeaveRequest::from_json(raw).unwrap_err();
        assert!(matches!(err, EngineError::MalformedInput { ref field, .. } if field == "leaveRequest"));
    }

    #[test]
    fn rejects_unparsable_date_as_malformed() {
        let raw = r#"{"id": 1, "employeeId": 2, "type": "paid", "startDate": "2024-13-40", "endDate": "2024-01-09", "status": "pending"}"#;
        assert!(LeaveRequest::from_json(raw).is_err());
    }

    #[test]
    fn rejects_end_before_start_as_malformed() {
        let raw = r#"{"id": 1, "employeeId": 2, "type": "paid", "startDate": "2024-01-10", "endDate": "2024-01-09", "status": "approved"}"#;
        let err = LeaveRequest::from_json(raw).unwrap_err();
        assert!(matches!(err, EngineError::MalformedInput { ref field, .. } if field == "endDate"));
    }

    #[test]
    fn enum_string_forms_are_lowercase() {
        assert_eq!(LeaveType::Bereavement.to_string(), "bereavement");
        assert_eq!(LeaveType::from_str("maternity").unwrap(), LeaveType::Maternity);
        assert_eq!(LeaveStatus::Cancelled.as_ref(), "cancelled");
        assert!(LeaveStatus::from_str("archived").is_err());
    }

    #[test]
    fn only_pending_is_non_terminal() {
        assert!(!LeaveStatus::Pending.is_terminal());
        assert!(LeaveStatus::Approved.is_terminal());
        assert!(LeaveStatus::Rejected.is_terminal());
        assert!(LeaveStatus::Cancelled.is_terminal());
    }

    #[test]
    fn draft_from_form_values() {
        let draft = LeaveDraft::from_form(LeaveType::Paid, Some("2024-01-08"), Some("2024-01-12"))
            .unwrap();
        assert_eq!(draft.start_date, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
        assert_eq!(draft.end_date, NaiveDate::from_ymd_opt(2024, 1, 12).unwrap());

        let err = LeaveDraft::from_form(LeaveType::Paid, Some("2024-01-08"), None).unwrap_err();
        assert!(matches!(err, EngineError::MalformedInput { ref field, .. } if field == "endDate"));
    }

    #[test]
    fn blank_reason_counts_as_missing() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        let draft = LeaveDraft::new(LeaveType::Unpaid, start, start).with_reason("   ");
        assert!(!draft.has_reason());
        assert!(draft.clone().with_reason("moving house").has_reason());
        assert!(!draft.has_documents());
    }
}
