use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::EngineError;

/// Balance snapshot owned by the Leave Service; the engine never debits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "employeeId": 1000,
    "totalAccrued": 25.0,
    "available": 18.5,
    "taken": 6.5,
    "hireDate": "2021-03-01",
    "probation": false
}))]
pub struct LeaveBalance {
    pub employee_id: u64,
    pub total_accrued: f64,
    pub available: f64,
    pub taken: f64,
    pub hire_date: NaiveDate,
    #[serde(default)]
    pub probation: bool,
}

impl LeaveBalance {
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        serde_json::from_str(raw).map_err(|e| EngineError::malformed("leaveBalance", e.to_string()))
    }

    /// available == total accrued - taken, up to rounding.
    pub fn is_consistent(&self) -> bool {
        (self.total_accrued - self.taken - self.available).abs() < 1e-3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_fractional_balance() {
        let raw = r#"{"employeeId": 9, "totalAccrued": 20, "available": 12.5, "taken": 7.5, "hireDate": "2020-02-01"}"#;
        let balance = LeaveBalance::from_json(raw).unwrap();
        assert_eq!(balance.available, 12.5);
        assert!(!balance.probation);
        assert!(balance.is_consistent());
    }

    #[test]
    fn flags_inconsistent_snapshot() {
        let balance = LeaveBalance {
            employee_id: 1,
            total_accrued: 20.0,
            available: 15.0,
            taken: 10.0,
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            probation: false,
        };
        assert!(!balance.is_consistent());
    }

    #[test]
    fn missing_hire_date_is_malformed() {
        let raw = r#"{"employeeId": 9, "totalAccrued": 20, "available": 12.5, "taken": 7.5}"#;
        let err = LeaveBalance::from_json(raw).unwrap_err();
        assert!(err.to_string().contains("leaveBalance"));
    }
}
