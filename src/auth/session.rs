use serde::{Deserialize, Serialize};

use crate::error::ActionError;
use crate::model::{LeaveRequest, role::Role};

/// Caller identity, passed explicitly into every role check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub user_id: u64,
    pub username: String,
    pub role: Role,

    /// Present only if this user is linked to an employee record
    pub employee_id: Option<u64>,
}

impl SessionContext {
    /// Builds a context from directory claims; `None` on an unknown role id.
    pub fn from_claims(
        user_id: u64,
        username: impl Into<String>,
        role_id: u8,
        employee_id: Option<u64>,
    ) -> Option<Self> {
        Some(Self {
            user_id,
            username: username.into(),
            role: Role::from_id(role_id)?,
            employee_id,
        })
    }

    pub fn require_hr_or_admin(&self) -> Result<(), ActionError> {
        if self.role.is_employer() {
            Ok(())
        } else {
            Err(ActionError::Forbidden("HR/Admin only"))
        }
    }

    pub fn require_employee_profile(&self) -> Result<u64, ActionError> {
        self.employee_id.ok_or(ActionError::NoEmployeeProfile)
    }

    pub fn owns(&self, request: &LeaveRequest) -> bool {
        self.employee_id == Some(request.employee_id)
    }
}
