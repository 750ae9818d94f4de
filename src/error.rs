use derive_more::Display;

use crate::engine::Violation;

/// Input the engine cannot reason about at all (missing or unparsable data).
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[display(fmt = "malformed input for `{}`: {}", field, detail)]
    MalformedInput { field: String, detail: String },
}

impl EngineError {
    pub fn malformed(field: impl Into<String>, detail: impl Into<String>) -> Self {
        EngineError::MalformedInput {
            field: field.into(),
            detail: detail.into(),
        }
    }
}

impl std::error::Error for EngineError {}

/// Failure of a leave action before or while it is sent to the Leave Service.
#[derive(Debug, Display)]
pub enum ActionError {
    #[display(fmt = "forbidden: {}", _0)]
    Forbidden(&'static str),

    #[display(fmt = "no employee profile linked to this session")]
    NoEmployeeProfile,

    #[display(fmt = "a rejection reason is required")]
    MissingRejectionReason,

    /// Business rules refused the action locally; nothing was sent.
    #[display(fmt = "refused locally: {:?}", _0)]
    Rejected(Vec<Violation>),

    #[display(fmt = "leave service error: {}", _0)]
    Remote(anyhow::Error),
}

impl ActionError {
    /// Violations behind a local refusal, empty for every other kind.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ActionError::Rejected(violations) => violations,
            _ => &[],
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ActionError::Remote(_))
    }
}

impl std::error::Error for ActionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ActionError::Remote(e) => Some(&**e),
            _ => None,
        }
    }
}

impl From<Violation> for ActionError {
    fn from(violation: Violation) -> Self {
        ActionError::Rejected(vec![violation])
    }
}
