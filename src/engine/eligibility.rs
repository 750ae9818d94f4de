use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::engine::Violation;
use crate::model::{LeaveBalance, LeaveTypeRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EligibilityViolation {
    InsufficientBalance,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Eligibility {
    pub eligible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<EligibilityViolation>,
    /// Days missing from the balance; absent when eligible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deficit: Option<f64>,
}

impl Eligibility {
    pub const ELIGIBLE: Eligibility = Eligibility {
        eligible: true,
        reason: None,
        deficit: None,
    };

    pub fn insufficient(deficit: f64) -> Self {
        Self {
            eligible: false,
            reason: Some(EligibilityViolation::InsufficientBalance),
            deficit: Some(deficit),
        }
    }

    pub fn deficit_days(&self) -> f64 {
        self.deficit.unwrap_or(0.0)
    }

    pub fn violation(&self) -> Option<Violation> {
        match self.reason {
            Some(EligibilityViolation::InsufficientBalance) => Some(Violation::InsufficientBalance {
                deficit: self.deficit_days(),
            }),
            None => None,
        }
    }
}

/// Balance check only; date validity is judged elsewhere.
pub fn evaluate_eligibility(
    balance: &LeaveBalance,
    requested_days: u32,
    rule: &LeaveTypeRule,
) -> Eligibility {
    if !rule.draws_balance {
        return Eligibility::ELIGIBLE;
    }

    // NaN never compares as enough; count it as an empty balance.
    let available = if balance.available.is_nan() {
        0.0
    } else {
        balance.available
    };

    let requested = f64::from(requested_days);
    if available >= requested {
        Eligibility::ELIGIBLE
    } else {
        Eligibility::insufficient(requested - available)
    }
}
