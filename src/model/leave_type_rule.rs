use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use utoipa::ToSchema;

use crate::error::EngineError;
use crate::model::leave_request::LeaveType;

/// Per leave-type configuration used to branch validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LeaveTypeRule {
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub draws_balance: bool,
    #[serde(default)]
    pub reason_required: bool,
    #[serde(default)]
    pub document_required: bool,
    /// Upper bound in working days.
    #[serde(default)]
    pub max_duration_days: Option<u32>,
    #[serde(default)]
    pub min_notice_days: u32,
    #[serde(default = "allowed_by_default")]
    pub allowed_during_probation: bool,
}

fn allowed_by_default() -> bool {
    true
}

impl LeaveTypeRule {
    /// Fallback mapping used when no policy file overrides a type.
    pub fn builtin(leave_type: LeaveType) -> Self {
        let rule = Self {
            leave_type,
            draws_balance: false,
            reason_required: false,
            document_required: false,
            max_duration_days: None,
            min_notice_days: 0,
            allowed_during_probation: true,
        };

        match leave_type {
            LeaveType::Paid => Self {
                draws_balance: true,
                allowed_during_probation: false,
                ..rule
            },
            LeaveType::Sick => Self {
                document_required: true,
                ..rule
            },
            LeaveType::Maternity => Self {
                document_required: true,
                ..rule
            },
            LeaveType::Paternity => Self {
                document_required: true,
                max_duration_days: Some(10),
                ..rule
            },
            LeaveType::Unpaid => Self {
                reason_required: true,
                ..rule
            },
            LeaveType::Training => Self {
                reason_required: true,
                ..rule
            },
            LeaveType::Bereavement => Self {
                max_duration_days: Some(5),
                ..rule
            },
        }
    }
}

static BUILTIN_RULES: Lazy<HashMap<LeaveType, LeaveTypeRule>> = Lazy::new(|| {
    LeaveType::iter()
        .map(|leave_type| (leave_type, LeaveTypeRule::builtin(leave_type)))
        .collect()
});

/// One rule per leave type; always complete.
#[derive(Debug, Clone, PartialEq)]
pub struct LeavePolicy {
    rules: HashMap<LeaveType, LeaveTypeRule>,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            rules: BUILTIN_RULES.clone(),
        }
    }
}

impl LeavePolicy {
    /// Built-in rules with the given entries replacing their type's default.
    pub fn with_overrides(overrides: impl IntoIterator<Item = LeaveTypeRule>) -> Self {
        let mut policy = Self::default();
        for rule in overrides {
            policy.rules.insert(rule.leave_type, rule);
        }
        policy
    }

    /// Parses a JSON array of rules.
    pub fn from_json_str(raw: &str) -> Result<Self, EngineError> {
        let overrides: Vec<LeaveTypeRule> = serde_json::from_str(raw)
            .map_err(|e| EngineError::malformed("leavePolicy", e.to_string()))?;
        Ok(Self::with_overrides(overrides))
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading leave policy file {}", path.display()))?;
        let policy = Self::from_json_str(&raw)
            .with_context(|| format!("parsing leave policy file {}", path.display()))?;
        tracing::info!(path = %path.display(), "Leave policy loaded");
        Ok(policy)
    }

    pub fn rule_for(&self, leave_type: LeaveType) -> &LeaveTypeRule {
        &self.rules[&leave_type]
    }

    pub fn rules(&self) -> impl Iterator<Item = &LeaveTypeRule> {
        LeaveType::iter().map(move |leave_type| self.rule_for(leave_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_covers_every_type() {
        let policy = LeavePolicy::default();
        assert_eq!(policy.rules().count(), 7);
        assert!(policy.rule_for(LeaveType::Paid).draws_balance);
        assert!(!policy.rule_for(LeaveType::Unpaid).draws_balance);
        assert!(policy.rule_for(LeaveType::Unpaid).reason_required);
        assert!(policy.rule_for(LeaveType::Sick).document_required);
    }

    #[test]
    fn overrides_replace_only_their_type() {
        let raw = r#"[
            {"type": "sick", "drawsBalance": true, "minNoticeDays": 0},
            {"type": "paid", "drawsBalance": true, "minNoticeDays": 14, "allowedDuringProbation": true}
        ]"#;
        let policy = LeavePolicy::from_json_str(raw).unwrap();

        let sick = policy.rule_for(LeaveType::Sick);
        assert!(sick.draws_balance);
        assert!(!sick.document_required);

        let paid = policy.rule_for(LeaveType::Paid);
        assert_eq!(paid.min_notice_days, 14);
        assert!(paid.allowed_during_probation);

        assert_eq!(
            policy.rule_for(LeaveType::Bereavement),
            &LeaveTypeRule::builtin(LeaveType::Bereavement)
        );
    }

    #[test]
    fn probation_flag_keeps_its_configured_meaning() {
        let raw = r#"[{"type": "paid", "drawsBalance": true, "allowedDuringProbation": false}]"#;
        let policy = LeavePolicy::from_json_str(raw).unwrap();
        assert!(!policy.rule_for(LeaveType::Paid).allowed_during_probation);

        let raw = r#"[{"type": "training", "drawsBalance": false}]"#;
        let policy = LeavePolicy::from_json_str(raw).unwrap();
        assert!(policy.rule_for(LeaveType::Training).allowed_during_probation);
    }

    #[test]
    fn misspelled_rule_key_is_malformed() {
        let raw = r#"[{"type": "unpaid", "drawsBalance": false, "reasonRequird": true}]"#;
        let err = LeavePolicy::from_json_str(raw).unwrap_err();
        assert!(matches!(err, EngineError::MalformedInput { ref field, .. } if field == "leavePolicy"));
        assert!(err.to_string().contains("reasonRequird"));
    }

    #[test]
    fn unknown_type_in_policy_is_malformed() {
        let raw = r#"[{"type": "sabbatical", "drawsBalance": true}]"#;
        assert!(matches!(
            LeavePolicy::from_json_str(raw),
            Err(EngineError::MalformedInput { .. })
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = LeavePolicy::load(Path::new("/nonexistent/leave-policy.json")).unwrap_err();
        assert!(format!("{err:#}").contains("reading leave policy file"));
    }
}
