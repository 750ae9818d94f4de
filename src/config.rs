use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, bail};
use dotenvy::dotenv;
use tracing::Level;

use crate::engine::UrgencyThresholds;
use crate::model::LeavePolicy;

#[derive(Clone, Debug)]
pub struct Config {
    // Logging
    pub log_dir: PathBuf,
    pub log_file: String,
    pub log_level: Level,

    /// JSON array of leave type rules; built-in rules when unset
    pub leave_policy_path: Option<PathBuf>,

    // Urgency bands, in days
    pub urgent_within_days: i64,
    pub upcoming_within_days: i64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        fn parse<T>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
            default: &str,
        ) -> anyhow::Result<T>
        where
            T: FromStr,
            T::Err: std::error::Error + Send + Sync + 'static,
        {
            let raw = lookup(key).unwrap_or_else(|| default.to_string());
            raw.trim()
                .parse()
                .with_context(|| format!("{key} has an invalid value `{raw}`"))
        }

        Ok(Self {
            log_dir: lookup("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
            log_file: lookup("LOG_FILE").unwrap_or_else(|| "leave-engine.log".to_string()),
            log_level: parse(&lookup, "LOG_LEVEL", "info")?,

            leave_policy_path: lookup("LEAVE_POLICY_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),

            urgent_within_days: parse(&lookup, "URGENT_WITHIN_DAYS", "3")?,
            upcoming_within_days: parse(&lookup, "UPCOMING_WITHIN_DAYS", "7")?,
        })
    }

    pub fn urgency_thresholds(&self) -> anyhow::Result<UrgencyThresholds> {
        if self.urgent_within_days < 0 || self.upcoming_within_days < self.urgent_within_days {
            bail!(
                "urgency bands must satisfy 0 <= URGENT_WITHIN_DAYS ({}) <= UPCOMING_WITHIN_DAYS ({})",
                self.urgent_within_days,
                self.upcoming_within_days
            );
        }
        Ok(UrgencyThresholds {
            urgent_within: self.urgent_within_days,
            upcoming_within: self.upcoming_within_days,
        })
    }

    pub fn load_policy(&self) -> anyhow::Result<LeavePolicy> {
        match &self.leave_policy_path {
            Some(path) => LeavePolicy::load(path),
            None => Ok(LeavePolicy::default()),
        }
    }
}
