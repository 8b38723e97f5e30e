//! Report tuning knobs (ranking sizes, turnover period).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dashboard::DEFAULT_RECENT_ACTIVITY;

pub const ENV_TOP_LIMIT: &str = "STOCKWISE_TOP_LIMIT";
pub const ENV_TURNOVER_LIMIT: &str = "STOCKWISE_TURNOVER_LIMIT";
pub const ENV_PERIOD_DAYS: &str = "STOCKWISE_PERIOD_DAYS";
pub const ENV_RECENT_LIMIT: &str = "STOCKWISE_RECENT_LIMIT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{key} must be a positive integer (got {value:?})")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSettings {
    /// Rows in the top-selling ranking.
    pub top_limit: usize,
    /// Rows in the turnover ranking.
    pub turnover_limit: usize,
    /// Length of the sales period, in days, used for days-to-sell.
    pub period_days: u32,
    /// Transactions in the dashboard activity feed.
    pub recent_activity_limit: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            top_limit: 5,
            turnover_limit: 5,
            period_days: 30,
            recent_activity_limit: DEFAULT_RECENT_ACTIVITY,
        }
    }
}

impl ReportSettings {
    pub fn with_top_limit(mut self, top_limit: usize) -> Self {
        self.top_limit = top_limit;
        self
    }

    pub fn with_turnover_limit(mut self, turnover_limit: usize) -> Self {
        self.turnover_limit = turnover_limit;
        self
    }

    pub fn with_period_days(mut self, period_days: u32) -> Self {
        self.period_days = period_days;
        self
    }

    pub fn with_recent_activity_limit(mut self, recent_activity_limit: usize) -> Self {
        self.recent_activity_limit = recent_activity_limit;
        self
    }

    /// Load settings from `STOCKWISE_*` environment variables.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup.
    ///
    /// Missing keys keep their defaults; present keys must parse as positive
    /// integers.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(v) = positive(&lookup, ENV_TOP_LIMIT)? {
            settings.top_limit = v as usize;
        }
        if let Some(v) = positive(&lookup, ENV_TURNOVER_LIMIT)? {
            settings.turnover_limit = v as usize;
        }
        if let Some(v) = positive(&lookup, ENV_PERIOD_DAYS)? {
            settings.period_days = v;
        }
        if let Some(v) = positive(&lookup, ENV_RECENT_LIMIT)? {
            settings.recent_activity_limit = v as usize;
        }

        tracing::debug!(?settings, "report settings loaded");
        Ok(settings)
    }
}

fn positive<F>(lookup: &F, key: &'static str) -> Result<Option<u32>, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    match raw.trim().parse::<u32>() {
        Ok(v) if v > 0 => Ok(Some(v)),
        _ => Err(SettingsError::Invalid { key, value: raw }),
    }
}
