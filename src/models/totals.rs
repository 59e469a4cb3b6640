//! Campaign totals shown as fundraising progress.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Aggregate amount raised against the campaign goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_raised: f64,
    pub goal: f64,
    pub last_updated: String,
}

impl Totals {
    /// Totals for a campaign with nothing raised yet.
    pub fn empty(goal: f64) -> Self {
        Self {
            total_raised: 0.0,
            goal,
            last_updated: Utc::now().to_rfc3339(),
        }
    }

    /// Apply a donation amount, clamping the resulting total at zero.
    ///
    /// Returns `None` when the new total is not a finite number.
    pub fn apply(&self, amount: f64) -> Option<Self> {
        let total_raised = (self.total_raised + amount).max(0.0);
        if !total_raised.is_finite() {
            return None;
        }
        Some(Self {
            total_raised,
            goal: self.goal,
            last_updated: Utc::now().to_rfc3339(),
        })
    }

    /// Whole-number percent of the goal reached, capped at 100.
    pub fn percent(&self) -> u32 {
        let pct = (self.total_raised / self.goal * 100.0).round();
        if pct.is_finite() {
            pct.clamp(0.0, 100.0) as u32
        } else {
            0
        }
    }
}

/// Totals as persisted; every field may be missing or stale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTotals {
    #[serde(default)]
    pub total_raised: Option<f64>,
    #[serde(default)]
    pub goal: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl StoredTotals {
    /// Fill in missing fields with defaults.
    pub fn resolve(self, default_goal: f64) -> Totals {
        let base = Totals::empty(self.goal.filter(|g| *g > 0.0).unwrap_or(default_goal));
        Totals {
            total_raised: self.total_raised.unwrap_or(base.total_raised),
            goal: base.goal,
            last_updated: self.last_updated.unwrap_or(base.last_updated),
        }
    }
}
