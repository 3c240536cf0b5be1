use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened to a single target path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TargetOutcome {
    /// The file existed and was removed.
    Deleted,
    /// Nothing existed at the path (or it vanished before removal).
    Skipped,
    /// Dry-run only: the file exists and would have been removed.
    WouldDelete,
    /// The file exists but could not be removed.
    Failed { reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetRecord {
    pub path: String,
    #[serde(flatten)]
    pub outcome: TargetOutcome,
}

/// Structured result of one sweep, in target-list order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    pub records: Vec<TargetRecord>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl SweepReport {
    pub fn deleted_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == TargetOutcome::Deleted)
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == TargetOutcome::Skipped)
            .count()
    }

    pub fn would_delete_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == TargetOutcome::WouldDelete)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, TargetOutcome::Failed { .. }))
            .count()
    }

    /// True when every target was handled without a failure.
    pub fn is_clean(&self) -> bool {
        self.failed_count() == 0
    }
}
