use crate::core::{SweepReport, TargetOutcome, TargetRecord, Workspace};
use chrono::Utc;
use std::io::ErrorKind;

/// Conditional batch delete: walks `targets` in order, removes each file
/// that exists, and records one outcome per target. Targets that are not
/// present are skipped, never created. A removal failure is recorded and
/// the remaining targets are still processed.
pub fn sweep<W: Workspace>(workspace: &W, targets: &[String], dry_run: bool) -> SweepReport {
    let started_at = Utc::now();
    let mut records = Vec::with_capacity(targets.len());

    for path in targets {
        let outcome = if !workspace.exists(path) {
            tracing::debug!("Not present, skipping: {}", path);
            TargetOutcome::Skipped
        } else if dry_run {
            tracing::info!("Dry run, would delete: {}", path);
            TargetOutcome::WouldDelete
        } else {
            match workspace.remove_file(path) {
                Ok(()) => {
                    tracing::info!("Deleted: {}", path);
                    TargetOutcome::Deleted
                }
                // Another process won the race between the existence check
                // and the removal; the file is gone either way.
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::debug!("Already gone: {}", path);
                    TargetOutcome::Skipped
                }
                Err(e) => {
                    tracing::warn!("Failed to delete {}: {}", path, e);
                    TargetOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            }
        };

        records.push(TargetRecord {
            path: path.clone(),
            outcome,
        });
    }

    SweepReport {
        records,
        started_at,
        finished_at: Utc::now(),
    }
}
