use crate::core::sweep::sweep;
use crate::core::{SweepConfig, SweepReport, TargetOutcome, Workspace};

/// Drives a sweep and emits the human-readable stdout contract: one line
/// per deleted target, then a single summary line.
pub struct SweepEngine<W: Workspace, C: SweepConfig> {
    workspace: W,
    config: C,
}

impl<W: Workspace, C: SweepConfig> SweepEngine<W, C> {
    pub fn new(workspace: W, config: C) -> Self {
        Self { workspace, config }
    }

    pub fn run(&self) -> SweepReport {
        let targets = self.config.targets();
        if self.config.dry_run() {
            println!("Dry run: sweeping {} targets...", targets.len());
        } else {
            println!("Sweeping {} targets...", targets.len());
        }

        let report = sweep(&self.workspace, targets, self.config.dry_run());

        for record in &report.records {
            match &record.outcome {
                TargetOutcome::Deleted => println!("Deleted: {}", record.path),
                TargetOutcome::WouldDelete => println!("Would delete: {}", record.path),
                TargetOutcome::Failed { reason } => {
                    println!("Failed: {} ({})", record.path, reason)
                }
                TargetOutcome::Skipped => {}
            }
        }

        if self.config.dry_run() {
            println!(
                "Dry run complete: {} would be deleted, {} skipped",
                report.would_delete_count(),
                report.skipped_count()
            );
        } else {
            println!(
                "Sweep complete: {} deleted, {} skipped, {} failed",
                report.deleted_count(),
                report.skipped_count(),
                report.failed_count()
            );
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct MapWorkspace {
        files: Mutex<HashSet<String>>,
    }

    impl MapWorkspace {
        fn new(files: &[&str]) -> Self {
            Self {
                files: Mutex::new(files.iter().map(|s| s.to_string()).collect()),
            }
        }
    }

    impl Workspace for MapWorkspace {
        fn exists(&self, path: &str) -> bool {
            self.files.lock().unwrap().contains(path)
        }

        fn remove_file(&self, path: &str) -> std::io::Result<()> {
            if self.files.lock().unwrap().remove(path) {
                Ok(())
            } else {
                Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no such file",
                ))
            }
        }
    }

    struct FixedConfig {
        targets: Vec<String>,
        dry_run: bool,
    }

    impl SweepConfig for FixedConfig {
        fn root(&self) -> &str {
            "."
        }

        fn targets(&self) -> &[String] {
            &self.targets
        }

        fn dry_run(&self) -> bool {
            self.dry_run
        }
    }

    #[test]
    fn test_engine_returns_report_in_target_order() {
        let workspace = MapWorkspace::new(&["x.png"]);
        let config = FixedConfig {
            targets: vec!["x.png".to_string(), "y.png".to_string()],
            dry_run: false,
        };

        let report = SweepEngine::new(workspace, config).run();

        assert_eq!(report.records.len(), 2);
        assert_eq!(report.records[0].path, "x.png");
        assert_eq!(report.deleted_count(), 1);
        assert_eq!(report.skipped_count(), 1);
    }

    #[test]
    fn test_engine_dry_run_reports_without_deleting() {
        let workspace = MapWorkspace::new(&["x.png"]);
        let config = FixedConfig {
            targets: vec!["x.png".to_string()],
            dry_run: true,
        };

        let engine = SweepEngine::new(workspace, config);
        let report = engine.run();

        assert_eq!(report.would_delete_count(), 1);
        assert_eq!(report.deleted_count(), 0);
        assert!(engine.workspace.exists("x.png"));
    }
}
