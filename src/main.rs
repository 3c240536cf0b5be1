use asset_sweep::utils::{error::Result, logger, validation::Validate};
use asset_sweep::{CliConfig, LocalWorkspace, SweepEngine, SweepReport};
use clap::Parser;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting asset-sweep");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let plan = match config.resolve() {
        Ok(plan) => plan,
        Err(e) => {
            tracing::error!(
                "❌ Could not resolve sweep targets: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Sweeping {} targets under {}",
        plan.targets.len(),
        plan.root
    );

    let workspace = LocalWorkspace::new(plan.root.clone());
    let engine = SweepEngine::new(workspace, plan);
    let report = engine.run();

    if let Some(report_path) = &config.report {
        match write_report(&report, report_path) {
            Ok(()) => {
                tracing::info!("Report written to {}", report_path);
                println!("📁 Report saved to: {}", report_path);
            }
            Err(e) => {
                tracing::error!(
                    "❌ Failed to write report: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(2);
            }
        }
    }

    if !report.is_clean() {
        tracing::warn!("{} target(s) could not be deleted", report.failed_count());
        eprintln!("❌ {} target(s) could not be deleted", report.failed_count());
        std::process::exit(2);
    }

    tracing::info!("✅ Sweep completed successfully");
    println!("✅ Sweep completed successfully!");

    Ok(())
}

fn write_report(report: &SweepReport, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}
