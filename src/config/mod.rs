pub mod cli;
pub mod manifest;
pub mod presets;

use crate::domain::ports::SweepConfig;
use crate::utils::error::{Result, SweepError};
use crate::utils::validation::{validate_path, validate_target_list, Validate};
use clap::Parser;
use manifest::SweepManifest;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "asset-sweep")]
#[command(about = "Removes stale generated asset files from a project tree")]
pub struct CliConfig {
    #[arg(long, default_value = ".", help = "Project root the target paths resolve against")]
    pub root: String,

    #[arg(long, value_delimiter = ',', help = "Relative paths to sweep")]
    pub targets: Vec<String>,

    #[arg(long, help = "Built-in target list to sweep")]
    pub preset: Option<String>,

    #[arg(long, help = "TOML manifest describing the sweep")]
    pub manifest: Option<String>,

    #[arg(long, help = "Report what would be deleted without touching the filesystem")]
    pub dry_run: bool,

    #[arg(long, help = "Write the sweep report as JSON to this file")]
    pub report: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges manifest, preset, and explicit targets (in that order) into
    /// a validated plan. The manifest root applies only when --root was
    /// left at its default.
    pub fn resolve(&self) -> Result<SweepPlan> {
        let mut targets = Vec::new();
        let mut root = self.root.clone();

        if let Some(manifest_path) = &self.manifest {
            let manifest = SweepManifest::from_file(manifest_path)?;
            manifest.validate()?;
            if self.root == "." {
                root = SweepConfig::root(&manifest).to_string();
            }
            targets.extend(manifest.targets().iter().cloned());
        }

        if let Some(name) = &self.preset {
            let preset_targets =
                presets::targets(name).ok_or_else(|| SweepError::InvalidConfigValueError {
                    field: "preset".to_string(),
                    value: name.clone(),
                    reason: format!("Unknown preset. Available presets: {}", presets::names().join(", ")),
                })?;
            targets.extend(preset_targets);
        }

        targets.extend(self.targets.iter().cloned());

        validate_path("root", &root)?;
        validate_target_list("targets", &targets)?;

        Ok(SweepPlan {
            root,
            targets,
            dry_run: self.dry_run,
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("root", &self.root)?;
        if let Some(name) = &self.preset {
            if !presets::names().contains(&name.as_str()) {
                return Err(SweepError::InvalidConfigValueError {
                    field: "preset".to_string(),
                    value: name.clone(),
                    reason: format!("Unknown preset. Available presets: {}", presets::names().join(", ")),
                });
            }
        }
        Ok(())
    }
}

/// Fully resolved sweep settings, ready to hand to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepPlan {
    pub root: String,
    pub targets: Vec<String>,
    pub dry_run: bool,
}

impl SweepConfig for SweepPlan {
    fn root(&self) -> &str {
        &self.root
    }

    fn targets(&self) -> &[String] {
        &self.targets
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}
