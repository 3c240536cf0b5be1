pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::manifest::SweepManifest;
pub use config::{cli::LocalWorkspace, CliConfig, SweepPlan};
pub use core::{engine::SweepEngine, sweep::sweep};
pub use domain::model::{SweepReport, TargetOutcome, TargetRecord};
pub use domain::ports::{SweepConfig, Workspace};
pub use utils::error::{Result, SweepError};
