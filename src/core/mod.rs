pub mod engine;
pub mod sweep;

pub use crate::domain::model::{SweepReport, TargetOutcome, TargetRecord};
pub use crate::domain::ports::{SweepConfig, Workspace};
pub use crate::utils::error::Result;
