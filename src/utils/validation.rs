use crate::utils::error::{Result, SweepError};
use std::path::Component;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SweepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SweepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Sweep targets must stay inside the workspace root: relative, no `..`.
pub fn validate_target_path(field_name: &str, path: &str) -> Result<()> {
    validate_path(field_name, path)?;

    let parsed = std::path::Path::new(path);
    if parsed.is_absolute() {
        return Err(SweepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Target paths must be relative to the workspace root".to_string(),
        });
    }

    if parsed
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(SweepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Target paths must not traverse outside the workspace root".to_string(),
        });
    }

    Ok(())
}

pub fn validate_target_list(field_name: &str, targets: &[String]) -> Result<()> {
    if targets.is_empty() {
        return Err(SweepError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    for target in targets {
        validate_target_path(field_name, target)?;
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SweepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
