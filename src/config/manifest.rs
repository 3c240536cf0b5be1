use crate::domain::ports::SweepConfig;
use crate::utils::error::{Result, SweepError};
use crate::utils::validation::{validate_non_empty_string, validate_target_list, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML manifest describing one sweep: which files to remove, relative to
/// which root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepManifest {
    pub manifest: ManifestInfo,
    pub sweep: SweepSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSection {
    pub root: Option<String>,
    pub targets: Vec<String>,
}

impl SweepManifest {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SweepError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SweepError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value; unknown
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("valid substitution pattern");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn root(&self) -> &str {
        self.sweep.root.as_deref().unwrap_or(".")
    }

    pub fn targets(&self) -> &[String] {
        &self.sweep.targets
    }
}

impl SweepConfig for SweepManifest {
    fn root(&self) -> &str {
        self.root()
    }

    fn targets(&self) -> &[String] {
        &self.sweep.targets
    }

    fn dry_run(&self) -> bool {
        // Manifests describe what to sweep, never how; dry-run is a
        // CLI-level switch.
        false
    }
}

impl Validate for SweepManifest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("manifest.name", &self.manifest.name)?;
        validate_target_list("sweep.targets", &self.sweep.targets)?;
        Ok(())
    }
}
