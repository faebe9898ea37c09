//! Prerequisite policy and engine configuration.
//!
//! The defaults reproduce the console's behavior: a prerequisite counts as
//! satisfied when the student is *currently enrolled* in it, and only the
//! direct prerequisite is checked.
//!
//! # TOML Format
//!
//! ```toml
//! [policy]
//! prerequisite_basis = "completed"  # or "enrolled"
//! transitive = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Which of the student's subject sets satisfies a prerequisite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrerequisiteBasis {
    /// Currently enrolled subjects.
    #[default]
    Enrolled,
    /// Completed subjects.
    Completed,
}

/// Eligibility rules applied by [`super::EligibilityEngine`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EligibilityPolicy {
    /// Subject set checked against prerequisites.
    pub prerequisite_basis: PrerequisiteBasis,
    /// Require the whole prerequisite chain, not just the direct one.
    pub transitive: bool,
}

impl EligibilityPolicy {
    /// Checks prerequisites against completed subjects.
    pub fn completed() -> Self {
        Self {
            prerequisite_basis: PrerequisiteBasis::Completed,
            transitive: false,
        }
    }

    /// Sets the prerequisite basis.
    pub fn with_basis(mut self, basis: PrerequisiteBasis) -> Self {
        self.prerequisite_basis = basis;
        self
    }

    /// Enables or disables transitive prerequisite checking.
    pub fn with_transitive(mut self, transitive: bool) -> Self {
        self.transitive = transitive;
        self
    }
}

/// Engine configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub policy: EligibilityPolicy,
}

impl EngineConfig {
    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| EngineError::Config(e.to_string()))
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_reference() {
        let policy = EligibilityPolicy::default();
        assert_eq!(policy.prerequisite_basis, PrerequisiteBasis::Enrolled);
        assert!(!policy.transitive);
    }

    #[test]
    fn test_policy_builders() {
        let policy = EligibilityPolicy::completed().with_transitive(true);
        assert_eq!(policy.prerequisite_basis, PrerequisiteBasis::Completed);
        assert!(policy.transitive);

        let policy = policy.with_basis(PrerequisiteBasis::Enrolled);
        assert_eq!(policy.prerequisite_basis, PrerequisiteBasis::Enrolled);
    }

    #[test]
    fn test_config_from_toml() {
        let config = EngineConfig::from_toml_str(
            r#"
            [policy]
            prerequisite_basis = "completed"
            transitive = true
            "#,
        )
        .unwrap();
        assert_eq!(config.policy, EligibilityPolicy::completed().with_transitive(true));
    }

    #[test]
    fn test_config_partial_and_empty() {
        let config = EngineConfig::from_toml_str("[policy]\ntransitive = true\n").unwrap();
        assert_eq!(config.policy.prerequisite_basis, PrerequisiteBasis::Enrolled);
        assert!(config.policy.transitive);

        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_config_invalid_basis() {
        let err = EngineConfig::from_toml_str("[policy]\nprerequisite_basis = \"passed\"\n")
            .unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn test_config_load_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[policy]").unwrap();
        writeln!(file, "prerequisite_basis = \"completed\"").unwrap();
        file.flush().unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.policy, EligibilityPolicy::completed());
    }

    #[test]
    fn test_config_missing_file() {
        let err = EngineConfig::load("/nonexistent/u-registrar.toml").unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }
}
