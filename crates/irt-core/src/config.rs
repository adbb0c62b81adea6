//! IRT Configuration
//!
//! Formatting policies and buffer limits for the Interpolation Runtime.
//! Configuration specifies constraints only; enforcement is handled by the
//! formatter and the assembler.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IrtError, IrtResult};
use crate::format::{FloatPolicy, NonFinitePolicy};

/// Runtime configuration.
///
/// Maps directly to a TOML file such as:
///
/// ```toml
/// float_policy = "nice"
/// non_finite = "spell"
/// initial_capacity = 64
/// max_output_len = 1048576
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IrtConfig {
    /// Float rendering policy
    #[serde(default)]
    pub float_policy: FloatPolicy,

    /// Handling of NaN and infinities
    #[serde(default)]
    pub non_finite: NonFinitePolicy,

    /// Bytes reserved up front for each assembled string
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    /// Optional ceiling on assembled output, in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_len: Option<usize>,
}

fn default_initial_capacity() -> usize {
    64
}

impl Default for IrtConfig {
    fn default() -> Self {
        IrtConfig {
            float_policy: FloatPolicy::default(),
            non_finite: NonFinitePolicy::default(),
            initial_capacity: default_initial_capacity(),
            max_output_len: None,
        }
    }
}

impl IrtConfig {
    /// Create a new configuration with default policies and no ceiling
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> IrtResult<Self> {
        let config: IrtConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> IrtResult<Self> {
        let text = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading configuration");
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> IrtResult<()> {
        if let Some(limit) = self.max_output_len {
            if self.initial_capacity > limit {
                return Err(IrtError::Config(format!(
                    "initial_capacity {} exceeds max_output_len {}",
                    self.initial_capacity, limit
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config = IrtConfig::from_toml_str("").unwrap();
        assert_eq!(config, IrtConfig::default());
        assert_eq!(config.float_policy, FloatPolicy::Nice);
        assert_eq!(config.non_finite, NonFinitePolicy::Spell);
        assert_eq!(config.initial_capacity, 64);
        assert_eq!(config.max_output_len, None);
    }

    #[test]
    fn parses_all_fields() {
        let config = IrtConfig::from_toml_str(
            r#"
            float_policy = "fixed_six"
            non_finite = "reject"
            initial_capacity = 16
            max_output_len = 4096
            "#,
        )
        .unwrap();
        assert_eq!(config.float_policy, FloatPolicy::FixedSix);
        assert_eq!(config.non_finite, NonFinitePolicy::Reject);
        assert_eq!(config.initial_capacity, 16);
        assert_eq!(config.max_output_len, Some(4096));
    }

    #[test]
    fn rejects_unknown_policy() {
        let res = IrtConfig::from_toml_str(r#"float_policy = "scientific""#);
        assert!(matches!(res, Err(IrtError::Config(_))));
    }

    #[test]
    fn rejects_unknown_field() {
        let res = IrtConfig::from_toml_str("precision = 3");
        assert!(matches!(res, Err(IrtError::Config(_))));
    }

    #[test]
    fn rejects_capacity_above_ceiling() {
        let res = IrtConfig::from_toml_str("initial_capacity = 100\nmax_output_len = 10");
        assert!(matches!(res, Err(IrtError::Config(_))));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "float_policy = \"fixed_six\"").unwrap();
        let config = IrtConfig::load(file.path()).unwrap();
        assert_eq!(config.float_policy, FloatPolicy::FixedSix);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let res = IrtConfig::load(Path::new("/nonexistent/irt.toml"));
        assert!(matches!(res, Err(IrtError::Io(_))));
    }

    #[test]
    fn serializes_back_to_toml() {
        let config = IrtConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("float_policy = \"nice\""));
        assert!(!text.contains("max_output_len"));
    }
}
