//! Configuration for MarkerSweep.
//!
//! A small TOML file selects the resolution strategy and the set of target
//! files, either as glob patterns matched under a root directory or as an
//! explicit path list.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ConfigError;
use crate::resolve::Strategy;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Top-level MarkerSweep configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Sweep behaviour settings.
    #[serde(default)]
    pub sweep: SweepSection,

    /// Which files to sweep.
    pub targets: TargetsSection,
}

// ---------------------------------------------------------------------------
// Sweep section
// ---------------------------------------------------------------------------

/// Sweep behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSection {
    /// Resolution strategy: `scan` (line filter) or `erase` (block pattern).
    #[serde(default = "default_strategy")]
    pub strategy: Strategy,

    /// Minimum tracing level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SweepSection {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            log_level: default_log_level(),
        }
    }
}

fn default_strategy() -> Strategy {
    Strategy::Scan
}

fn default_log_level() -> String {
    "info".into()
}

// ---------------------------------------------------------------------------
// Targets section
// ---------------------------------------------------------------------------

/// Which files to sweep.
///
/// When `paths` is non-empty it is used verbatim and no discovery walk
/// happens; otherwise `include` patterns are matched under `root`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsSection {
    /// Root directory for glob discovery.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns matched against paths relative to `root`.
    #[serde(default)]
    pub include: Vec<String>,

    /// Explicit file list; bypasses discovery when set.
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

// ---------------------------------------------------------------------------
// Loading and validation
// ---------------------------------------------------------------------------

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// The target set must not be empty: either explicit `paths` or at
    /// least one `include` pattern is required.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.targets.paths.is_empty() && self.targets.include.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "targets".into(),
                detail: "either 'paths' or 'include' must be set".into(),
            });
        }
        Ok(())
    }

    /// Default configuration template written by `markersweep init`.
    pub fn default_template() -> &'static str {
        r#"# MarkerSweep configuration

[sweep]
# Resolution strategy:
#   scan  - line-by-line filter (keeps ours, drops theirs and markers)
#   erase - whole-block pattern substitution
strategy = "scan"
log_level = "info"

[targets]
# Root directory for glob discovery.
root = "."

# Glob patterns matched relative to root.
include = ["src/**/*.rs"]

# Explicit file list; when non-empty, discovery is skipped.
# paths = ["src/lib.rs", "src/main.rs"]
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_toml() -> &'static str {
        r#"
[sweep]
strategy = "erase"
log_level = "debug"

[targets]
root = "contracts"
include = ["**/*.rs"]
"#
    }

    #[test]
    fn test_parse_sample_config() {
        let config: AppConfig = toml::from_str(sample_toml()).expect("failed to parse toml");
        assert_eq!(config.sweep.strategy, Strategy::Erase);
        assert_eq!(config.sweep.log_level, "debug");
        assert_eq!(config.targets.root, PathBuf::from("contracts"));
        assert_eq!(config.targets.include, vec!["**/*.rs".to_string()]);
        assert!(config.targets.paths.is_empty());
    }

    #[test]
    fn test_defaults_applied() {
        let minimal = r#"
[targets]
include = ["*.rs"]
"#;
        let config: AppConfig = toml::from_str(minimal).unwrap();
        assert_eq!(config.sweep.strategy, Strategy::Scan);
        assert_eq!(config.sweep.log_level, "info");
        assert_eq!(config.targets.root, PathBuf::from("."));
    }

    #[test]
    fn test_explicit_paths() {
        let toml_str = r#"
[targets]
paths = ["src/lib.rs", "src/test_pause.rs"]
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.targets.paths.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let toml_str = r#"
[sweep]
strategy = "merge"

[targets]
include = ["*.rs"]
"#;
        let result: Result<AppConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_empty_targets() {
        let config: AppConfig = toml::from_str("[targets]\n").unwrap();
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from_file(dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_from_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("markersweep.toml");
        std::fs::write(&path, sample_toml()).unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(config.sweep.strategy, Strategy::Erase);
    }

    #[test]
    fn test_default_template_parses_and_validates() {
        let config: AppConfig = toml::from_str(AppConfig::default_template())
            .expect("default template must parse");
        assert!(config.validate().is_ok());
    }
}
