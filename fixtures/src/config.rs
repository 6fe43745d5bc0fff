//! Optional fixture configuration (TOML).
//!
//! Only the sequence consumer has a tunable: how many values it reads before
//! exiting. Every missing field keeps its default, and the defaults reproduce
//! the canonical fixture output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

/// Number of values the sequence consumer reads by default.
pub const DEFAULT_COUNT: u64 = 100;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FixtureConfig {
    pub sequence: SequenceConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SequenceConfig {
    /// Values received and printed before the consumer stops.
    pub count: u64,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
        }
    }
}

impl FixtureConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sequence.count == 0 {
            return Err(anyhow!("sequence.count must be > 0"));
        }
        Ok(())
    }
}

/// Load config from an optional TOML file.
///
/// With no path, or a path that does not exist, returns
/// `FixtureConfig::default()`.
pub fn load_config(path: Option<&Path>) -> Result<FixtureConfig> {
    let Some(path) = path.filter(|path| path.exists()) else {
        let cfg = FixtureConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    };
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FixtureConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate().with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_returns_default() {
        let cfg = load_config(None).expect("load");
        assert_eq!(cfg, FixtureConfig::default());
        assert_eq!(cfg.sequence.count, 100);
    }

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(Some(&temp.path().join("missing.toml"))).expect("load");
        assert_eq!(cfg, FixtureConfig::default());
    }

    #[test]
    fn empty_file_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("fixtures.toml");
        fs::write(&path, "").expect("write");

        let cfg = load_config(Some(&path)).expect("load");
        assert_eq!(cfg, FixtureConfig::default());
    }

    #[test]
    fn file_overrides_count() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("fixtures.toml");
        fs::write(&path, "[sequence]\ncount = 5\n").expect("write");

        let cfg = load_config(Some(&path)).expect("load");
        assert_eq!(cfg.sequence.count, 5);
    }

    #[test]
    fn zero_count_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("fixtures.toml");
        fs::write(&path, "[sequence]\ncount = 0\n").expect("write");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("sequence.count must be > 0"));
    }

    #[test]
    fn malformed_file_names_the_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("fixtures.toml");
        fs::write(&path, "[sequence]\ncount = \"many\"\n").expect("write");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("parse"));
        assert!(format!("{err:#}").contains("fixtures.toml"));
    }
}
