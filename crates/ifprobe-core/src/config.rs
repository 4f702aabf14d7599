//! Collector configuration.

use serde::Deserialize;

/// Default procfs mount point.
const DEFAULT_PROC_PATH: &str = "/proc";

/// Configuration handed over by the host framework.
///
/// `proc_path` selects the procfs base directory; the statistics source the
/// collector reads is `<proc_path>/1/net/dev`. Every field has a default, so
/// an empty config document resolves to a fully usable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    proc_path: String,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            proc_path: DEFAULT_PROC_PATH.to_string(),
        }
    }
}

impl CollectorConfig {
    /// Creates a config with an explicit procfs base directory.
    pub fn with_proc_path(path: impl Into<String>) -> Self {
        Self {
            proc_path: path.into(),
        }
    }

    /// The procfs base directory.
    pub fn proc_path(&self) -> &str {
        &self.proc_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_proc_path() {
        let config = CollectorConfig::default();
        assert_eq!(config.proc_path(), "/proc");
    }

    #[test]
    fn test_with_proc_path() {
        let config = CollectorConfig::with_proc_path("/tmp/fake_proc");
        assert_eq!(config.proc_path(), "/tmp/fake_proc");
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: CollectorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CollectorConfig::default());
    }

    #[test]
    fn test_deserialize_overrides_proc_path() {
        let config: CollectorConfig =
            serde_json::from_str(r#"{"proc_path": "/hostproc"}"#).unwrap();
        assert_eq!(config.proc_path(), "/hostproc");
    }
}
