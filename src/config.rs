//! App configuration loaded from `cinerow.json`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::paths::resolve_resource_path;
use crate::error::ConfigError;

pub const CONFIG_FILE_NAME: &str = "cinerow.json";
pub const ASSET_BASE_ENV: &str = "CINEROW_ASSET_BASE";

/// Runtime settings. Every field has a default so partial files are fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base path prefixed to every asset URL.
    pub asset_base_path: String,
    /// Below this width the viewport counts as mobile.
    pub mobile_breakpoint_px: f64,
    /// From this width on the viewport counts as wide.
    pub wide_breakpoint_px: f64,
    /// Delay before scroll buttons are recomputed after a paged scroll.
    pub scroll_settle_ms: u64,
    /// Size of the recommendation set in the detail overlay.
    pub recommendation_count: usize,
    pub window_width: f64,
    pub window_height: f64,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_base_path: "/".to_string(),
            mobile_breakpoint_px: 768.0,
            wide_breakpoint_px: 1024.0,
            scroll_settle_ms: 300,
            recommendation_count: 3,
            window_width: 1280.0,
            window_height: 800.0,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Read and validate a config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Look up `cinerow.json` next to the executable or the crate root.
    /// A missing file yields defaults; a broken one is reported so the
    /// caller can log it and fall back.
    pub fn discover() -> Result<Self, ConfigError> {
        let path = resolve_resource_path(Path::new(CONFIG_FILE_NAME));
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        if let Ok(base) = std::env::var(ASSET_BASE_ENV) {
            config.asset_base_path = base;
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mobile_breakpoint_px > 0.0) {
            return Err(ConfigError::Invalid {
                field: "mobile_breakpoint_px",
                reason: "must be positive".to_string(),
            });
        }
        if self.wide_breakpoint_px <= self.mobile_breakpoint_px {
            return Err(ConfigError::Invalid {
                field: "wide_breakpoint_px",
                reason: format!("must exceed mobile breakpoint {}", self.mobile_breakpoint_px),
            });
        }
        if self.recommendation_count == 0 {
            return Err(ConfigError::Invalid {
                field: "recommendation_count",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config(r#"{ "asset_base_path": "/cinerow/", "scroll_settle_ms": 250 }"#);
        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.asset_base_path, "/cinerow/");
        assert_eq!(config.scroll_settle_ms, 250);
        assert_eq!(config.mobile_breakpoint_px, 768.0);
        assert_eq!(config.recommendation_count, 3);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let file = write_config("{ not json");
        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load_from(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_breakpoints_must_be_ordered() {
        let file = write_config(r#"{ "mobile_breakpoint_px": 1200, "wide_breakpoint_px": 1024 }"#);
        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "wide_breakpoint_px", .. }));
    }

    #[test]
    fn test_zero_recommendations_rejected() {
        let config = AppConfig {
            recommendation_count: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(AppConfig::default().validate().is_ok());
    }
}
