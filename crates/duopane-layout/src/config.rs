#![forbid(unsafe_code)]

//! Split controller configuration.
//!
//! Every threshold, target, and timing the controller uses lives in
//! [`SplitConfig`]. The defaults match the constants below, so
//! `SplitConfig::default()` reproduces the stock behavior.
//!
//! # Loading
//!
//! ```toml
//! # duopane.toml
//! collapse_threshold = 15.0
//! expanded_left = 65.0
//! duration_ms = 200
//!
//! [columns]
//! gutter = 1
//! min_right = 20
//! ```
//!
//! ```rust,ignore
//! let config = SplitConfig::from_toml_file("duopane.toml")?;
//! let config = SplitConfig::from_json_str(json)?;
//! ```

use std::path::Path;
use std::time::Duration;

use duopane_core::{Easing, SizePair};
pub use duopane_core::{DEFAULT_DURATION, DEFAULT_DURATION_MS};
use serde::{Deserialize, Serialize};

use crate::columns::ColumnSpec;

/// Left percentage below which an expanded pane collapses (and above which
/// a collapsed pane expands).
pub const COLLAPSE_THRESHOLD: f64 = 15.0;

/// Left percentage a drag must end above to be remembered as the restore
/// target.
pub const REMEMBER_THRESHOLD: f64 = 6.0;

/// Canonical collapsed layout.
pub const COLLAPSED_TARGET: SizePair = SizePair::exact(5.0);

/// Canonical expanded layout.
pub const EXPANDED_TARGET: SizePair = SizePair::exact(60.0);

/// Tunable parameters for [`SplitController`](crate::SplitController).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    pub collapse_threshold: f64,
    pub remember_threshold: f64,
    /// Left percentage of the collapsed layout.
    pub collapsed_left: f64,
    /// Left percentage of the expanded layout.
    pub expanded_left: f64,
    pub duration_ms: u64,
    pub easing: Easing,
    /// Cell-grid projection settings.
    pub columns: ColumnSpec,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            collapse_threshold: COLLAPSE_THRESHOLD,
            remember_threshold: REMEMBER_THRESHOLD,
            collapsed_left: COLLAPSED_TARGET.left(),
            expanded_left: EXPANDED_TARGET.left(),
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::EaseInOut,
            columns: ColumnSpec::default(),
        }
    }
}

impl SplitConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.checked()
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.checked()
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let open_range = |v: f64| v.is_finite() && v > 0.0 && v < 100.0;
        let closed_range = |v: f64| v.is_finite() && (0.0..=100.0).contains(&v);

        if !open_range(self.collapse_threshold) {
            errors.push(format!(
                "collapse_threshold must be in (0, 100), got {}",
                self.collapse_threshold
            ));
        }
        if !open_range(self.remember_threshold) {
            errors.push(format!(
                "remember_threshold must be in (0, 100), got {}",
                self.remember_threshold
            ));
        }
        if !closed_range(self.collapsed_left) {
            errors.push(format!(
                "collapsed_left must be in [0, 100], got {}",
                self.collapsed_left
            ));
        } else if self.collapsed_left >= self.collapse_threshold {
            errors.push(format!(
                "collapsed_left ({}) must be below collapse_threshold ({})",
                self.collapsed_left, self.collapse_threshold
            ));
        }
        if !closed_range(self.expanded_left) {
            errors.push(format!(
                "expanded_left must be in [0, 100], got {}",
                self.expanded_left
            ));
        } else if self.expanded_left <= self.collapse_threshold {
            errors.push(format!(
                "expanded_left ({}) must be above collapse_threshold ({})",
                self.expanded_left, self.collapse_threshold
            ));
        }
        errors
    }

    /// Collapsed layout as a size pair.
    #[must_use]
    pub fn collapsed_target(&self) -> SizePair {
        SizePair::from_left(self.collapsed_left).rounded()
    }

    /// Expanded layout as a size pair.
    #[must_use]
    pub fn expanded_target(&self) -> SizePair {
        SizePair::from_left(self.expanded_left).rounded()
    }

    /// Transition length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    fn checked(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Errors from loading a [`SplitConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = SplitConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.collapsed_target(), COLLAPSED_TARGET);
        assert_eq!(config.expanded_target(), EXPANDED_TARGET);
        assert_eq!(config.duration(), DEFAULT_DURATION);
        assert_eq!(config.duration_ms, DEFAULT_DURATION_MS);
        assert_eq!(Duration::from_millis(DEFAULT_DURATION_MS), DEFAULT_DURATION);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = SplitConfig::from_toml_str(
            r#"
            expanded_left = 70.0
            easing = "linear"

            [columns]
            min_right = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.expanded_left, 70.0);
        assert_eq!(config.easing, Easing::Linear);
        assert_eq!(config.columns.min_right, 20);
        assert_eq!(config.columns.gutter, 1);
        assert_eq!(config.collapse_threshold, COLLAPSE_THRESHOLD);
    }

    #[test]
    fn json_round_trip() {
        let json = serde_json::to_string(&SplitConfig::default()).unwrap();
        assert_eq!(
            SplitConfig::from_json_str(&json).unwrap(),
            SplitConfig::default()
        );
    }

    #[test]
    fn targets_on_wrong_side_of_threshold() {
        let err = SplitConfig::from_toml_str("collapsed_left = 20.0\nexpanded_left = 10.0")
            .unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn out_of_range_values() {
        let config = SplitConfig {
            remember_threshold: 0.0,
            collapsed_left: f64::NAN,
            ..SplitConfig::default()
        };
        assert_eq!(config.validate().len(), 2);
    }

    #[test]
    fn malformed_toml() {
        assert!(matches!(
            SplitConfig::from_toml_str("duration_ms = \"slow\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            SplitConfig::from_toml_file("/nonexistent/duopane.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
