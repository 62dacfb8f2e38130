//! UI tunables.
//!
//! # Design
//! - Defaults are the shipped values; `index.html` may override any subset through a
//!   `<script type="application/json" id="scholarflow-config">` block.
//! - Nothing here is persisted. A reload re-reads the embedded block.

use serde::Deserialize;
use thiserror::Error;

use crate::core::theme::ThemeMode;

/// Element id of the embedded JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "scholarflow-config";

const MIB: u64 = 1024 * 1024;

/// Runtime knobs for timing and upload limits.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Enter/exit animation length for page changes.
    pub transition_ms: u32,
    /// How long a toast stays visible.
    pub toast_ttl_ms: u32,
    /// Simulated latency for save buttons.
    pub save_delay_ms: u32,
    /// Interval between simulated upload progress ticks.
    pub upload_tick_ms: u32,
    /// Progress added per upload tick, in percent.
    pub upload_step_pct: u8,
    /// Largest accepted paper PDF.
    pub max_paper_bytes: u64,
    /// Largest accepted avatar image.
    pub max_avatar_bytes: u64,
    /// Theme used when the browser expresses no preference.
    pub default_theme: ThemeMode,
    /// Origin used in copied paper links when the window origin is unavailable.
    pub share_origin: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            transition_ms: 180,
            toast_ttl_ms: 4000,
            save_delay_ms: 600,
            upload_tick_ms: 120,
            upload_step_pct: 12,
            max_paper_bytes: 25 * MIB,
            max_avatar_bytes: 2 * MIB,
            default_theme: ThemeMode::Light,
            share_origin: "https://scholarflow.app".to_string(),
        }
    }
}

/// Errors raised while reading the embedded config block.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The block was not valid JSON for [`UiConfig`].
    #[error("invalid UI configuration")]
    Parse {
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// A numeric field was outside its accepted range.
    #[error("invalid UI configuration field")]
    InvalidField {
        /// Field name.
        field: &'static str,
        /// Machine-readable reason.
        reason: &'static str,
    },
}

impl UiConfig {
    /// Parses a JSON override block on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys and
    /// [`ConfigError::InvalidField`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.upload_step_pct == 0 || self.upload_step_pct > 100 {
            return Err(ConfigError::InvalidField {
                field: "upload_step_pct",
                reason: "must be between 1 and 100",
            });
        }
        if self.max_paper_bytes == 0 {
            return Err(ConfigError::InvalidField {
                field: "max_paper_bytes",
                reason: "must be positive",
            });
        }
        if self.max_avatar_bytes == 0 {
            return Err(ConfigError::InvalidField {
                field: "max_avatar_bytes",
                reason: "must be positive",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block_yields_defaults() {
        assert_eq!(UiConfig::from_json("  ").unwrap(), UiConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            UiConfig::from_json(r#"{"transition_ms": 0, "default_theme": "dark"}"#).unwrap();
        assert_eq!(config.transition_ms, 0);
        assert_eq!(config.default_theme, ThemeMode::Dark);
        assert_eq!(config.toast_ttl_ms, UiConfig::default().toast_ttl_ms);
    }

    #[test]
    fn largest_byte_limits_are_accepted() {
        let config = UiConfig::from_json(r#"{"max_paper_bytes": 18446744073709551615}"#).unwrap();
        assert_eq!(config.max_paper_bytes, u64::MAX);
    }

    #[test]
    fn unknown_keys_and_bad_ranges_are_rejected() {
        assert!(matches!(
            UiConfig::from_json(r#"{"transitions": 1}"#),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            UiConfig::from_json(r#"{"upload_step_pct": 0}"#),
            Err(ConfigError::InvalidField {
                field: "upload_step_pct",
                ..
            })
        ));
    }
}
