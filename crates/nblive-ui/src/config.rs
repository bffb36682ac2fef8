//! Runtime configuration
//!
//! Defaults reproduce the page as designed. A deployment can override any of
//! them with a JSON document in `<meta name="nblive-config" content="...">`.

use serde::Deserialize;
use tracing::Level;

use crate::error::{LandingError, Result};
use crate::models::visibility::Threshold;

/// Name of the meta tag carrying the JSON overrides
pub const CONFIG_META_NAME: &str = "nblive-config";

/// Settings for the viewport observer driving the reveal animation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// Visible fraction required before a section counts as seen
    pub threshold: f64,
    /// CSS margin applied to the viewport when computing intersections
    pub root_margin: String,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::DEFAULT.value(),
            root_margin: "0px".to_string(),
        }
    }
}

impl ObserverConfig {
    /// # Errors
    ///
    /// Returns `LandingError::InvalidThreshold` when `threshold` is outside [0, 1].
    pub fn threshold(&self) -> Result<Threshold> {
        Threshold::new(self.threshold)
    }

    /// The configured threshold, or [`Threshold::DEFAULT`] when it is out of
    /// range
    #[must_use]
    pub fn threshold_or_default(&self) -> Threshold {
        self.threshold().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default visibility threshold");
            Threshold::DEFAULT
        })
    }
}

/// Settings for the toaster
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// Maximum notices on screen at once
    pub limit: usize,
    /// How long a notice stays before dismissing itself
    pub duration_ms: u32,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            limit: 1,
            duration_ms: 5_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub observer: ObserverConfig,
    pub notices: NoticeConfig,
    /// `tracing` level name: trace, debug, info, warn or error
    pub log_level: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            observer: ObserverConfig::default(),
            notices: NoticeConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl LandingConfig {
    /// Parses and validates a JSON document. Missing fields keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns `LandingError::InvalidConfig` for malformed JSON or values
    /// that fail [`LandingConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| LandingError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `LandingError::InvalidConfig` if the threshold, notice limit
    /// or log level is unusable.
    pub fn validate(&self) -> Result<()> {
        self.observer
            .threshold()
            .map_err(|e| LandingError::InvalidConfig(e.to_string()))?;
        if self.notices.limit == 0 {
            return Err(LandingError::InvalidConfig(
                "notices.limit must be at least 1".to_string(),
            ));
        }
        self.level().map(|_| ())
    }

    /// # Errors
    ///
    /// Returns `LandingError::InvalidConfig` for an unknown level name.
    pub fn level(&self) -> Result<Level> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| LandingError::InvalidConfig(format!("unknown log level: {}", self.log_level)))
    }

    /// Reads overrides from the document's config meta tag.
    ///
    /// Falls back to defaults when there is no tag. Returns the defaults plus
    /// the parse error when the tag is present but unusable, so the caller
    /// can report it once logging is up.
    #[must_use]
    pub fn from_document() -> (Self, Option<LandingError>) {
        match read_meta_content() {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
            Ok(None) => (Self::default(), None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}

fn read_meta_content() -> Result<Option<String>> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .ok_or(LandingError::WindowUnavailable)?
        .document()
        .ok_or(LandingError::DocumentUnavailable)?;

    let selector = format!("meta[name=\"{CONFIG_META_NAME}\"]");
    let meta = document
        .query_selector(&selector)
        .map_err(|e| LandingError::InvalidConfig(format!("{e:?}")))?
        .and_then(|element| element.dyn_into::<web_sys::HtmlMetaElement>().ok());

    Ok(meta.map(|meta| meta.content()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_defaults() {
        let config = LandingConfig::default();
        assert_eq!(config.observer.threshold().unwrap(), Threshold::DEFAULT);
        assert_eq!(config.notices.limit, 1);
        assert_eq!(config.level().unwrap(), Level::INFO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_threshold_falls_back_to_default() {
        let config = ObserverConfig {
            threshold: 3.0,
            ..ObserverConfig::default()
        };
        assert_eq!(config.threshold_or_default(), Threshold::DEFAULT);

        let config = ObserverConfig {
            threshold: 0.5,
            ..ObserverConfig::default()
        };
        assert_eq!(config.threshold_or_default(), Threshold::new(0.5).unwrap());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = LandingConfig::from_json(r#"{"observer": {"threshold": 0.25}}"#).unwrap();
        assert!((config.observer.threshold - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.observer.root_margin, "0px");
        assert_eq!(config.notices, NoticeConfig::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(LandingConfig::from_json("{}").unwrap(), LandingConfig::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            LandingConfig::from_json(r#"{"observer": {"threshold": 2.0}}"#),
            Err(LandingError::InvalidConfig(_))
        ));
        assert!(matches!(
            LandingConfig::from_json(r#"{"notices": {"limit": 0}}"#),
            Err(LandingError::InvalidConfig(_))
        ));
        assert!(matches!(
            LandingConfig::from_json(r#"{"log_level": "loud"}"#),
            Err(LandingError::InvalidConfig(_))
        ));
        assert!(matches!(
            LandingConfig::from_json("not json"),
            Err(LandingError::InvalidConfig(_))
        ));
    }
}
