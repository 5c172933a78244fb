//! Site tunables.
//!
//! Every field has a default matching the shipped page, so an absent or
//! partial JSON block still yields a complete config. The page may embed
//! `<script type="application/json" id="site-config">` to override values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Deserializer};

use crate::consts::{
    CONTACT_EMAIL, FALLBACK_VISITOR_NAME, RESET_DELAY_MS, REVEAL_THRESHOLD, SCROLL_SPY_ROOT_MARGIN,
    SCROLL_SPY_THRESHOLD, SECTION_IDS, THEME_STORAGE_KEY,
};
use crate::error::ConfigError;

/// Options handed to a viewport intersection observer.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    /// CSS margin string applied to the root bounds, e.g. `-35% 0px -55% 0px`.
    pub root_margin: Option<String>,
    /// Fraction of the target that must be visible, in `0..=1`.
    pub threshold: f64,
}

impl ObserverOptions {
    /// Narrow band around the upper-middle of the viewport.
    #[must_use]
    pub fn scroll_spy() -> Self {
        Self { root_margin: Some(SCROLL_SPY_ROOT_MARGIN.to_owned()), threshold: SCROLL_SPY_THRESHOLD }
    }

    /// Whole viewport.
    #[must_use]
    pub fn reveal() -> Self {
        Self { root_margin: None, threshold: REVEAL_THRESHOLD }
    }

    fn overridden(self, overrides: ObserverOverrides) -> Self {
        Self {
            root_margin: overrides.root_margin.or(self.root_margin),
            threshold: overrides.threshold.unwrap_or(self.threshold),
        }
    }
}

/// Observer fields as written in the page config; absent keys keep the
/// observer's own default.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObserverOverrides {
    #[serde(default)]
    root_margin: Option<String>,
    #[serde(default)]
    threshold: Option<f64>,
}

fn scroll_spy_options<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ObserverOptions, D::Error> {
    ObserverOverrides::deserialize(deserializer).map(|o| ObserverOptions::scroll_spy().overridden(o))
}

fn reveal_options<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ObserverOptions, D::Error> {
    ObserverOverrides::deserialize(deserializer).map(|o| ObserverOptions::reveal().overridden(o))
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub contact_email: String,
    pub fallback_name: String,
    pub sections: Vec<String>,
    #[serde(deserialize_with = "scroll_spy_options")]
    pub scroll_spy: ObserverOptions,
    #[serde(deserialize_with = "reveal_options")]
    pub reveal: ObserverOptions,
    pub reset_delay_ms: u32,
    pub theme_storage_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_email: CONTACT_EMAIL.to_owned(),
            fallback_name: FALLBACK_VISITOR_NAME.to_owned(),
            sections: SECTION_IDS.iter().map(|&s| s.to_owned()).collect(),
            scroll_spy: ObserverOptions::scroll_spy(),
            reveal: ObserverOptions::reveal(),
            reset_delay_ms: RESET_DELAY_MS,
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config block and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed or a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for threshold in [self.scroll_spy.threshold, self.reveal.threshold] {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::Threshold(threshold));
            }
        }
        if self.sections.is_empty() {
            return Err(ConfigError::NoSections);
        }
        if !self.contact_email.contains('@') {
            return Err(ConfigError::ContactAddress(self.contact_email.clone()));
        }
        Ok(())
    }
}
