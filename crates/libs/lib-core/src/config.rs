//! # Landing Page Configuration
//!
//! Timings and switches for the landing page behaviors. Every field has a default,
//! so an empty JSON object (or no configuration at all) yields the stock page.
//!
//! The browser layer may supply overrides as JSON:
//!
//! ```rust
//! use lib_core::config::LandingConfig;
//!
//! let config = LandingConfig::from_json(r#"{ "countdown_days": 7 }"#).unwrap();
//! assert_eq!(config.countdown_days, 7);
//! assert_eq!(config.tick_interval_ms, 1000);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{LandingError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Product name used in the startup diagnostics
    pub product_name: String,

    /// Days from page load until the launch instant
    pub countdown_days: i64,

    /// Period of the countdown render tick
    pub tick_interval_ms: u32,

    /// Delay between emphasizing a slot and committing its new text
    pub emphasis_delay_ms: u32,

    /// How long the signup acknowledgment stays fully visible
    pub success_display_ms: u32,

    /// Fade-out length of the signup acknowledgment before removal
    pub success_fade_ms: u32,

    /// Delay before focusing the email input after a scroll to the signup section
    pub focus_delay_ms: u32,

    /// Per-index delay of the time-unit load-in animation
    pub load_stagger_ms: u32,

    /// Visible fraction of a pricing card that triggers its reveal
    pub reveal_threshold: f64,

    /// Root margin of the reveal observer
    pub reveal_root_margin: String,

    /// Treat absent page elements as a startup failure instead of skipping them
    pub strict_mounting: bool,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            product_name: "Officelite".to_string(),
            countdown_days: 30,
            tick_interval_ms: 1000,
            emphasis_delay_ms: 100,
            success_display_ms: 4000,
            success_fade_ms: 300,
            focus_delay_ms: 500,
            load_stagger_ms: 100,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -100px 0px".to_string(),
            strict_mounting: false,
        }
    }
}

impl LandingConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(LandingError::Config(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }

        if self.countdown_days < 0 {
            return Err(LandingError::Config(
                "countdown_days cannot be negative".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(LandingError::Config(format!(
                "reveal_threshold must be between 0 and 1, got {}",
                self.reveal_threshold
            )));
        }

        Ok(())
    }
}
