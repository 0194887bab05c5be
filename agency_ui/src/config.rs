//! Timing configuration for the animated parts of the page.
//!
//! Values come from the `"config"` object of the embedded content document.
//! Every field is optional there; missing fields fall back to the defaults
//! below.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// Timings shared by the carousel, counters, contact form and toasts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Auto-advance period of the testimonial carousel.
    pub carousel_interval_ms: u64,
    /// How many testimonials are on screen at once.
    pub visible_testimonials: usize,
    /// Total run time of one animated counter.
    pub counter_duration_ms: u64,
    /// Number of increments a counter takes to reach its target.
    pub counter_steps: u32,
    /// Delay added per card index before a services metric starts counting.
    pub counter_stagger_ms: u64,
    /// Fake network latency of the contact form.
    pub submit_delay_ms: u64,
    /// How long a toast stays on screen.
    pub toast_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            carousel_interval_ms: 5000,
            visible_testimonials: 3,
            counter_duration_ms: 2000,
            counter_steps: 60,
            counter_stagger_ms: 200,
            submit_delay_ms: 1000,
            toast_ms: 4000,
        }
    }
}

impl SiteConfig {
    /// Reject values that would stall or spin a timer.
    pub fn validate(&self) -> Result<()> {
        if self.counter_steps == 0 {
            return Err(SiteError::InvalidConfig(
                "counter_steps must be at least 1".into(),
            ));
        }
        if self.carousel_interval_ms == 0 {
            return Err(SiteError::InvalidConfig(
                "carousel_interval_ms must be positive".into(),
            ));
        }
        if self.visible_testimonials == 0 {
            return Err(SiteError::InvalidConfig(
                "visible_testimonials must be at least 1".into(),
            ));
        }
        if self.counter_duration_ms < u64::from(self.counter_steps) {
            return Err(SiteError::InvalidConfig(format!(
                "counter_duration_ms ({}) is shorter than one ms per step ({} steps)",
                self.counter_duration_ms, self.counter_steps
            )));
        }
        Ok(())
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    /// Interval between two counter increments.
    pub fn counter_tick(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms / u64::from(self.counter_steps.max(1)))
    }

    /// Start delay for the counter at `index` within its group.
    pub fn counter_delay(&self, index: usize) -> Duration {
        Duration::from_millis(self.counter_stagger_ms.saturating_mul(index as u64))
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.counter_tick(), Duration::from_millis(33));
        assert_eq!(config.carousel_interval(), Duration::from_secs(5));
    }

    #[test]
    fn zero_steps_rejected() {
        let config = SiteConfig {
            counter_steps: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("counter_steps"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: SiteConfig = serde_json::from_str(r#"{ "submit_delay_ms": 250 }"#).unwrap();
        assert_eq!(config.submit_delay_ms, 250);
        assert_eq!(config.counter_steps, 60);
        assert_eq!(config.visible_testimonials, 3);
    }

    #[test]
    fn stagger_scales_with_index() {
        let config = SiteConfig::default();
        assert_eq!(config.counter_delay(0), Duration::ZERO);
        assert_eq!(config.counter_delay(3), Duration::from_millis(600));
    }
}
