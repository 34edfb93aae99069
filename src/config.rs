//! Session settings.

use crate::float_types::Real;
use crate::surface::Color;
use serde::{Deserialize, Serialize};

/// Tunables for one animation session.
///
/// Every field has a default, so a partial JSON object is a valid config:
///
/// ```
/// # use epicycles::config::EngineConfig;
/// let config: EngineConfig = serde_json::from_str(r#"{ "frame_interval_ms": 4 }"#).unwrap();
/// assert_eq!(config.frame_interval_ms, 4);
/// assert_eq!(config.default_term_count, 200);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Time advanced per tick. One full period of the series is `t = 1`.
    pub time_step: Real,
    /// Fraction of the viewport the drawing may occupy, in (0, 1].
    pub margin_factor: Real,
    /// Terms drawn per curve at start, capped by the shortest curve.
    pub default_term_count: usize,
    /// Wall-clock delay between ticks.
    pub frame_interval_ms: u64,
    pub show_circles: bool,
    pub show_vectors: bool,
    pub path_color: Color,
    pub vector_color: Color,
    pub circle_color: Color,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_step: 0.001,
            margin_factor: 0.9,
            default_term_count: 200,
            frame_interval_ms: 10,
            show_circles: true,
            show_vectors: true,
            path_color: Color::CYAN,
            vector_color: Color::WHITE,
            circle_color: Color::WHITE,
        }
    }
}

impl EngineConfig {
    pub const fn with_time_step(mut self, time_step: Real) -> Self {
        self.time_step = time_step;
        self
    }

    pub const fn with_margin_factor(mut self, margin_factor: Real) -> Self {
        self.margin_factor = margin_factor;
        self
    }

    pub const fn with_default_term_count(mut self, count: usize) -> Self {
        self.default_term_count = count;
        self
    }

    pub const fn with_frame_interval_ms(mut self, ms: u64) -> Self {
        self.frame_interval_ms = ms;
        self
    }

    pub const fn with_visibility(mut self, show_circles: bool, show_vectors: bool) -> Self {
        self.show_circles = show_circles;
        self.show_vectors = show_vectors;
        self
    }
}
