//! Tunables for the curve tracers and the shape dispatcher.
//!
//! Defaults are the classic textbook constants; every field can be overridden
//! and, with the `serde` feature, loaded from any serde format.

use crate::error::{Error, Result};

/// Point-density and tension settings for the curve tracers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CurveConfig {
    /// Number of uniform `t` steps for Bezier curves.
    pub bezier_steps: usize,

    /// Requested point count for a Hermite curve before the adaptive rule applies.
    pub hermite_points: usize,

    /// Upper bound on the distance-derived Hermite point count.
    pub hermite_max_points: usize,

    /// Cardinal spline tension `c`; tangents are `(c / 2) * (p[i+1] - p[i-1])`.
    pub tension: f64,

    /// Requested point count per cardinal spline segment.
    pub cardinal_points: usize,

    /// Upper bound on the distance-derived per-segment request.
    pub cardinal_max_points: usize,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            bezier_steps: 1000,
            hermite_points: 100,
            hermite_max_points: 1000,
            tension: 1.0,
            cardinal_points: 100,
            cardinal_max_points: 500,
        }
    }
}

impl CurveConfig {
    /// Hermite point count for a segment spanning `distance` pixels:
    /// `max(requested, min(cap, 2 * distance + 10))`.
    #[must_use]
    pub fn hermite_point_count(&self, requested: usize, distance: f64) -> usize {
        let adaptive = (distance * 2.0) as usize + 10;
        requested.max(self.hermite_max_points.min(adaptive))
    }

    /// Per-segment request a cardinal spline hands to the Hermite tracer:
    /// `max(requested, min(cap, 1.5 * distance + 20))`.
    #[must_use]
    pub fn cardinal_point_count(&self, distance: f64) -> usize {
        let adaptive = (distance * 1.5) as usize + 20;
        self.cardinal_points.max(self.cardinal_max_points.min(adaptive))
    }

    /// Reject settings that would leave a tracer with no step to take.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroStep`] for a zero Bezier step count or a Hermite or
    /// cardinal point count below two.
    pub fn validate(&self) -> Result<()> {
        if self.bezier_steps == 0 {
            return Err(Error::ZeroStep("bezier step count is zero"));
        }
        if self.hermite_points < 2 {
            return Err(Error::ZeroStep("hermite point count is below 2"));
        }
        if self.cardinal_points < 2 {
            return Err(Error::ZeroStep("cardinal point count is below 2"));
        }
        Ok(())
    }

    /// Override the cardinal tension.
    #[must_use]
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    /// Override the Bezier step count.
    #[must_use]
    pub fn with_bezier_steps(mut self, steps: usize) -> Self {
        self.bezier_steps = steps;
        self
    }
}

/// Which flood fill implementation region fills use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FloodStrategy {
    /// Call recursion on the four neighbours. Depth grows with region size.
    Recursive,
    /// Explicit stack of pending pixels.
    #[default]
    Iterative,
}
