// File: crates/timechart-core/src/types.rs
// Summary: Shared types and constants (default sizes, paddings).

use serde::Deserialize;

/// Default container width in pixels.
pub const WIDTH: f64 = 800.0;
/// Default axis slot width in pixels.
pub const AXIS_WIDTH: f64 = 40.0;
/// Default height of the shared time axis under the rows.
pub const TIME_AXIS_HEIGHT: f64 = 35.0;

/// Container padding, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same padding on all four sides.
    pub const fn uniform(p: f64) -> Self {
        Self::new(p, p, p, p)
    }
    /// Total horizontal padding (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical padding (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(0.0)
    }
}
