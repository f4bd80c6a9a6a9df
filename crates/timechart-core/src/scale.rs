// File: crates/timechart-core/src/scale.rs
// Summary: Linear time scale mapping a time domain onto the plot's pixel range, with inverse.

use chrono::{DateTime, Local};

use crate::error::LayoutError;
use crate::time_range::{time_from_millis, Time, TimeRange};

/// Horizontal time scale: `[begin, end]` maps linearly onto `[0, width]` plot pixels.
///
/// Pixel 0 is the left edge of the plot slot, not of the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    domain: TimeRange,
    width_px: f64,
    utc: bool,
}

impl TimeScale {
    /// Build the scale for `time_range` over `pixel_width` plot pixels.
    ///
    /// Fails when the range is missing or the plot has no horizontal room.
    pub fn new(time_range: Option<TimeRange>, pixel_width: f64, utc: bool) -> Result<Self, LayoutError> {
        let domain = time_range.ok_or(LayoutError::MissingTimeRange)?;
        if !(pixel_width > 0.0) || !pixel_width.is_finite() {
            return Err(LayoutError::NonPositivePlotWidth { plot_width: pixel_width });
        }
        Ok(Self { domain, width_px: pixel_width, utc })
    }

    pub fn domain(&self) -> TimeRange { self.domain }
    pub fn range(&self) -> (f64, f64) { (0.0, self.width_px) }
    pub fn width(&self) -> f64 { self.width_px }
    pub fn is_utc(&self) -> bool { self.utc }

    /// Domain endpoints as local calendar time, for tick generation when not in UTC mode.
    pub fn local_domain(&self) -> (DateTime<Local>, DateTime<Local>) {
        (
            self.domain.begin().with_timezone(&Local),
            self.domain.end().with_timezone(&Local),
        )
    }

    /// Pixels per millisecond; 0 for a zero-length domain.
    #[inline]
    pub fn px_per_ms(&self) -> f64 {
        let span = self.domain.duration_ms() as f64;
        if span <= 0.0 { 0.0 } else { self.width_px / span }
    }

    #[inline]
    pub fn apply_ms(&self, ms: f64) -> f64 {
        (ms - self.domain.begin_ms() as f64) * self.px_per_ms()
    }

    #[inline]
    pub fn apply(&self, t: Time) -> f64 {
        self.apply_ms(t.timestamp_millis() as f64)
    }

    /// Inverse of [`apply_ms`](Self::apply_ms); a zero-length domain inverts to `begin`.
    #[inline]
    pub fn invert_ms(&self, px: f64) -> f64 {
        let k = self.px_per_ms();
        let begin = self.domain.begin_ms() as f64;
        if k == 0.0 { begin } else { begin + px / k }
    }

    /// Instant under plot pixel `px`, rounded to the millisecond.
    pub fn invert(&self, px: f64) -> Time {
        time_from_millis(self.invert_ms(px).round() as i64)
    }
}
