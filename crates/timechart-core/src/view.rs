// File: crates/timechart-core/src/view.rs
// Visible-range arithmetic for pan/zoom, plus the limits every produced range is clamped to.

use crate::geometry::clamp;
use crate::time_range::{time_from_millis, Time, TimeRange};

/// Hard limits on any range produced by an interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewLimits {
    /// Shortest allowed duration; 0 disables the floor.
    pub min_duration_ms: i64,
    pub min_time: Option<Time>,
    pub max_time: Option<Time>,
}

impl ViewLimits {
    fn bounds_ms(&self) -> (Option<i64>, Option<i64>) {
        (
            self.min_time.map(|t| t.timestamp_millis()),
            self.max_time.map(|t| t.timestamp_millis()),
        )
    }
}

fn range_ms(begin: i64, end: i64) -> TimeRange {
    TimeRange::between(time_from_millis(begin), time_from_millis(end))
}

/// `anchor` moved by `shift_ms`, duration untouched.
pub fn pan_by(anchor: &TimeRange, shift_ms: i64) -> TimeRange {
    anchor.shifted_ms(shift_ms)
}

/// Scale `range` by `factor` around `center_ms`; `center_ms` keeps its relative position.
pub fn zoom_around(range: &TimeRange, center_ms: f64, factor: f64) -> TimeRange {
    let b = range.begin_ms() as f64;
    let e = range.end_ms() as f64;
    let nb = center_ms - (center_ms - b) * factor;
    let ne = center_ms + (e - center_ms) * factor;
    range_ms(nb.round() as i64, ne.round() as i64)
}

/// Zoom factor for a wheel delta: `step` per `notch` units, positive delta zooms out.
pub fn wheel_factor(delta_y: f64, step: f64, notch: f64) -> f64 {
    if !(notch > 0.0) || !(step > 0.0) {
        return 1.0;
    }
    let factor = step.powf(delta_y / notch);
    if !factor.is_finite() {
        return 1.0;
    }
    clamp(factor, 0.1, 10.0)
}

/// Grow `range` to at least `min_ms`, keeping `anchor_ms` at the same relative position.
pub fn enforce_min_duration(range: &TimeRange, min_ms: i64, anchor_ms: f64) -> TimeRange {
    let dur = range.duration_ms();
    if min_ms <= 0 || dur >= min_ms {
        return *range;
    }
    let b = range.begin_ms() as f64;
    let ratio = if dur > 0 {
        clamp((anchor_ms - b) / dur as f64, 0.0, 1.0)
    } else {
        0.5
    };
    let begin = (anchor_ms - ratio * min_ms as f64).round() as i64;
    range_ms(begin, begin.saturating_add(min_ms))
}

/// Slide `range` rigidly so it sits inside the bounds. A range wider than the
/// bounds is aligned to `min_time`.
pub fn translate_into_bounds(range: &TimeRange, limits: &ViewLimits) -> TimeRange {
    let (lo, hi) = limits.bounds_ms();
    let mut shift = 0i64;
    if let Some(hi) = hi {
        if range.end_ms() > hi {
            shift = hi - range.end_ms();
        }
    }
    if let Some(lo) = lo {
        if range.begin_ms() + shift < lo {
            shift = lo - range.begin_ms();
        }
    }
    if shift == 0 { *range } else { range.shifted_ms(shift) }
}

/// Limits for a pan result: duration floor, then rigid translation.
pub fn clamp_pan(range: &TimeRange, limits: &ViewLimits) -> TimeRange {
    let center = (range.begin_ms() as f64 + range.end_ms() as f64) / 2.0;
    let r = enforce_min_duration(range, limits.min_duration_ms, center);
    translate_into_bounds(&r, limits)
}

/// Limits for a zoom result: duration floor around `anchor_ms`, translation,
/// then truncation to the bounds when the range is still wider than they allow.
pub fn clamp_zoom(range: &TimeRange, limits: &ViewLimits, anchor_ms: f64) -> TimeRange {
    let r = enforce_min_duration(range, limits.min_duration_ms, anchor_ms);
    let r = translate_into_bounds(&r, limits);
    if let (Some(lo), Some(hi)) = limits.bounds_ms() {
        let span = hi - lo;
        if span >= limits.min_duration_ms.max(0) && (r.begin_ms() < lo || r.end_ms() > hi) {
            return range_ms(r.begin_ms().max(lo), r.end_ms().min(hi));
        }
    }
    r
}
