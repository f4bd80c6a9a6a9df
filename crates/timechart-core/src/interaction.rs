// File: crates/timechart-core/src/interaction.rs
// Summary: Pointer/wheel state machine turning raw events into pan, zoom-box, wheel-zoom and tracker updates.
// Notes:
// - The state is a plain value: every call consumes it and returns the next one
//   along with the notifications the host should act on.
// - Event coordinates are container-relative; the machine converts them to plot
//   pixels with the layout it is given.

use serde::Deserialize;
use tracing::{debug, trace};

use crate::layout::LayoutResult;
use crate::scale::TimeScale;
use crate::time_range::{Time, TimeRange};
use crate::view::{self, ViewLimits};

/// Behaviour switches and tuning for [`InteractionState::handle`].
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InteractionConfig {
    /// Drag to pan and wheel to zoom.
    pub pan_enabled: bool,
    /// Shift-drag to select a zoom box.
    pub drag_zoom_enabled: bool,
    pub min_duration_ms: i64,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub min_time: Option<Time>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub max_time: Option<Time>,
    /// Pointer travel, in pixels, below which a press-release is a click.
    pub drag_threshold: f64,
    /// Zoom factor applied per wheel notch.
    pub wheel_zoom_step: f64,
    /// Wheel delta that counts as one notch.
    pub wheel_notch: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            pan_enabled: false,
            drag_zoom_enabled: false,
            min_duration_ms: 0,
            min_time: None,
            max_time: None,
            drag_threshold: 3.0,
            wheel_zoom_step: 1.1,
            wheel_notch: 100.0,
        }
    }
}

impl InteractionConfig {
    /// Range limits for produced ranges. Durations never go below 1 ms, so a
    /// range can always be zoomed or panned again.
    pub fn limits(&self) -> ViewLimits {
        ViewLimits {
            min_duration_ms: self.min_duration_ms.max(1),
            min_time: self.min_time,
            max_time: self.max_time,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false, ctrl: false, alt: false, meta: false };
    pub const SHIFT: Modifiers = Modifiers { shift: true, ctrl: false, alt: false, meta: false };
}

/// Raw input from the hosting surface, relative to the container origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { x: f64, y: f64, modifiers: Modifiers },
    Move { x: f64, y: f64, button_held: bool },
    Up { x: f64, y: f64 },
    Leave,
    Wheel { x: f64, y: f64, delta_y: f64 },
    Click { x: f64, y: f64 },
}

/// Hovered instant plus the scale it was computed with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tracker {
    pub time: Time,
    /// Plot-relative pixel.
    pub x: f64,
    pub scale: TimeScale,
}

/// What the host should react to after an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Notification {
    /// Committed pan, zoom-box or wheel zoom.
    TimeRangeChanged(TimeRange),
    /// Zoom box being dragged; `None` clears it.
    ZoomBoxPreview(Option<TimeRange>),
    /// Tracker moved; `None` when the pointer left the plot.
    TrackerChanged(Option<Tracker>),
    BackgroundClick,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Mode {
    #[default]
    Idle,
    Panning {
        /// Plot-relative x of the press.
        anchor_x: f64,
        anchor_range: TimeRange,
        moved: bool,
    },
    DraggingZoomBox {
        anchor_x: f64,
        preview: Option<TimeRange>,
        moved: bool,
    },
}

/// Interaction state. Idle with a hover position is the "hovering" overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionState {
    mode: Mode,
    hover_x: Option<f64>,
    /// Set by a release that already reported (or ruled out) a click.
    suppress_click: bool,
}

/// Result of feeding one event to the machine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Step {
    pub state: InteractionState,
    pub notifications: Vec<Notification>,
}

impl Step {
    fn quiet(state: InteractionState) -> Self {
        Self { state, notifications: Vec::new() }
    }
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &Mode { &self.mode }

    pub fn is_idle(&self) -> bool { matches!(self.mode, Mode::Idle) }

    /// Plot-relative x of the hovered pixel, if hovering.
    pub fn hover_x(&self) -> Option<f64> { self.hover_x }

    pub fn zoom_box(&self) -> Option<TimeRange> {
        match self.mode {
            Mode::DraggingZoomBox { preview, .. } => preview,
            _ => None,
        }
    }

    /// Drop any drag and hover, back to Idle.
    pub fn reset(self) -> Step {
        let mut notifications = Vec::new();
        if self.zoom_box().is_some() {
            notifications.push(Notification::ZoomBoxPreview(None));
        }
        if self.hover_x.is_some() {
            notifications.push(Notification::TrackerChanged(None));
        }
        if !self.is_idle() {
            debug!("interaction reset while dragging");
        }
        Step { state: InteractionState::default(), notifications }
    }

    /// Advance the machine by one event against the current layout.
    pub fn handle(self, event: &PointerEvent, layout: &LayoutResult, config: &InteractionConfig) -> Step {
        match *event {
            PointerEvent::Down { x, y, modifiers } => self.on_down(x, y, modifiers, layout, config),
            PointerEvent::Move { x, y, button_held } => self.on_move(x, y, button_held, layout, config),
            PointerEvent::Up { x, .. } => self.on_up(x, layout, config),
            PointerEvent::Leave => self.reset(),
            PointerEvent::Wheel { x, y, delta_y } => self.on_wheel(x, y, delta_y, layout, config),
            PointerEvent::Click { x, y } => self.on_click(x, y, layout),
        }
    }

    fn on_down(mut self, x: f64, y: f64, modifiers: Modifiers, layout: &LayoutResult, config: &InteractionConfig) -> Step {
        self.suppress_click = false;
        if !self.is_idle() || !layout.plot_rect().contains(x, y) {
            return Step::quiet(self);
        }
        let mut notifications = Vec::new();
        if self.hover_x.take().is_some() {
            notifications.push(Notification::TrackerChanged(None));
        }
        let anchor_x = layout.to_plot_x(x);
        if modifiers.shift && config.drag_zoom_enabled {
            debug!(anchor_x, "zoom box started");
            self.mode = Mode::DraggingZoomBox { anchor_x, preview: None, moved: false };
        } else if config.pan_enabled {
            let anchor_range = layout.time_scale.domain();
            debug!(anchor_x, range = %anchor_range, "pan started");
            self.mode = Mode::Panning { anchor_x, anchor_range, moved: false };
        }
        Step { state: self, notifications }
    }

    fn on_move(mut self, x: f64, y: f64, button_held: bool, layout: &LayoutResult, config: &InteractionConfig) -> Step {
        self.suppress_click = false;
        let px = layout.to_plot_x(x);
        let scale = &layout.time_scale;
        match self.mode {
            Mode::Panning { anchor_x, anchor_range, moved } => {
                let moved = moved || (px - anchor_x).abs() > config.drag_threshold;
                self.mode = Mode::Panning { anchor_x, anchor_range, moved };
                let shift_ms = pan_shift_ms(anchor_x, px, &anchor_range, layout.plot_width);
                let range = view::clamp_pan(&view::pan_by(&anchor_range, shift_ms), &config.limits());
                trace!(shift_ms, range = %range, "pan");
                Step { state: self, notifications: vec![Notification::TimeRangeChanged(range)] }
            }
            Mode::DraggingZoomBox { anchor_x, moved, .. } => {
                let moved = moved || (px - anchor_x).abs() > config.drag_threshold;
                let preview = TimeRange::between(scale.invert(anchor_x), scale.invert(px));
                self.mode = Mode::DraggingZoomBox { anchor_x, preview: Some(preview), moved };
                trace!(range = %preview, "zoom box preview");
                Step { state: self, notifications: vec![Notification::ZoomBoxPreview(Some(preview))] }
            }
            Mode::Idle => {
                if !button_held && layout.plot_rect().contains(x, y) {
                    self.hover_x = Some(px);
                    let tracker = Tracker { time: scale.invert(px), x: px, scale: *scale };
                    Step { state: self, notifications: vec![Notification::TrackerChanged(Some(tracker))] }
                } else if self.hover_x.take().is_some() {
                    Step { state: self, notifications: vec![Notification::TrackerChanged(None)] }
                } else {
                    Step::quiet(self)
                }
            }
        }
    }

    fn on_up(self, x: f64, layout: &LayoutResult, config: &InteractionConfig) -> Step {
        let px = layout.to_plot_x(x);
        let mut notifications = Vec::new();
        match self.mode {
            Mode::Idle => return Step::quiet(InteractionState { suppress_click: false, ..self }),
            Mode::Panning { anchor_x, moved, .. } => {
                if !moved && (px - anchor_x).abs() <= config.drag_threshold {
                    notifications.push(Notification::BackgroundClick);
                }
                debug!("pan finished");
            }
            Mode::DraggingZoomBox { anchor_x, preview, moved } => {
                if preview.is_some() {
                    notifications.push(Notification::ZoomBoxPreview(None));
                }
                let delta = (px - anchor_x).abs();
                if delta > config.drag_threshold {
                    let scale = &layout.time_scale;
                    let selected = TimeRange::between(scale.invert(anchor_x), scale.invert(px));
                    let limits = config.limits();
                    if selected.duration_ms() >= limits.min_duration_ms {
                        let center = (selected.begin_ms() as f64 + selected.end_ms() as f64) / 2.0;
                        let range = view::clamp_zoom(&selected, &limits, center);
                        debug!(range = %range, "zoom box committed");
                        notifications.push(Notification::TimeRangeChanged(range));
                    } else {
                        debug!(duration_ms = selected.duration_ms(), "zoom box below minimum duration");
                    }
                } else if !moved {
                    notifications.push(Notification::BackgroundClick);
                }
            }
        }
        let state = InteractionState { mode: Mode::Idle, hover_x: None, suppress_click: true };
        Step { state, notifications }
    }

    fn on_wheel(mut self, x: f64, y: f64, delta_y: f64, layout: &LayoutResult, config: &InteractionConfig) -> Step {
        self.suppress_click = false;
        if !self.is_idle()
            || !config.pan_enabled
            || delta_y == 0.0
            || !delta_y.is_finite()
            || !layout.plot_rect().contains(x, y)
        {
            return Step::quiet(self);
        }
        let scale = &layout.time_scale;
        let current = scale.domain();
        let center = scale.invert_ms(layout.to_plot_x(x));
        let limits = config.limits();
        let mut factor = view::wheel_factor(delta_y, config.wheel_zoom_step, config.wheel_notch);
        let dur = current.duration_ms();
        if dur > 0 && limits.min_duration_ms > 0 {
            factor = factor.max(limits.min_duration_ms as f64 / dur as f64);
        }
        let zoomed = view::zoom_around(&current, center, factor);
        let range = view::clamp_zoom(&zoomed, &limits, center);
        debug!(factor, range = %range, "wheel zoom");
        Step { state: self, notifications: vec![Notification::TimeRangeChanged(range)] }
    }

    fn on_click(mut self, x: f64, y: f64, layout: &LayoutResult) -> Step {
        let suppressed = std::mem::take(&mut self.suppress_click);
        if self.is_idle() && !suppressed && layout.plot_rect().contains(x, y) {
            return Step { state: self, notifications: vec![Notification::BackgroundClick] };
        }
        Step::quiet(self)
    }
}

/// `invert(anchor_x) - invert(x)` for the anchor range's scale, in whole milliseconds.
fn pan_shift_ms(anchor_x: f64, x: f64, anchor_range: &TimeRange, plot_width: f64) -> i64 {
    let dur = anchor_range.duration_ms() as f64;
    if plot_width <= 0.0 || dur <= 0.0 {
        return 0;
    }
    ((anchor_x - x) * dur / plot_width).round() as i64
}
