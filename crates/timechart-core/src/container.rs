// File: crates/timechart-core/src/container.rs
// Summary: ChartContainer owns rows, options and the current time range, and loops interaction output back into layout.

use tracing::debug;

use crate::config::ChartConfig;
use crate::error::LayoutError;
use crate::interaction::{InteractionConfig, InteractionState, Notification, PointerEvent, Tracker};
use crate::layout::{compute_layout, LayoutOptions, LayoutResult, RowDescriptor};
use crate::time_range::TimeRange;

/// A stack of rows sharing one time axis.
///
/// Every committed time range from the interaction machine is applied to the
/// container's own range and the layout is recomputed before the next event.
pub struct ChartContainer {
    rows: Vec<RowDescriptor>,
    options: LayoutOptions,
    interaction: InteractionConfig,
    time_range: TimeRange,
    state: InteractionState,
    tracker: Option<Tracker>,
    layout: LayoutResult,
}

impl ChartContainer {
    pub fn new(rows: Vec<RowDescriptor>, time_range: TimeRange, config: ChartConfig) -> Result<Self, LayoutError> {
        let layout = compute_layout(&rows, Some(time_range), &config.layout)?;
        Ok(Self {
            rows,
            options: config.layout,
            interaction: config.interaction,
            time_range,
            state: InteractionState::new(),
            tracker: None,
            layout,
        })
    }

    pub fn rows(&self) -> &[RowDescriptor] { &self.rows }
    pub fn options(&self) -> &LayoutOptions { &self.options }
    pub fn interaction_config(&self) -> &InteractionConfig { &self.interaction }
    pub fn time_range(&self) -> TimeRange { self.time_range }
    pub fn state(&self) -> &InteractionState { &self.state }
    pub fn tracker(&self) -> Option<&Tracker> { self.tracker.as_ref() }
    pub fn layout(&self) -> &LayoutResult { &self.layout }

    fn relayout(&mut self) -> Result<(), LayoutError> {
        self.layout = compute_layout(&self.rows, Some(self.time_range), &self.options)?;
        Ok(())
    }

    /// Replace the time range. On error the previous range and layout are kept.
    pub fn set_time_range(&mut self, time_range: TimeRange) -> Result<(), LayoutError> {
        let layout = compute_layout(&self.rows, Some(time_range), &self.options)?;
        self.time_range = time_range;
        self.layout = layout;
        Ok(())
    }

    pub fn set_width(&mut self, width: f64) -> Result<(), LayoutError> {
        let mut options = self.options;
        options.width = width;
        self.layout = compute_layout(&self.rows, Some(self.time_range), &options)?;
        self.options = options;
        Ok(())
    }

    pub fn set_rows(&mut self, rows: Vec<RowDescriptor>) -> Result<(), LayoutError> {
        self.layout = compute_layout(&rows, Some(self.time_range), &self.options)?;
        self.rows = rows;
        Ok(())
    }

    pub fn set_interaction_config(&mut self, config: InteractionConfig) {
        self.interaction = config;
    }

    /// Abandon any drag or hover.
    pub fn reset(&mut self) -> Vec<Notification> {
        let step = self.state.reset();
        self.state = step.state;
        self.tracker = None;
        step.notifications
    }

    /// Feed one event through the interaction machine and apply its outcome.
    pub fn dispatch(&mut self, event: &PointerEvent) -> Result<Vec<Notification>, LayoutError> {
        let step = self.state.handle(event, &self.layout, &self.interaction);
        self.state = step.state;
        for n in &step.notifications {
            match n {
                Notification::TimeRangeChanged(range) => {
                    debug!(range = %range, "time range changed");
                    self.time_range = *range;
                    self.relayout()?;
                }
                Notification::TrackerChanged(t) => self.tracker = *t,
                Notification::ZoomBoxPreview(_) | Notification::BackgroundClick => {}
            }
        }
        Ok(step.notifications)
    }
}
