// File: crates/timechart-core/src/layout.rs
// Summary: Layout engine; aligns axis columns across rows, builds the shared time scale, stacks rows.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::axis::{AxisPlacement, AxisSlot, Side};
use crate::error::LayoutError;
use crate::geometry::Rect;
use crate::scale::TimeScale;
use crate::time_range::TimeRange;
use crate::types::{Padding, TIME_AXIS_HEIGHT, WIDTH};

/// One entry of a row, in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub enum Slot {
    Axis(AxisSlot),
    Plot,
}

/// Caller-built description of a chart row: axis slots around exactly one plot slot.
#[derive(Clone, Debug, PartialEq)]
pub struct RowDescriptor {
    pub slots: Vec<Slot>,
    pub height: f64,
    pub visible: bool,
}

impl RowDescriptor {
    pub fn new(height: f64) -> Self {
        Self { slots: Vec::new(), height, visible: true }
    }

    pub fn axis(mut self, slot: AxisSlot) -> Self {
        self.slots.push(Slot::Axis(slot));
        self
    }

    pub fn plot(mut self) -> Self {
        self.slots.push(Slot::Plot);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Split the row's axes into (left, right), each ordered by distance from the plot.
    ///
    /// `row` only labels the error.
    pub fn sided_axes(&self, row: usize) -> Result<(Vec<&AxisSlot>, Vec<&AxisSlot>), LayoutError> {
        let plot_slots = self.slots.iter().filter(|s| matches!(s, Slot::Plot)).count();
        if plot_slots != 1 {
            return Err(LayoutError::Configuration { row, plot_slots });
        }
        let mut left = Vec::new();
        let mut right = Vec::new();
        let mut past_plot = false;
        for slot in &self.slots {
            match slot {
                Slot::Plot => past_plot = true,
                Slot::Axis(a) if past_plot => right.push(a),
                Slot::Axis(a) => left.push(a),
            }
        }
        left.reverse();
        Ok((left, right))
    }
}

/// Per-position column widths, indexed by distance from the plot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisWidths {
    pub left: Vec<f64>,
    pub right: Vec<f64>,
    /// Rows skipped because of a malformed slot list.
    pub errors: Vec<LayoutError>,
}

impl AxisWidths {
    pub fn left_total(&self) -> f64 { self.left.iter().sum() }
    pub fn right_total(&self) -> f64 { self.right.iter().sum() }
}

fn widen(columns: &mut Vec<f64>, slots: &[&AxisSlot]) {
    if columns.len() < slots.len() {
        columns.resize(slots.len(), 0.0);
    }
    for (col, slot) in columns.iter_mut().zip(slots) {
        *col = col.max(slot.effective_width());
    }
}

/// Column widths on each side of the plot: the widest slot at each position over all rows.
///
/// A row without exactly one plot slot is reported in `errors` and contributes nothing.
pub fn compute_axis_widths(rows: &[RowDescriptor]) -> AxisWidths {
    let mut out = AxisWidths::default();
    for (i, row) in rows.iter().enumerate() {
        match row.sided_axes(i) {
            Ok((left, right)) => {
                widen(&mut out.left, &left);
                widen(&mut out.right, &right);
            }
            Err(e) => out.errors.push(e),
        }
    }
    out
}

/// Scale mapping `time_range` onto `[0, pixel_width]`.
pub fn compute_time_scale(time_range: Option<TimeRange>, pixel_width: f64, use_utc: bool) -> Result<TimeScale, LayoutError> {
    TimeScale::new(time_range, pixel_width, use_utc)
}

fn stack(heights: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut y = 0.0;
    heights
        .into_iter()
        .map(|h| {
            let offset = y;
            y += h;
            offset
        })
        .collect()
}

/// Top offset of every row; hidden and malformed rows take no space but keep
/// their entry, matching [`LayoutResult::row_offsets`].
pub fn compute_row_offsets(rows: &[RowDescriptor]) -> Vec<f64> {
    stack(rows.iter().enumerate().map(|(i, r)| {
        if r.visible && r.sided_axes(i).is_ok() {
            r.height.max(0.0)
        } else {
            0.0
        }
    }))
}

/// Container geometry that is not part of the row list.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutOptions {
    pub width: f64,
    pub padding: Padding,
    pub use_utc: bool,
    pub time_axis_height: f64,
    pub hide_time_axis: bool,
    pub title_height: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            padding: Padding::default(),
            use_utc: false,
            time_axis_height: TIME_AXIS_HEIGHT,
            hide_time_axis: false,
            title_height: 0.0,
        }
    }
}

/// Resolved placement of one row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowLayout {
    pub index: usize,
    /// Offset from the top of the row stack.
    pub offset: f64,
    /// Height actually occupied (0 for hidden or failed rows).
    pub height: f64,
    pub visible: bool,
    /// The row's slot list was malformed; see [`LayoutResult::row_errors`].
    pub failed: bool,
    pub axes: Vec<AxisPlacement>,
}

/// Output of a layout pass. Recomputed from scratch on every input change.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutResult {
    pub left_widths: Vec<f64>,
    pub right_widths: Vec<f64>,
    pub left_width: f64,
    pub right_width: f64,
    pub plot_width: f64,
    pub row_offsets: Vec<f64>,
    pub rows: Vec<RowLayout>,
    pub total_height: f64,
    pub time_scale: TimeScale,
    pub row_errors: Vec<LayoutError>,
    pub padding: Padding,
    pub title_height: f64,
    pub time_axis_height: f64,
}

impl LayoutResult {
    /// Container x of the plot's left edge.
    pub fn plot_left(&self) -> f64 {
        self.padding.left + self.left_width
    }

    /// Container y where the row stack starts.
    pub fn rows_top(&self) -> f64 {
        self.padding.top + self.title_height
    }

    pub fn rows_height(&self) -> f64 {
        self.rows.iter().map(|r| r.height).sum()
    }

    /// Plot area spanning every row, in container pixels.
    pub fn plot_rect(&self) -> Rect {
        Rect::from_ltwh(self.plot_left(), self.rows_top(), self.plot_width, self.rows_height())
    }

    /// Plot area of a single row.
    pub fn row_rect(&self, index: usize) -> Option<Rect> {
        let row = self.rows.get(index)?;
        Some(Rect::from_ltwh(self.plot_left(), self.rows_top() + row.offset, self.plot_width, row.height))
    }

    /// Container y of the shared time axis.
    pub fn time_axis_top(&self) -> f64 {
        self.rows_top() + self.rows_height()
    }

    /// Container x to plot-relative x, the space the time scale works in.
    pub fn to_plot_x(&self, x: f64) -> f64 {
        x - self.plot_left()
    }
}

fn place_axes(slots: &[&AxisSlot], columns: &[f64], side: Side, edge: f64) -> Vec<AxisPlacement> {
    let mut out = Vec::with_capacity(slots.len());
    let mut used = 0.0;
    for (position, (slot, &width)) in slots.iter().zip(columns).enumerate() {
        let x = match side {
            Side::Left => edge - used - width,
            Side::Right => edge + used,
        };
        used += width;
        if slot.visible {
            out.push(AxisPlacement { id: slot.id.clone(), side, position, x, width });
        }
    }
    out
}

/// Full layout pass: axis columns, time scale, row stacking and axis placement.
///
/// Malformed rows are reported in `row_errors` and laid out empty; a missing
/// time range or a plot with no width fails the whole pass.
pub fn compute_layout(
    rows: &[RowDescriptor],
    time_range: Option<TimeRange>,
    opts: &LayoutOptions,
) -> Result<LayoutResult, LayoutError> {
    let time_range = time_range.ok_or(LayoutError::MissingTimeRange)?;
    let widths = compute_axis_widths(rows);
    for e in &widths.errors {
        warn!(error = %e, "skipping malformed chart row");
    }

    let left_width = widths.left_total();
    let right_width = widths.right_total();
    let plot_width = opts.width - left_width - right_width - opts.padding.hsum();
    if !(plot_width > 0.0) {
        return Err(LayoutError::DegenerateGeometry {
            container_width: opts.width,
            left_width,
            right_width,
            padding: opts.padding.hsum(),
            plot_width,
        });
    }
    let time_scale = compute_time_scale(Some(time_range), plot_width, opts.use_utc)?;

    let plot_left = opts.padding.left + left_width;
    let plot_right = plot_left + plot_width;
    let mut layouts = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let (failed, axes) = match row.sided_axes(index) {
            Ok((left, right)) => {
                let mut axes = place_axes(&left, &widths.left, Side::Left, plot_left);
                axes.extend(place_axes(&right, &widths.right, Side::Right, plot_right));
                (false, axes)
            }
            Err(_) => (true, Vec::new()),
        };
        let height = if row.visible && !failed { row.height.max(0.0) } else { 0.0 };
        layouts.push(RowLayout { index, offset: 0.0, height, visible: row.visible, failed, axes });
    }
    let row_offsets = stack(layouts.iter().map(|r| r.height));
    for (row, &offset) in layouts.iter_mut().zip(&row_offsets) {
        row.offset = offset;
    }

    let time_axis_height = if opts.hide_time_axis { 0.0 } else { opts.time_axis_height.max(0.0) };
    let rows_height: f64 = layouts.iter().map(|r| r.height).sum();
    let total_height = opts.padding.vsum() + opts.title_height + rows_height + time_axis_height;

    debug!(
        left_width,
        right_width,
        plot_width,
        total_height,
        rows = rows.len(),
        range = %time_range,
        "layout computed"
    );

    Ok(LayoutResult {
        left_widths: widths.left,
        right_widths: widths.right,
        left_width,
        right_width,
        plot_width,
        row_offsets,
        rows: layouts,
        total_height,
        time_scale,
        row_errors: widths.errors,
        padding: opts.padding,
        title_height: opts.title_height,
        time_axis_height,
    })
}
