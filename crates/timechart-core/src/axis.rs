// File: crates/timechart-core/src/axis.rs
// Summary: Axis slot model and the resolved placement of each axis column.

use crate::types::AXIS_WIDTH;

/// Which side of the plot slot an axis sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// A y-axis column declared in a row. Its side follows from where it sits relative to the plot.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSlot {
    pub id: String,
    pub width: f64,
    pub visible: bool,
}

impl AxisSlot {
    pub fn new(id: impl Into<String>, width: f64) -> Self {
        Self { id: id.into(), width, visible: true }
    }

    /// Axis with the default 40px width.
    pub fn named(id: impl Into<String>) -> Self {
        Self::new(id, AXIS_WIDTH)
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Width this slot occupies in its column; hidden slots take none.
    pub fn effective_width(&self) -> f64 {
        if self.visible { self.width.max(0.0) } else { 0.0 }
    }
}

/// Where a visible axis lands once columns are aligned across rows.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisPlacement {
    pub id: String,
    pub side: Side,
    /// Distance from the plot slot, 0 = adjacent.
    pub position: usize,
    /// Container-relative x of the column's left edge.
    pub x: f64,
    /// Aligned column width (the widest slot at this position across rows).
    pub width: f64,
}
