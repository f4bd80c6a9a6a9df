// File: crates/timechart-core/src/error.rs
// Summary: Error taxonomy for layout passes and configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while laying out a chart container.
///
/// `Configuration` is per-row: it is collected into the layout result and the
/// remaining rows still lay out. The other variants fail the whole pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A row did not declare exactly one plot slot.
    #[error("row {row}: expected exactly one plot slot, found {plot_slots}")]
    Configuration { row: usize, plot_slots: usize },

    /// No time range was supplied to the layout pass.
    #[error("no time range supplied")]
    MissingTimeRange,

    /// The time range has its begin after its end.
    #[error("invalid time range: begin {begin_ms}ms is after end {end_ms}ms")]
    InvalidTimeRange { begin_ms: i64, end_ms: i64 },

    /// The container is too narrow to leave any room for the plot.
    #[error(
        "container width {container_width}px leaves no room for the plot \
         (axes {left_width}+{right_width}px, padding {padding}px, plot {plot_width}px)"
    )]
    DegenerateGeometry {
        container_width: f64,
        left_width: f64,
        right_width: f64,
        padding: f64,
        plot_width: f64,
    },

    /// A time scale was asked to map onto a plot with no horizontal room.
    #[error("plot width {plot_width}px must be positive and finite")]
    NonPositivePlotWidth { plot_width: f64 },
}

impl LayoutError {
    /// Whether this error aborts the whole layout pass.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, LayoutError::Configuration { .. })
    }
}

/// Errors loading a [`crate::config::ChartConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}
