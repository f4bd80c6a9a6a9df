// File: crates/timechart-core/src/lib.rs
// Summary: Core library entry point; exports time ranges, the layout engine and the interaction state machine.

pub mod axis;
pub mod config;
pub mod container;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod scale;
pub mod time_range;
pub mod types;
pub mod view;

pub use axis::{AxisPlacement, AxisSlot, Side};
pub use config::ChartConfig;
pub use container::ChartContainer;
pub use error::{ConfigError, LayoutError};
pub use interaction::{InteractionConfig, InteractionState, Modifiers, Notification, PointerEvent, Step, Tracker};
pub use layout::{compute_axis_widths, compute_layout, compute_row_offsets, compute_time_scale, LayoutOptions, LayoutResult, RowDescriptor, Slot};
pub use scale::TimeScale;
pub use time_range::{Time, TimeRange};
pub use types::Padding;
pub use view::ViewLimits;
