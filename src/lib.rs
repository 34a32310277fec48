//! chart-range: headless date-range selection for time-series line charts.
//!
//! The crate maps horizontal pointer positions to readings, runs the drag
//! state machine that creates, resizes and moves a selection, and derives
//! the overlay geometry a rendering surface draws on top of the chart.
//! Chart drawing and gesture recognition stay with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod overlay;
pub mod render;
pub mod telemetry;

pub use api::{RangeSelectorConfig, RangeSelectorEngine};
pub use error::{RangeError, RangeResult};
