//! Host-facing engine facade.
//!
//! `RangeSelectorEngine` is split across controller files by concern: data
//! and layout, gestures, labels and summaries, snapshots, plugins.

mod data_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod gesture_controller;
mod json_contract;
mod label_format;
mod overlay_render_frame_builder;
mod plugin_dispatch;
mod plugin_registry;
mod selection_summary;
mod snapshot_controller;
mod validation;

pub use engine::RangeSelectorEngine;
pub use engine_config::RangeSelectorConfig;
pub use engine_snapshot::SelectionSnapshot;
pub use json_contract::{SELECTION_SNAPSHOT_JSON_SCHEMA_V1, SelectionSnapshotJsonContractV1};
pub use label_format::{BoundaryLabels, DateLabelConfig, DateLabelPattern, format_date_label};
pub use selection_summary::SelectionSummary;
