use crate::error::{RangeError, RangeResult};
use crate::interaction::SelectorTuning;

use super::{DateLabelConfig, RangeSelectorConfig};

/// Largest accepted display offset from UTC, in minutes.
const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

pub(super) fn validate_engine_config(config: RangeSelectorConfig) -> RangeResult<RangeSelectorConfig> {
    validate_selector_tuning(config.selector)?;
    config.overlay.validate()?;
    config.zoom.validate()?;
    validate_label_config(config.labels)?;
    Ok(config)
}

pub(super) fn validate_selector_tuning(tuning: SelectorTuning) -> RangeResult<SelectorTuning> {
    if !tuning.handle_tolerance_px.is_finite() || tuning.handle_tolerance_px < 0.0 {
        return Err(RangeError::InvalidConfig(
            "handle_tolerance_px must be finite and >= 0".to_owned(),
        ));
    }
    if !tuning.min_boundary_gap_px.is_finite() || tuning.min_boundary_gap_px <= 0.0 {
        return Err(RangeError::InvalidConfig(
            "min_boundary_gap_px must be finite and > 0".to_owned(),
        ));
    }
    Ok(tuning)
}

pub(super) fn validate_label_config(labels: DateLabelConfig) -> RangeResult<DateLabelConfig> {
    if labels.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
        return Err(RangeError::InvalidConfig(format!(
            "utc_offset_minutes must be within +/-{MAX_UTC_OFFSET_MINUTES}"
        )));
    }
    Ok(labels)
}
