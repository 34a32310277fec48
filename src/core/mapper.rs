//! Conversions between horizontal pixel offsets in the plot and readings.
//!
//! The forward mapping quantizes to the nearest sample at or before the
//! pointer, so `pixel -> index -> pixel` is only exact at sample positions.

use chrono::{DateTime, Utc};

use crate::core::primitives::datetime_to_unix_millis;
use crate::core::{ChartPixelBounds, SortedReadings};

/// Maps a pixel offset inside the plot (`0` = left edge) to a reading index.
///
/// The offset is clamped to `[0, chart_width]` first, so any out-of-range
/// input behaves like the nearest edge. Returns `None` when there are no
/// readings, when `chart_width` is not a finite positive number, or when the
/// offset is NaN.
#[must_use]
pub fn pixel_to_date_index(
    pixel_offset: f64,
    chart_width: f64,
    readings: &SortedReadings,
) -> Option<usize> {
    if readings.is_empty() || !chart_width.is_finite() || chart_width <= 0.0 {
        return None;
    }
    if pixel_offset.is_nan() {
        return None;
    }

    let clamped = pixel_offset.clamp(0.0, chart_width);
    let percentage = clamped / chart_width;
    let last_index = readings.len() - 1;
    let index = (percentage * last_index as f64).floor();
    if index < 0.0 {
        return None;
    }
    Some((index as usize).min(last_index))
}

/// Timestamp of the reading under `pixel_offset`.
#[must_use]
pub fn pixel_to_date(
    pixel_offset: f64,
    chart_width: f64,
    readings: &SortedReadings,
) -> Option<DateTime<Utc>> {
    let index = pixel_to_date_index(pixel_offset, chart_width, readings)?;
    readings.get(index).map(|reading| reading.timestamp)
}

/// Maps a date to an absolute screen x inside `bounds`.
///
/// The first and last readings land exactly on `left` and `right`; dates
/// outside the data domain map outside them. Returns `None` with fewer than
/// two readings, a zero time span, or degenerate bounds.
#[must_use]
pub fn date_index_to_pixel(
    target: DateTime<Utc>,
    bounds: ChartPixelBounds,
    readings: &SortedReadings,
) -> Option<f64> {
    if bounds.is_degenerate() {
        return None;
    }
    let span = readings.span_millis()?;
    let first = datetime_to_unix_millis(readings.first()?.timestamp);
    let percentage = (datetime_to_unix_millis(target) - first) / span;
    Some(bounds.left * (1.0 - percentage) + bounds.right * percentage)
}

/// Same as [`date_index_to_pixel`], expressed as an offset from the plot's
/// left edge and clamped to `[0, width]`.
#[must_use]
pub fn date_to_local_offset(
    target: DateTime<Utc>,
    bounds: ChartPixelBounds,
    readings: &SortedReadings,
) -> Option<f64> {
    let absolute = date_index_to_pixel(target, bounds, readings)?;
    Some((absolute - bounds.left).clamp(0.0, bounds.width()))
}
