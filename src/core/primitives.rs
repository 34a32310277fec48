use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{RangeError, RangeResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> RangeResult<f64> {
    value.to_f64().ok_or_else(|| {
        RangeError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Milliseconds since the Unix epoch as `f64`, the unit used for span ratios.
#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}
