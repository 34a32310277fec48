use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{RangeError, RangeResult};

/// Descriptive fields of the sensor that produced a reading.
///
/// Carried for display only; nothing in the selection logic reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorMetadata {
    pub entity_id: String,
    pub entity_index: String,
    pub entity_name: String,
    pub serial: String,
    pub unit_name: String,
    pub project_id: String,
    pub project_name: String,
}

/// One timestamped sensor sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Arc<SensorMetadata>>,
}

impl Reading {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> RangeResult<Self> {
        if !value.is_finite() {
            return Err(RangeError::InvalidData(
                "reading value must be finite".to_owned(),
            ));
        }
        Ok(Self {
            timestamp,
            value,
            metadata: None,
        })
    }

    pub fn from_decimal(timestamp: DateTime<Utc>, value: Decimal) -> RangeResult<Self> {
        Self::new(timestamp, decimal_to_f64(value, "reading value")?)
    }

    /// Parses an RFC 3339 timestamp such as `2023-01-01T00:00:00.000Z`.
    pub fn parse_rfc3339(timestamp: &str, value: f64) -> RangeResult<Self> {
        let parsed = DateTime::parse_from_rfc3339(timestamp).map_err(|e| {
            RangeError::InvalidData(format!("invalid reading timestamp `{timestamp}`: {e}"))
        })?;
        Self::new(parsed.with_timezone(&Utc), value)
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Arc<SensorMetadata>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[must_use]
    pub fn entity_id(&self) -> Option<&str> {
        self.metadata.as_deref().map(|meta| meta.entity_id.as_str())
    }
}
