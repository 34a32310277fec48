use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Fixed display formats used by the range selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateLabelPattern {
    /// `DD.MM.YYYY`
    #[default]
    Date,
    /// `DD.MM.YYYY HH:mm:ss`
    DateTime,
    /// `MM/dd`, used for x-axis ticks.
    AxisMonthDay,
}

impl DateLabelPattern {
    #[must_use]
    pub fn chrono_format(self) -> &'static str {
        match self {
            Self::Date => "%d.%m.%Y",
            Self::DateTime => "%d.%m.%Y %H:%M:%S",
            Self::AxisMonthDay => "%m/%d",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateLabelConfig {
    /// Display offset from UTC. Readings are stored in UTC.
    #[serde(default)]
    pub utc_offset_minutes: i32,
    /// Pattern used for the two boundary labels.
    #[serde(default)]
    pub boundary_pattern: DateLabelPattern,
}

impl DateLabelConfig {
    fn offset(self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}

/// Formats `time` in the configured display offset.
#[must_use]
pub fn format_date_label(
    time: DateTime<Utc>,
    pattern: DateLabelPattern,
    config: DateLabelConfig,
) -> String {
    time.with_timezone(&config.offset())
        .format(pattern.chrono_format())
        .to_string()
}

/// Display strings for the two boundaries of the current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryLabels {
    pub start: Option<String>,
    pub end: Option<String>,
}
