use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::Reading;
use crate::interaction::RangeSelection;
use crate::render::Renderer;

use super::{BoundaryLabels, DateLabelPattern, RangeSelectorEngine, format_date_label};

/// Aggregate of the readings inside a selected range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionSummary {
    pub range: RangeSelection,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl SelectionSummary {
    /// `None` when no reading falls inside `range`.
    #[must_use]
    pub fn from_readings(range: RangeSelection, readings: &[Reading]) -> Option<Self> {
        let min = readings.iter().map(|r| OrderedFloat(r.value)).min()?.0;
        let max = readings.iter().map(|r| OrderedFloat(r.value)).max()?.0;
        let sum: f64 = readings.iter().map(|r| r.value).sum();
        Some(Self {
            range,
            count: readings.len(),
            min,
            max,
            mean: sum / readings.len() as f64,
        })
    }
}

impl<R: Renderer> RangeSelectorEngine<R> {
    /// Summary of readings inside the current selection.
    #[must_use]
    pub fn selection_summary(&self) -> Option<SelectionSummary> {
        let range = self.selector.selection()?;
        SelectionSummary::from_readings(range, self.readings.between(range.start, range.end))
    }

    /// Boundary dates formatted with the configured boundary pattern.
    #[must_use]
    pub fn boundary_labels(&self) -> BoundaryLabels {
        self.boundary_labels_with(self.config.labels.boundary_pattern)
    }

    #[must_use]
    pub fn boundary_labels_with(&self, pattern: DateLabelPattern) -> BoundaryLabels {
        let labels = self.config.labels;
        let format = |date| format_date_label(date, pattern, labels);
        BoundaryLabels {
            start: self.selector.start().date.map(format),
            end: self.selector.end().date.map(format),
        }
    }
}
