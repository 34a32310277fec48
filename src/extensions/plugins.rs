use serde::{Deserialize, Serialize};

use crate::core::ChartPixelBounds;
use crate::interaction::{DragMode, RangeSelection, SelectionBoundary};

/// Read-only state passed to plugin hooks alongside each event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionContext {
    pub layout: Option<ChartPixelBounds>,
    pub readings_len: usize,
    pub mode: DragMode,
    pub start: SelectionBoundary,
    pub end: SelectionBoundary,
    pub zoom_level: f64,
}

/// Events emitted by the range selector engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SelectionEvent {
    ReadingsUpdated { readings_len: usize },
    LayoutPublished { bounds: ChartPixelBounds },
    GestureStarted { mode: DragMode },
    BoundariesChanged,
    /// A selection gesture ended; the only output of a complete gesture.
    RangeCommitted { selection: RangeSelection },
    ZoomChanged { level: f64 },
    Rendered,
}

/// Observer hook for host screens.
///
/// Plugins see events and a context snapshot; they cannot reach the
/// selector state directly.
pub trait RangePlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: SelectionEvent, context: SelectionContext);
}
