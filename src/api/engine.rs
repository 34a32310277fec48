use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{ChartPixelBounds, SortedReadings};
use crate::error::RangeResult;
use crate::extensions::{RangePlugin, SelectionEvent};
use crate::interaction::{RangeSelection, RangeSelector, ZoomState};
use crate::overlay::{SelectionOverlay, derive_overlay};
use crate::render::Renderer;

use super::overlay_render_frame_builder::build_overlay_render_frame;
use super::validation::validate_engine_config;
use super::RangeSelectorConfig;

/// Main facade consumed by a host screen.
///
/// `RangeSelectorEngine` owns the sorted readings, the latest published chart
/// layout, the drag state machine, the pinch zoom level and registered
/// plugins, and hands overlay frames to the renderer.
pub struct RangeSelectorEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: RangeSelectorConfig,
    pub(super) readings: SortedReadings,
    pub(super) layout: Option<ChartPixelBounds>,
    pub(super) selector: RangeSelector,
    pub(super) zoom: ZoomState,
    /// Initial range waiting for a usable layout.
    pub(super) pending_range: Option<RangeSelection>,
    pub(super) last_committed: Option<RangeSelection>,
    pub(super) series_metadata: IndexMap<String, String>,
    pub(super) plugins: Vec<Box<dyn RangePlugin>>,
}

impl<R: Renderer> RangeSelectorEngine<R> {
    /// Creates an engine with no readings and no layout yet.
    pub fn new(renderer: R, config: RangeSelectorConfig) -> RangeResult<Self> {
        let config = validate_engine_config(config)?;
        Ok(Self {
            renderer,
            config,
            readings: SortedReadings::default(),
            layout: None,
            selector: RangeSelector::new(config.selector),
            zoom: ZoomState::new(config.zoom),
            pending_range: None,
            last_committed: None,
            series_metadata: IndexMap::new(),
            plugins: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> RangeSelectorConfig {
        self.config
    }

    /// Replaces the configuration. The current selection is kept.
    pub fn set_config(&mut self, config: RangeSelectorConfig) -> RangeResult<()> {
        let config = validate_engine_config(config)?;
        self.selector.set_tuning(config.selector);
        self.zoom.set_config(config.zoom);
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn selector(&self) -> &RangeSelector {
        &self.selector
    }

    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.zoom.level()
    }

    /// Range emitted by the most recent completed selection gesture.
    #[must_use]
    pub fn last_committed_range(&self) -> Option<RangeSelection> {
        self.last_committed
    }

    /// Current overlay geometry; empty until a layout is published.
    #[must_use]
    pub fn overlay(&self) -> SelectionOverlay {
        match self.layout {
            Some(bounds) => derive_overlay(&self.selector, bounds, &self.config.overlay),
            None => SelectionOverlay::default(),
        }
    }

    /// Draws the overlay through the renderer.
    ///
    /// Skipped while no usable layout has been published.
    pub fn render(&mut self) -> RangeResult<()> {
        let Some(bounds) = self.layout.filter(|bounds| !bounds.is_degenerate()) else {
            trace!("skipping overlay render without usable layout");
            return Ok(());
        };
        let overlay = derive_overlay(&self.selector, bounds, &self.config.overlay);
        let labels = self.boundary_labels();
        let frame = build_overlay_render_frame(&overlay, &labels, bounds, &self.config.overlay);
        self.renderer.render(&frame)?;
        debug!(
            rects = frame.rects.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "rendered selection overlay"
        );
        self.emit_event(SelectionEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
