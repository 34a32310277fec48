use crate::extensions::{SelectionContext, SelectionEvent};
use crate::render::Renderer;

use super::RangeSelectorEngine;

impl<R: Renderer> RangeSelectorEngine<R> {
    pub(super) fn selection_context(&self) -> SelectionContext {
        SelectionContext {
            layout: self.layout,
            readings_len: self.readings.len(),
            mode: self.selector.mode(),
            start: self.selector.start(),
            end: self.selector.end(),
            zoom_level: self.zoom.level(),
        }
    }

    pub(super) fn emit_event(&mut self, event: SelectionEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.selection_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
