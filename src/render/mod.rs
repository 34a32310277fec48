mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::RangeResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `RenderFrame`; they never see the
/// selection state or gesture logic that produced it.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> RangeResult<()>;
}
