mod plugins;

pub use plugins::{RangePlugin, SelectionContext, SelectionEvent};
