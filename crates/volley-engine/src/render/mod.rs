//! Rendering for scenes.
//!
//! Scenes record solid rectangles into a [`DrawList`] during `draw` and hand
//! it to a [`Painter`], which clears the surface, renders the list and
//! presents.

mod ctx;
mod list;
mod painter;
mod rect;

pub use ctx::{RenderCtx, RenderTarget};
pub use list::{DrawList, RectCmd};
pub use painter::Painter;
pub use rect::RectRenderer;
