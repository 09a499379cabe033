//! Geometry shared by scenes and renderers.
//!
//! Logical pixels, origin top-left, +X right, +Y down. Renderers convert to
//! NDC in the shader from a viewport uniform.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
