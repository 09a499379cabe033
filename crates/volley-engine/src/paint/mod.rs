//! Colors as the renderers expect them.

mod color;

pub use color::Color;
