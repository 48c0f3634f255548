//! FIXER Render Library
//!
//! Render sink implementations for the FIXER drawing board. The scene builder
//! turns each frame into a flat display list that hosts replay onto their 2D
//! surface, or export as SVG.

mod renderer;
mod scene;
mod svg;

pub use renderer::{DrawCommand, RenderStyle};
pub use scene::SceneBuilder;
pub use svg::to_svg;
