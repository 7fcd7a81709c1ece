//! Geometry primitives for symbol styles.
//!
//! Conventions:
//! - offsets and sizes are in symbol-local units, transformed on the GPU by the
//!   offset matrices
//! - texture regions are normalized `(u, v)` coordinates

mod texture_rect;
mod vec2;

pub use texture_rect::TextureRect;
pub use vec2::Vec2;
