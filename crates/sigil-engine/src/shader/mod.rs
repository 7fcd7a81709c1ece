//! Vertex shader generation for point symbols.
//!
//! A symbol style ([`SymbolShaderParameters`]) is normalized, then baked into
//! GLSL ES 1.00 source that expands each anchor point into a textured quad.
//! [`contract`] lists the names the rest of the pipeline binds against.

pub mod contract;
mod error;
mod literal;
mod params;
mod quad;
mod symbol;

pub use error::ShaderError;
pub use literal::format_float;
pub use params::{NormalizedSymbol, SymbolShaderParameters, SymbolSize};
pub use quad::{Corner, QuadBounds};
pub use symbol::{symbol_vertex_shader, symbol_vertex_shader_with};
