//! Sigil engine crate.
//!
//! Turns point-symbol styles into vertex shader source. No GPU context is
//! touched here: compiling the program, building vertex buffers and issuing
//! draws belong to the caller.
//!
//! ```rust
//! use sigil_engine::shader::{symbol_vertex_shader, SymbolShaderParameters};
//!
//! let params = SymbolShaderParameters::new([16.0, 24.0])
//!     .with_rotate_with_view(true)
//!     .with_color("#3366ffcc");
//! let source = symbol_vertex_shader(&params).unwrap();
//! assert!(source.contains("u_offsetRotateMatrix"));
//! ```

pub mod coords;
pub mod paint;
pub mod shader;

pub use shader::{symbol_vertex_shader, ShaderError, SymbolShaderParameters};
