//! Names and vertex layout shared between the generated vertex shader and the
//! rest of the pipeline.
//!
//! Vertex buffer setup and the paired fragment shader must use these names
//! exactly.

use bytemuck::{Pod, Zeroable};

use super::quad::Corner;

// ── attributes ────────────────────────────────────────────────────────────

/// `vec2` anchor position, identical for the four vertices of one symbol.
pub const ATTRIB_POSITION: &str = "a_position";
/// `float` corner index in `0..=3`, see [`Corner`].
pub const ATTRIB_INDEX: &str = "a_index";

// ── uniforms ──────────────────────────────────────────────────────────────

pub const UNIFORM_PROJECTION_MATRIX: &str = "u_projectionMatrix";
pub const UNIFORM_OFFSET_SCALE_MATRIX: &str = "u_offsetScaleMatrix";
/// Only declared when the symbol rotates with the view.
pub const UNIFORM_OFFSET_ROTATE_MATRIX: &str = "u_offsetRotateMatrix";

// ── varyings ──────────────────────────────────────────────────────────────

pub const VARYING_TEX_COORD: &str = "v_texCoord";
pub const VARYING_OPACITY: &str = "v_opacity";
pub const VARYING_COLOR: &str = "v_color";

// ── vertex layout ─────────────────────────────────────────────────────────

/// One vertex as read by the generated shader.
///
/// Layout: `a_position` (2 × f32) followed by `a_index` (f32), tightly packed.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SymbolVertex {
    pub position: [f32; 2],
    pub index: f32,
}

impl SymbolVertex {
    pub const STRIDE: usize = std::mem::size_of::<SymbolVertex>();

    /// The four vertices of one symbol anchored at `position`, in corner order.
    pub fn quad(position: [f32; 2]) -> [SymbolVertex; 4] {
        Corner::ALL.map(|corner| SymbolVertex { position, index: corner.index() as f32 })
    }
}

/// Two triangles covering one symbol quad, indexing into [`SymbolVertex::quad`].
pub const QUAD_INDICES: [u16; 6] = [0, 1, 3, 1, 2, 3];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(SymbolVertex::STRIDE, 12);
        let quad = SymbolVertex::quad([3.0, 4.0]);
        let bytes: &[u8] = bytemuck::cast_slice(&quad);
        assert_eq!(bytes.len(), 4 * SymbolVertex::STRIDE);
    }

    #[test]
    fn quad_shares_anchor_and_numbers_corners() {
        let quad = SymbolVertex::quad([3.0, 4.0]);
        for (i, v) in quad.iter().enumerate() {
            assert_eq!(v.position, [3.0, 4.0]);
            assert_eq!(v.index, i as f32);
        }
    }

    #[test]
    fn indices_cover_every_corner() {
        for i in 0..4u16 {
            assert!(QUAD_INDICES.contains(&i));
        }
    }
}
