use crate::paint::{ColorResolver, CssColorResolver};

use super::contract::ATTRIB_INDEX;
use super::literal::float_literal;
use super::params::{NormalizedSymbol, SymbolShaderParameters};
use super::quad::Corner;
use super::ShaderError;

// ── orientation variants ──────────────────────────────────────────────────

/// Uniform declarations and offset matrix expression for one orientation mode.
struct OffsetTransform {
    name: &'static str,
    uniforms: &'static str,
    matrix: &'static str,
}

const SCALE_ONLY: OffsetTransform = OffsetTransform {
    name: "scale",
    uniforms: "\
uniform mat4 u_projectionMatrix;
uniform mat4 u_offsetScaleMatrix;
",
    matrix: "u_offsetScaleMatrix",
};

const ROTATE_WITH_VIEW: OffsetTransform = OffsetTransform {
    name: "scale+rotate",
    uniforms: "\
uniform mat4 u_projectionMatrix;
uniform mat4 u_offsetScaleMatrix;
uniform mat4 u_offsetRotateMatrix;
",
    matrix: "u_offsetScaleMatrix * u_offsetRotateMatrix",
};

// ── generation ────────────────────────────────────────────────────────────

/// Generates the vertex shader for a point symbol, resolving text colors with
/// [`CssColorResolver`].
///
/// See [`symbol_vertex_shader_with`].
pub fn symbol_vertex_shader(params: &SymbolShaderParameters) -> Result<String, ShaderError> {
    symbol_vertex_shader_with(params, &CssColorResolver)
}

/// Generates GLSL ES 1.00 vertex shader source drawing `params` as a textured
/// quad expanded from a single anchor point.
///
/// Each symbol is submitted as four vertices sharing `a_position`, told apart
/// by `a_index` (see [`Corner`]). Quad and texture bounds are baked into the
/// source as literals, so the shader only selects between them per corner.
///
/// The output depends on `params` alone; equal parameters yield identical text.
pub fn symbol_vertex_shader_with(
    params: &SymbolShaderParameters,
    resolver: &dyn ColorResolver,
) -> Result<String, ShaderError> {
    let symbol = params.normalize(resolver)?;
    let source = emit(&symbol)?;

    log::debug!(
        "generated symbol vertex shader ({} offset, {} bytes)",
        transform_for(&symbol).name,
        source.len()
    );
    Ok(source)
}

fn transform_for(symbol: &NormalizedSymbol) -> &'static OffsetTransform {
    if symbol.rotate_with_view { &ROTATE_WITH_VIEW } else { &SCALE_ONLY }
}

/// `a_index == i || a_index == j` over the corners on the min side of an axis.
fn min_side(on_min: fn(Corner) -> bool) -> String {
    Corner::ALL
        .into_iter()
        .filter(|&c| on_min(c))
        .map(|c| format!("{} == {}.0", ATTRIB_INDEX, c.index()))
        .collect::<Vec<_>>()
        .join(" || ")
}

fn emit(symbol: &NormalizedSymbol) -> Result<String, ShaderError> {
    let transform = transform_for(symbol);
    let bounds = symbol.bounds();
    let [r, g, b, a] = symbol.color.normalized();

    let min_x = min_side(Corner::is_min_x);
    let min_y = min_side(Corner::is_min_y);

    let x0 = float_literal("offset", bounds.offset_min.x)?;
    let x1 = float_literal("offset", bounds.offset_max.x)?;
    let y0 = float_literal("offset", bounds.offset_min.y)?;
    let y1 = float_literal("offset", bounds.offset_max.y)?;
    let u0 = float_literal("texture_coord", bounds.texture.u0)?;
    let u1 = float_literal("texture_coord", bounds.texture.u1)?;
    let v0 = float_literal("texture_coord", bounds.texture.v0)?;
    let v1 = float_literal("texture_coord", bounds.texture.v1)?;
    let opacity = float_literal("opacity", symbol.opacity)?;
    let color = [r, g, b, a]
        .into_iter()
        .map(|c| float_literal("color", c))
        .collect::<Result<Vec<_>, _>>()?
        .join(", ");

    Ok(format!(
        "precision mediump float;
{uniforms}
attribute vec2 a_position;
attribute float a_index;

varying vec2 v_texCoord;
varying float v_opacity;
varying vec4 v_color;

void main(void) {{
  mat4 offsetMatrix = {matrix};
  float offsetX = {min_x} ? {x0} : {x1};
  float offsetY = {min_y} ? {y0} : {y1};
  vec4 offsets = offsetMatrix * vec4(offsetX, offsetY, 0.0, 0.0);
  gl_Position = u_projectionMatrix * vec4(a_position, 0.0, 1.0) + offsets;
  float u = {min_x} ? {u0} : {u1};
  float v = {min_y} ? {v0} : {v1};
  v_texCoord = vec2(u, v);
  v_opacity = {opacity};
  v_color = vec4({color});
}}
",
        uniforms = transform.uniforms,
        matrix = transform.matrix,
    ))
}
