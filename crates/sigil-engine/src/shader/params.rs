use crate::coords::{TextureRect, Vec2};
use crate::paint::{ColorChannels, ColorResolver, SymbolColor};

use super::quad::QuadBounds;
use super::ShaderError;

/// Extent of a symbol quad in symbol-local units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SymbolSize {
    /// Width and height are equal.
    Square(f64),
    Extent { width: f64, height: f64 },
}

impl SymbolSize {
    /// Width/height pair; a square size is duplicated into both components.
    #[inline]
    pub fn resolve(self) -> Vec2 {
        match self {
            SymbolSize::Square(s) => Vec2::splat(s),
            SymbolSize::Extent { width, height } => Vec2::new(width, height),
        }
    }
}

impl From<f64> for SymbolSize {
    fn from(s: f64) -> Self {
        SymbolSize::Square(s)
    }
}

impl From<[f64; 2]> for SymbolSize {
    fn from([width, height]: [f64; 2]) -> Self {
        SymbolSize::Extent { width, height }
    }
}

/// Style of one point symbol, as supplied by the caller.
///
/// Everything except `size` is optional and defaulted during
/// [`normalize`](Self::normalize):
///
/// | field | default |
/// |-------|---------|
/// | `offset` | `(0, 0)` |
/// | `texture_coord` | `(0, 0, 1, 1)` |
/// | `opacity` | `1` |
/// | `color` | opaque white |
/// | `rotate_with_view` | `false` |
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolShaderParameters {
    pub size: Option<SymbolSize>,
    /// Rotate the symbol's offset with the view, not only scale it.
    pub rotate_with_view: bool,
    pub offset: Option<Vec2>,
    pub texture_coord: Option<TextureRect>,
    pub opacity: Option<f64>,
    pub color: Option<SymbolColor>,
}

impl SymbolShaderParameters {
    pub fn new(size: impl Into<SymbolSize>) -> Self {
        Self::default().with_size(size)
    }

    pub fn with_size(mut self, size: impl Into<SymbolSize>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_rotate_with_view(mut self, rotate: bool) -> Self {
        self.rotate_with_view = rotate;
        self
    }

    pub fn with_offset(mut self, offset: impl Into<Vec2>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    pub fn with_texture_coord(mut self, rect: impl Into<TextureRect>) -> Self {
        self.texture_coord = Some(rect.into());
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_color(mut self, color: impl Into<SymbolColor>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Applies defaults and resolves text colors.
    ///
    /// Ranges are not checked, but every value must be finite since it ends up
    /// as a shader literal.
    pub fn normalize(&self, resolver: &dyn ColorResolver) -> Result<NormalizedSymbol, ShaderError> {
        let size = self.size.ok_or(ShaderError::MissingField("size"))?.resolve();
        let offset = self.offset.unwrap_or_default();
        let texture_coord = self.texture_coord.unwrap_or_default();
        let opacity = self.opacity.unwrap_or(1.0);
        let color = match &self.color {
            Some(color) => color.resolve(resolver)?,
            None => ColorChannels::white(),
        };

        check_finite("size", &[size.x, size.y])?;
        check_finite("offset", &[offset.x, offset.y])?;
        check_finite(
            "texture_coord",
            &[texture_coord.u0, texture_coord.v0, texture_coord.u1, texture_coord.v1],
        )?;
        check_finite("opacity", &[opacity])?;
        check_finite("color", &[color.r, color.g, color.b, color.a])?;

        Ok(NormalizedSymbol {
            size,
            rotate_with_view: self.rotate_with_view,
            offset,
            texture_coord,
            opacity,
            color,
        })
    }
}

fn check_finite(field: &'static str, values: &[f64]) -> Result<(), ShaderError> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(&value) => Err(ShaderError::NonFiniteLiteral { field, value }),
        None => Ok(()),
    }
}

/// Fully-populated symbol style, ready for code generation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NormalizedSymbol {
    pub size: Vec2,
    pub rotate_with_view: bool,
    pub offset: Vec2,
    pub texture_coord: TextureRect,
    pub opacity: f64,
    pub color: ColorChannels,
}

impl NormalizedSymbol {
    #[inline]
    pub fn bounds(&self) -> QuadBounds {
        QuadBounds::new(self.size, self.offset, self.texture_coord)
    }
}
