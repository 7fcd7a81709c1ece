use super::Vec2;

/// Region of a texture atlas in normalized `(u, v)` coordinates.
///
/// `(u0, v0)` addresses the corner sampled by the quad's min corner and
/// `(u1, v1)` the corner sampled by its max corner. Flipped regions
/// (`u0 > u1`) are allowed and mirror the image.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextureRect {
    pub u0: f64,
    pub v0: f64,
    pub u1: f64,
    pub v1: f64,
}

impl TextureRect {
    #[inline]
    pub const fn new(u0: f64, v0: f64, u1: f64, v1: f64) -> Self {
        Self { u0, v0, u1, v1 }
    }

    /// The whole texture, `(0, 0, 1, 1)`.
    #[inline]
    pub const fn full() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        Vec2::new(self.u0, self.v0)
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.u1, self.v1)
    }
}

impl Default for TextureRect {
    fn default() -> Self {
        Self::full()
    }
}

impl From<[f64; 4]> for TextureRect {
    #[inline]
    fn from([u0, v0, u1, v1]: [f64; 4]) -> Self {
        TextureRect::new(u0, v0, u1, v1)
    }
}
