/// Straight-alpha color as produced by the parser.
///
/// `r`, `g`, `b` are sRGB bytes; `a` is opacity in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0.0)
    }

    /// Returns `[r, g, b, a]` with the byte channels widened to `f64`.
    #[inline]
    pub fn to_array(self) -> [f64; 4] {
        [self.r as f64, self.g as f64, self.b as f64, self.a]
    }
}
