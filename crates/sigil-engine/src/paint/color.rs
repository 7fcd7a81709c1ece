/// Straight-alpha color channels as supplied by symbol styles.
///
/// Ranges:
/// - `r`, `g`, `b` in `[0, 255]`
/// - `a` in `[0, 1]`
///
/// Values are not validated; out-of-range channels pass through to the
/// generated shader unchanged.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorChannels {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl ColorChannels {
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque white, `(255, 255, 255, 1)`.
    #[inline]
    pub const fn white() -> Self {
        Self::new(255.0, 255.0, 255.0, 1.0)
    }

    /// Returns `[r, g, b, a]` with RGB mapped from `0..=255` to `[0, 1]`.
    ///
    /// Alpha is already in `[0, 1]` and is returned as-is.
    #[inline]
    pub fn normalized(self) -> [f64; 4] {
        [self.r / 255.0, self.g / 255.0, self.b / 255.0, self.a]
    }
}

impl Default for ColorChannels {
    fn default() -> Self {
        Self::white()
    }
}

impl From<[f64; 4]> for ColorChannels {
    #[inline]
    fn from([r, g, b, a]: [f64; 4]) -> Self {
        ColorChannels::new(r, g, b, a)
    }
}

impl From<sigil_color::Rgba> for ColorChannels {
    #[inline]
    fn from(c: sigil_color::Rgba) -> Self {
        c.to_array().into()
    }
}

/// Symbol color as given by the caller: either CSS text or explicit channels.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolColor {
    Text(String),
    Channels(ColorChannels),
}

impl From<&str> for SymbolColor {
    fn from(s: &str) -> Self {
        SymbolColor::Text(s.to_string())
    }
}

impl From<String> for SymbolColor {
    fn from(s: String) -> Self {
        SymbolColor::Text(s)
    }
}

impl From<ColorChannels> for SymbolColor {
    fn from(c: ColorChannels) -> Self {
        SymbolColor::Channels(c)
    }
}

impl From<[f64; 4]> for SymbolColor {
    fn from(c: [f64; 4]) -> Self {
        SymbolColor::Channels(c.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_divides_rgb_only() {
        let c = ColorChannels::new(255.0, 0.0, 51.0, 0.5);
        assert_eq!(c.normalized(), [1.0, 0.0, 0.2, 0.5]);
    }

    #[test]
    fn out_of_range_passes_through() {
        let c = ColorChannels::new(510.0, -255.0, 0.0, 2.0);
        assert_eq!(c.normalized(), [2.0, -1.0, 0.0, 2.0]);
    }

    #[test]
    fn default_is_opaque_white() {
        assert_eq!(ColorChannels::default().normalized(), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn from_parsed_rgba() {
        let c: ColorChannels = sigil_color::Rgba::new(1, 2, 3, 0.5).into();
        assert_eq!(c, ColorChannels::new(1.0, 2.0, 3.0, 0.5));
    }
}
