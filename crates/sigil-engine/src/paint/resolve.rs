use sigil_color::ColorParseError;

use super::{ColorChannels, SymbolColor};

/// Turns a textual color into channels.
///
/// This is the seam for the host application's color parser. The default
/// implementation is [`CssColorResolver`].
pub trait ColorResolver: Send + Sync {
    fn resolve(&self, text: &str) -> Result<ColorChannels, ColorParseError>;
}

/// Resolves CSS hex, `rgb()`/`rgba()` and the CSS named colors via `sigil-color`.
#[derive(Debug, Copy, Clone, Default)]
pub struct CssColorResolver;

impl ColorResolver for CssColorResolver {
    fn resolve(&self, text: &str) -> Result<ColorChannels, ColorParseError> {
        sigil_color::parse_color(text).map(ColorChannels::from)
    }
}

impl SymbolColor {
    /// Resolves to concrete channels, consulting `resolver` for text colors only.
    pub fn resolve(&self, resolver: &dyn ColorResolver) -> Result<ColorChannels, ColorParseError> {
        match self {
            SymbolColor::Channels(c) => Ok(*c),
            SymbolColor::Text(text) => {
                let c = resolver.resolve(text)?;
                log::trace!("resolved color {:?} to {:?}", text, c);
                Ok(c)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl ColorResolver for Fixed {
        fn resolve(&self, _text: &str) -> Result<ColorChannels, ColorParseError> {
            Ok(ColorChannels::new(1.0, 2.0, 3.0, 0.4))
        }
    }

    #[test]
    fn css_resolver_parses_hex() {
        let c = CssColorResolver.resolve("#ff0080").unwrap();
        assert_eq!(c, ColorChannels::new(255.0, 0.0, 128.0, 1.0));
    }

    #[test]
    fn css_resolver_knows_extended_names() {
        let c = CssColorResolver.resolve("orange").unwrap();
        assert_eq!(c, ColorChannels::new(255.0, 165.0, 0.0, 1.0));
    }

    #[test]
    fn css_resolver_rejects_garbage() {
        assert!(CssColorResolver.resolve("not a color").is_err());
    }

    #[test]
    fn channels_bypass_resolver() {
        let c = SymbolColor::from([10.0, 20.0, 30.0, 1.0]);
        assert_eq!(c.resolve(&Fixed).unwrap(), ColorChannels::new(10.0, 20.0, 30.0, 1.0));
    }

    #[test]
    fn text_goes_through_resolver() {
        let c = SymbolColor::from("anything");
        assert_eq!(c.resolve(&Fixed).unwrap(), ColorChannels::new(1.0, 2.0, 3.0, 0.4));
    }
}
