use crate::error::ColorParseError;
use crate::named;
use crate::rgba::Rgba;

/// Parses a CSS color string into a straight-alpha [`Rgba`].
///
/// Accepted forms (case-insensitive, surrounding whitespace ignored):
/// - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
/// - `rgb(r, g, b)` and `rgba(r, g, b, a)`; either name takes 3 or 4 arguments
/// - the CSS named colors (`orange`, `rebeccapurple`, ...) and `transparent`
///
/// Functional channels are clamped to `0..=255` and rounded; alpha is clamped
/// to `[0, 1]`.
pub fn parse_color(text: &str) -> Result<Rgba, ColorParseError> {
    let s = text.trim().to_ascii_lowercase();
    if s.is_empty() {
        return Err(ColorParseError::new("empty color string", text));
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex, text);
    }
    if let Some(args) = functional_args(&s) {
        return parse_functional(args, text);
    }
    named::lookup(&s).ok_or_else(|| ColorParseError::new("unknown color name", text))
}

// ── hex ───────────────────────────────────────────────────────────────────

fn parse_hex(hex: &str, input: &str) -> Result<Rgba, ColorParseError> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::new("non-hex digit in color literal", input));
    }

    // Digits are ASCII here, so byte slicing stays on char boundaries.
    let byte = |s: &str| {
        u8::from_str_radix(s, 16)
            .map_err(|_| ColorParseError::new("invalid hex digits", input))
    };

    let channels: Vec<u8> = match hex.len() {
        3 | 4 => (0..hex.len())
            .map(|i| byte(&hex[i..i + 1]).map(|d| d * 17))
            .collect::<Result<_, _>>()?,
        6 | 8 => (0..hex.len())
            .step_by(2)
            .map(|i| byte(&hex[i..i + 2]))
            .collect::<Result<_, _>>()?,
        n => {
            return Err(ColorParseError::new(
                format!("hex color must have 3, 4, 6 or 8 digits, got {}", n),
                input,
            ));
        }
    };

    let a = channels.get(3).map_or(1.0, |&a| a as f64 / 255.0);
    Ok(Rgba::new(channels[0], channels[1], channels[2], a))
}

// ── rgb() / rgba() ────────────────────────────────────────────────────────

fn functional_args(s: &str) -> Option<&str> {
    let rest = s.strip_prefix("rgba").or_else(|| s.strip_prefix("rgb"))?;
    rest.trim_start().strip_prefix('(')?.strip_suffix(')')
}

fn parse_functional(args: &str, input: &str) -> Result<Rgba, ColorParseError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ColorParseError::new(
            format!("expected 3 or 4 color components, got {}", parts.len()),
            input,
        ));
    }

    let mut values = [0.0f64; 4];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ColorParseError::new(format!("invalid component {:?}", part), input))?;
    }

    let channel = |v: f64| v.clamp(0.0, 255.0).round() as u8;
    let a = if parts.len() == 4 { values[3].clamp(0.0, 1.0) } else { 1.0 };
    Ok(Rgba::new(channel(values[0]), channel(values[1]), channel(values[2]), a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(src: &str) -> Rgba { parse_color(src).unwrap() }
    fn err(src: &str) { parse_color(src).unwrap_err(); }

    // ── hex ───────────────────────────────────────────────────────────────

    #[test] fn hex_6digit() { assert_eq!(ok("#ff8000"), Rgba::opaque(255, 128, 0)); }
    #[test] fn hex_3digit_expands() { assert_eq!(ok("#f80"), Rgba::opaque(255, 136, 0)); }
    #[test] fn hex_uppercase() { assert_eq!(ok("#AABBCC"), Rgba::opaque(170, 187, 204)); }

    #[test]
    fn hex_8digit_alpha() {
        let c = ok("#00000080");
        assert_eq!((c.r, c.g, c.b), (0, 0, 0));
        assert!((c.a - 128.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn hex_4digit_alpha() {
        assert_eq!(ok("#fff0"), Rgba::new(255, 255, 255, 0.0));
    }

    #[test] fn err_hex_5digit() { err("#12345"); }
    #[test] fn err_hex_bad_digit() { err("#xyz"); }
    #[test] fn err_hex_empty() { err("#"); }

    // ── functional ────────────────────────────────────────────────────────

    #[test] fn rgb_plain() { assert_eq!(ok("rgb(10, 20, 30)"), Rgba::opaque(10, 20, 30)); }
    #[test] fn rgba_plain() { assert_eq!(ok("rgba(10,20,30,0.25)"), Rgba::new(10, 20, 30, 0.25)); }
    #[test] fn rgb_clamps() { assert_eq!(ok("rgb(300, -5, 12.6)"), Rgba::opaque(255, 0, 13)); }
    #[test] fn rgba_alpha_clamped() { assert_eq!(ok("rgba(0, 0, 0, 2)").a, 1.0); }
    #[test] fn err_rgb_two_args() { err("rgb(1, 2)"); }
    #[test] fn err_rgb_not_number() { err("rgb(1, 2, blue)"); }
    #[test] fn err_rgb_unclosed() { err("rgb(1, 2, 3"); }

    // ── named ─────────────────────────────────────────────────────────────

    #[test] fn named_with_whitespace() { assert_eq!(ok("  Red "), Rgba::opaque(255, 0, 0)); }
    #[test] fn named_transparent() { assert_eq!(ok("transparent"), Rgba::transparent()); }
    #[test] fn err_unknown_name() { err("blurple"); }
    #[test] fn err_empty() { err("   "); }

    #[test]
    fn error_reports_input() {
        let e = parse_color("nope").unwrap_err();
        assert_eq!(e.input, "nope");
        assert!(e.to_string().contains("nope"));
    }
}
