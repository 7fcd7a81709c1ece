use super::ShaderError;

/// Formats `value` as a GLSL float literal.
///
/// The default decimal text is used unchanged when it already has a fractional
/// part; otherwise `.0` is appended so the literal is never parsed as an int.
/// `f64`'s `Display` never switches to exponent notation, so the result is
/// always plain decimal text.
///
/// Non-finite values have no literal form and are rejected. Finite values are
/// not range-checked: magnitudes beyond `f32::MAX` are emitted as-is and will
/// overflow a GLSL `float` when the program is compiled.
pub fn format_float(value: f64) -> Result<String, ShaderError> {
    float_literal("value", value)
}

/// Same as [`format_float`], reporting `field` on failure.
pub(crate) fn float_literal(field: &'static str, value: f64) -> Result<String, ShaderError> {
    if !value.is_finite() {
        return Err(ShaderError::NonFiniteLiteral { field, value });
    }
    let mut text = value.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(v: f64) -> String { format_float(v).unwrap() }

    #[test] fn integer_gets_fraction() { assert_eq!(f(1.0), "1.0"); }
    #[test] fn zero() { assert_eq!(f(0.0), "0.0"); }
    #[test] fn negative_integer() { assert_eq!(f(-2.0), "-2.0"); }
    #[test] fn fraction_unchanged() { assert_eq!(f(0.5), "0.5"); }
    #[test] fn negative_fraction_unchanged() { assert_eq!(f(-1.25), "-1.25"); }
    #[test] fn repeating_fraction() { assert_eq!(f(128.0 / 255.0), "0.5019607843137255"); }

    #[test]
    fn large_integer_stays_decimal() {
        assert_eq!(f(1e21), "1000000000000000000000.0");
    }

    #[test]
    fn tiny_fraction_stays_decimal() {
        assert_eq!(f(1e-7), "0.0000001");
    }

    #[test]
    fn beyond_f32_range_is_emitted_unchanged() {
        let v = -5e39;
        assert!(v < f32::MIN as f64);
        assert_eq!(f(v), "-5000000000000000000000000000000000000000.0");
    }

    #[test]
    fn rejects_nan() {
        assert!(matches!(
            format_float(f64::NAN),
            Err(ShaderError::NonFiniteLiteral { field: "value", .. })
        ));
    }

    #[test]
    fn rejects_infinity() {
        assert!(format_float(f64::INFINITY).is_err());
        assert!(format_float(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn reports_field_name() {
        let e = float_literal("opacity", f64::NAN).unwrap_err();
        assert!(e.to_string().contains("opacity"));
    }
}
