use std::fmt;

use sigil_color::ColorParseError;

/// Failure to generate a symbol shader.
///
/// Generation never returns partial output: any of these is raised before
/// the program text is assembled.
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderError {
    /// A required parameter was not supplied.
    MissingField(&'static str),
    /// A parameter would be emitted as NaN or infinity.
    NonFiniteLiteral { field: &'static str, value: f64 },
    /// A text color was rejected by the color resolver.
    Color(ColorParseError),
    /// A corner index outside `0..=3`.
    CornerIndex(f32),
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::MissingField(name) => {
                write!(f, "symbol shader: missing required parameter `{}`", name)
            }
            ShaderError::NonFiniteLiteral { field, value } => {
                write!(f, "symbol shader: `{}` is not finite ({})", field, value)
            }
            ShaderError::Color(e) => write!(f, "symbol shader: {}", e),
            ShaderError::CornerIndex(i) => {
                write!(f, "symbol shader: corner index {} is not one of 0, 1, 2, 3", i)
            }
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::Color(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ColorParseError> for ShaderError {
    fn from(e: ColorParseError) -> Self {
        ShaderError::Color(e)
    }
}
