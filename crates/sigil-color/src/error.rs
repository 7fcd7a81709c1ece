use std::fmt;

/// A color text that could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError {
    pub message: String,
    /// The rejected input, as given by the caller.
    pub input: String,
}

impl ColorParseError {
    pub(crate) fn new(msg: impl Into<String>, input: &str) -> Self {
        Self { message: msg.into(), input: input.to_string() }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}: {}", self.input, self.message)
    }
}

impl std::error::Error for ColorParseError {}
