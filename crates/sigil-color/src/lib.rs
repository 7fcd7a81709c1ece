//! CSS color text parser for **sigil** symbol styles.
//!
//! This crate is intentionally dependency-free so text colors can be resolved
//! without pulling in the shader generator.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`error`] | `ColorParseError` |
//! | [`rgba`] | `Rgba` straight-alpha color |
//! | [`parse`] | `parse_color` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use sigil_color::parse_color;
//!
//! let c = parse_color("#ff000080").unwrap();
//! assert_eq!((c.r, c.g, c.b), (255, 0, 0));
//! assert!((c.a - 128.0 / 255.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod parse;
pub mod rgba;

mod named;

pub use error::ColorParseError;
pub use parse::parse_color;
pub use rgba::Rgba;
