//! Symbol color model.
//!
//! Scope:
//! - straight-alpha channel tuples (`0..=255` RGB, `[0, 1]` alpha)
//! - text-or-channels color input
//! - resolution of text colors through a pluggable [`ColorResolver`]

pub mod color;
mod resolve;

pub use color::{ColorChannels, SymbolColor};
pub use resolve::{ColorResolver, CssColorResolver};
