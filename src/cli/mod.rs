//! Command-line interface definitions.
//!
//! This module contains argument parsing and the value enums behind it.

mod args;
mod enums;

pub use args::{parse_aspect, Args};
pub use enums::{CharacterSet, Filter};
