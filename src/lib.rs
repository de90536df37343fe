//! termglyph library crate.
//!
//! Converts raster images into ASCII art or truecolor block text. The core
//! conversion lives in [`ascii`]; the other modules load images, read
//! configuration and drive the command-line tool.

pub mod app;
pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod source;

pub use ascii::{convert, RenderError, RenderMode, RenderOptions};
pub use error::{Error, Result};
