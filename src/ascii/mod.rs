//! Pixel-to-glyph conversion.
//!
//! This module turns a decoded image into text suitable for a terminal or a
//! plain text file:
//!
//! 1. **Dimensions** - output width as requested, height from the source
//!    aspect ratio scaled down for tall character cells
//! 2. **Resampling** - smoothing filter from the `image` crate
//! 3. **Mapping** - each pixel becomes a ramp glyph (grayscale) or a
//!    truecolor block (color)
//!
//! # Glyph Ramps
//!
//! Named ramps are available via [`CharSet`]; any non-empty string can be
//! used through [`GlyphRamp::new`].

mod charset;
mod color;
mod dimensions;
mod grayscale;
mod mapping;
mod render;

pub use charset::{
    CharSet, GlyphRamp, BLOCKS_RAMP, DETAILED_RAMP, MINIMAL_RAMP, SIMPLE_RAMP, STANDARD_RAMP,
};
pub use color::{push_fg, reduce_channel, to_rgba8, BLOCK_GLYPH, RESET};
pub use dimensions::{
    calculate_dimensions, validate_aspect, DEFAULT_ASPECT_CORRECTION, MAX_ASPECT_CORRECTION,
    MAX_OUTPUT_WIDTH,
};
pub use grayscale::luma;
pub use mapping::{map_to_glyph, ramp_index};
pub use render::{
    convert, render_grid, RenderError, RenderMode, RenderOptions, ResampleFilter, DEFAULT_WIDTH,
};
