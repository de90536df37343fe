//! Brightness to character mapping.

use super::charset::GlyphRamp;

/// Index into a ramp of `levels` glyphs for a brightness value.
///
/// Computes `floor(brightness / 255 * (levels - 1))` in integer arithmetic,
/// so 0 always lands on the first glyph and 255 on the last.
#[inline]
pub fn ramp_index(brightness: u8, levels: usize) -> usize {
    if levels == 0 {
        return 0;
    }
    let idx = (brightness as usize * (levels - 1)) / 255;
    idx.min(levels - 1)
}

/// Map a brightness value to a glyph from the ramp.
///
/// # Arguments
/// * `brightness` - Gray intensity (0-255)
/// * `ramp` - Glyphs ordered from darkest to brightest
/// * `invert` - If true, invert brightness before mapping (for light terminals)
///
/// # Example
/// ```
/// use termglyph::ascii::{map_to_glyph, CharSet};
///
/// let ramp = CharSet::Standard.ramp();
/// assert_eq!(map_to_glyph(0, &ramp, false), ' ');
/// assert_eq!(map_to_glyph(255, &ramp, false), '@');
/// assert_eq!(map_to_glyph(255, &ramp, true), ' ');
/// ```
#[inline]
pub fn map_to_glyph(brightness: u8, ramp: &GlyphRamp, invert: bool) -> char {
    let b = if invert { 255 - brightness } else { brightness };
    ramp.glyphs()[ramp_index(b, ramp.len())]
}
