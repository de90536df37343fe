//! RGB to grayscale conversion using ITU-R BT.601 luminance weights.

/// Fixed-point BT.601 weights scaled by 2^16. They sum to exactly 65536,
/// so white maps to 255 and black to 0.
const WEIGHT_R: u32 = 19_595;
const WEIGHT_G: u32 = 38_470;
const WEIGHT_B: u32 = 7_471;

/// Convert an 8-bit RGB triple to a gray intensity in `[0, 255]`.
///
/// The luminance formula is: Y = 0.299*R + 0.587*G + 0.114*B, evaluated in
/// 16.16 fixed point with round-to-nearest. This matches the gray model of
/// most image libraries.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = WEIGHT_R * r as u32 + WEIGHT_G * g as u32 + WEIGHT_B * b as u32 + (1 << 15);
    (y >> 16) as u8
}
