//! ANSI truecolor escapes and channel depth reduction.

use std::borrow::Cow;
use std::fmt::Write;

use image::{DynamicImage, ImageBuffer, Rgba, RgbaImage};

/// Resets all SGR attributes.
pub const RESET: &str = "\x1b[0m";

/// Glyph emitted for every cell in color mode.
pub const BLOCK_GLYPH: char = '█';

/// Append a 24-bit foreground color escape (`ESC[38;2;R;G;Bm`).
#[inline]
pub fn push_fg(out: &mut String, r: u8, g: u8, b: u8) {
    // Writing to a String cannot fail.
    let _ = write!(out, "\x1b[38;2;{};{};{}m", r, g, b);
}

/// Reduce a 16-bit channel to 8 bits by truncation (`>> 8`).
#[inline]
pub fn reduce_channel(value: u16) -> u8 {
    (value >> 8) as u8
}

/// Convert any image to 8-bit RGBA.
///
/// 16-bit sources are truncated channel by channel rather than rounded, so
/// 0xFFFF becomes 255 and 0x80FF becomes 128. Other depths go through the
/// `image` crate's own conversion.
pub fn to_rgba8(img: &DynamicImage) -> RgbaImage {
    match img {
        DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_)
        | DynamicImage::ImageRgb16(_)
        | DynamicImage::ImageRgba16(_) => {
            let wide = img.to_rgba16();
            RgbaImage::from_fn(wide.width(), wide.height(), |x, y| {
                let p = wide.get_pixel(x, y);
                Rgba([
                    reduce_channel(p[0]),
                    reduce_channel(p[1]),
                    reduce_channel(p[2]),
                    reduce_channel(p[3]),
                ])
            })
        }
        _ => img.to_rgba8(),
    }
}

/// Composite an image with alpha onto black, leaving it fully opaque.
///
/// Runs before resampling so the hidden color of transparent pixels never
/// blends into their neighbours. 16-bit sources stay 16-bit so that
/// [`to_rgba8`] still truncates them afterwards. Images without alpha are
/// borrowed unchanged.
pub fn flatten_alpha(img: &DynamicImage) -> Cow<'_, DynamicImage> {
    if !img.color().has_alpha() {
        return Cow::Borrowed(img);
    }

    let flat = match img {
        DynamicImage::ImageLumaA16(_) | DynamicImage::ImageRgba16(_) => {
            let wide = img.to_rgba16();
            let scale = |c: u16, a: u16| ((c as u32 * a as u32 + 32_767) / 65_535) as u16;
            DynamicImage::ImageRgba16(ImageBuffer::from_fn(wide.width(), wide.height(), |x, y| {
                let [r, g, b, a] = wide.get_pixel(x, y).0;
                Rgba([scale(r, a), scale(g, a), scale(b, a), u16::MAX])
            }))
        }
        _ => {
            let narrow = img.to_rgba8();
            let scale = |c: u8, a: u8| ((c as u16 * a as u16 + 127) / 255) as u8;
            DynamicImage::ImageRgba8(RgbaImage::from_fn(narrow.width(), narrow.height(), |x, y| {
                let [r, g, b, a] = narrow.get_pixel(x, y).0;
                Rgba([scale(r, a), scale(g, a), scale(b, a), u8::MAX])
            }))
        }
    };
    Cow::Owned(flat)
}
