//! Image to text conversion.
//!
//! [`convert`] sizes the output, resamples the image with a smoothing
//! filter and hands the resulting pixel grid to [`render_grid`], which walks
//! it row by row and emits either ramp glyphs or colored blocks.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use serde::Deserialize;

use super::charset::GlyphRamp;
use super::color::{flatten_alpha, push_fg, to_rgba8, BLOCK_GLYPH, RESET};
use super::dimensions::{calculate_dimensions, DEFAULT_ASPECT_CORRECTION};
use super::grayscale::luma;
use super::mapping::map_to_glyph;

/// Output width used when the caller does not ask for one.
pub const DEFAULT_WIDTH: u32 = 80;

/// Bytes of `ESC[38;2;RRR;GGG;BBBm` plus a 3-byte block glyph, worst case.
const COLOR_CELL_BYTES: usize = 22;

/// Errors raised when a conversion's preconditions are not met.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error("image has zero width")]
    ZeroWidth,

    #[error("image has zero height")]
    ZeroHeight,

    #[error("output width must be at least 1")]
    ZeroTargetWidth,

    #[error("output width {0} exceeds the maximum of 65535")]
    TargetTooWide(u32),

    #[error("glyph ramp must contain at least one character")]
    EmptyRamp,

    #[error("aspect correction must be in (0, 4], got {0}")]
    InvalidAspect(f32),
}

/// How each pixel is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Brightness-ranked glyphs from the ramp
    #[default]
    Grayscale,
    /// 24-bit foreground escape followed by a solid block
    Color,
}

/// Interpolation filter used to shrink the image.
///
/// Only smoothing kernels are offered: with so few brightness levels,
/// point sampling aliases into visible banding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    #[default]
    Lanczos3,
    CatmullRom,
    Gaussian,
    Triangle,
}

impl ResampleFilter {
    pub fn filter_type(&self) -> FilterType {
        match self {
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Triangle => FilterType::Triangle,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResampleFilter::Lanczos3 => "lanczos3",
            ResampleFilter::CatmullRom => "catmull-rom",
            ResampleFilter::Gaussian => "gaussian",
            ResampleFilter::Triangle => "triangle",
        }
    }
}

/// Settings for one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Output width in characters
    pub width: u32,
    pub mode: RenderMode,
    /// Glyphs for grayscale mode; ignored in color mode
    pub ramp: GlyphRamp,
    /// Invert brightness before mapping (for light terminals)
    pub invert: bool,
    /// Vertical compression factor for tall character cells
    pub aspect: f32,
    pub filter: ResampleFilter,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            mode: RenderMode::default(),
            ramp: GlyphRamp::default(),
            invert: false,
            aspect: DEFAULT_ASPECT_CORRECTION,
            filter: ResampleFilter::default(),
        }
    }
}

impl RenderOptions {
    /// Options for a given width, in color or grayscale, everything else default.
    pub fn new(width: u32, color: bool) -> Self {
        let mode = if color {
            RenderMode::Color
        } else {
            RenderMode::Grayscale
        };
        Self {
            width,
            mode,
            ..Self::default()
        }
    }

    /// The same options with a different mode.
    pub fn with_mode(&self, mode: RenderMode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }
}

/// Convert a decoded image to text.
///
/// The output has exactly one line per row of the resampled grid. In color
/// mode every row ends with a reset before its newline and the whole text
/// ends with one extra reset.
///
/// # Errors
///
/// Returns a [`RenderError`] if the image has a zero dimension or the
/// options are out of range. Nothing is rendered in that case.
///
/// # Example
/// ```
/// use image::{DynamicImage, RgbImage};
/// use termglyph::ascii::{convert, RenderOptions};
///
/// let img = DynamicImage::ImageRgb8(RgbImage::new(800, 400));
/// let text = convert(&img, &RenderOptions::new(80, false)).unwrap();
/// assert_eq!(text.lines().count(), 20);
/// ```
pub fn convert(image: &DynamicImage, options: &RenderOptions) -> Result<String, RenderError> {
    let (src_width, src_height) = image.dimensions();
    let (width, height) =
        calculate_dimensions(src_width, src_height, options.width, options.aspect)?;
    if src_height == 0 {
        return Err(RenderError::ZeroHeight);
    }

    log::debug!(
        "Resampling {}x{} -> {}x{} ({})",
        src_width,
        src_height,
        width,
        height,
        options.filter.name()
    );
    let resized = flatten_alpha(image).resize_exact(width, height, options.filter.filter_type());
    let grid = to_rgba8(&resized);

    Ok(render_grid(&grid, options))
}

/// Render an already-sized pixel grid.
///
/// A grid with zero width yields one empty line per row; a grid with zero
/// height yields no lines (plus the trailing reset in color mode).
pub fn render_grid(grid: &RgbaImage, options: &RenderOptions) -> String {
    match options.mode {
        RenderMode::Grayscale => render_grayscale(grid, &options.ramp, options.invert),
        RenderMode::Color => render_color(grid),
    }
}

fn render_grayscale(grid: &RgbaImage, ramp: &GlyphRamp, invert: bool) -> String {
    let (w, h) = grid.dimensions();
    let mut out = String::with_capacity((w as usize + 1) * h as usize);

    for_each_cell(
        grid,
        &mut out,
        |out, px| {
            let (r, g, b) = composite_on_black(px);
            out.push(map_to_glyph(luma(r, g, b), ramp, invert));
        },
        |_| {},
    );

    out
}

fn render_color(grid: &RgbaImage) -> String {
    let (w, h) = grid.dimensions();
    let row_bytes = w as usize * COLOR_CELL_BYTES + RESET.len() + 1;
    let mut out = String::with_capacity(row_bytes * h as usize + RESET.len());

    for_each_cell(
        grid,
        &mut out,
        |out, px| {
            let (r, g, b) = composite_on_black(px);
            push_fg(out, r, g, b);
            out.push(BLOCK_GLYPH);
        },
        |out| out.push_str(RESET),
    );
    out.push_str(RESET);

    out
}

/// Walk the grid top row first, left to right, terminating each row with
/// `end_row` and a newline.
fn for_each_cell<P, E>(grid: &RgbaImage, out: &mut String, mut cell: P, mut end_row: E)
where
    P: FnMut(&mut String, &Rgba<u8>),
    E: FnMut(&mut String),
{
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            cell(out, grid.get_pixel(x, y));
        }
        end_row(out);
        out.push('\n');
    }
}

/// Premultiply by alpha, so transparent areas read as black. Grids that came
/// through [`convert`] are already opaque.
#[inline]
fn composite_on_black(px: &Rgba<u8>) -> (u8, u8, u8) {
    let [r, g, b, a] = px.0;
    if a == u8::MAX {
        return (r, g, b);
    }
    let scale = |c: u8| ((c as u16 * a as u16 + 127) / 255) as u8;
    (scale(r), scale(g), scale(b))
}
