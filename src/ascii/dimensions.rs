//! Dimension calculation for aspect-ratio-correct ASCII rendering.

use super::RenderError;

/// Default vertical compression applied to the output height.
///
/// Terminal cells are roughly twice as tall as they are wide, so one row of
/// glyphs covers about two rows' worth of the source's horizontal pixel
/// pitch. Tunable via config or `--aspect` for fonts with other proportions.
pub const DEFAULT_ASPECT_CORRECTION: f32 = 0.5;

/// Largest accepted aspect correction factor.
pub const MAX_ASPECT_CORRECTION: f32 = 4.0;

/// Largest accepted output width in characters.
pub const MAX_OUTPUT_WIDTH: u32 = u16::MAX as u32;

/// Calculate output dimensions for a requested output width.
///
/// The width is taken as given. The height preserves the source aspect
/// ratio, scaled by `aspect` to compensate for tall character cells:
///
/// `height = round(max_width * (img_height / img_width) * aspect)`
///
/// The height is clamped to at least 1 so that very wide images still
/// produce a row.
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `max_width` - Output width in characters
/// * `aspect` - Vertical compression factor (see [`DEFAULT_ASPECT_CORRECTION`])
///
/// # Errors
/// * `RenderError::ZeroWidth` if `img_width` is 0
/// * `RenderError::ZeroTargetWidth` if `max_width` is 0
/// * `RenderError::TargetTooWide` if `max_width` exceeds [`MAX_OUTPUT_WIDTH`]
/// * `RenderError::InvalidAspect` if `aspect` is not in `(0, MAX_ASPECT_CORRECTION]`
///
/// # Example
/// ```
/// use termglyph::ascii::calculate_dimensions;
///
/// let (w, h) = calculate_dimensions(800, 400, 80, 0.5).unwrap();
/// assert_eq!((w, h), (80, 20));
/// ```
pub fn calculate_dimensions(
    img_width: u32,
    img_height: u32,
    max_width: u32,
    aspect: f32,
) -> Result<(u32, u32), RenderError> {
    if img_width == 0 {
        return Err(RenderError::ZeroWidth);
    }
    if max_width == 0 {
        return Err(RenderError::ZeroTargetWidth);
    }
    if max_width > MAX_OUTPUT_WIDTH {
        return Err(RenderError::TargetTooWide(max_width));
    }
    validate_aspect(aspect)?;

    let ratio = img_height as f64 / img_width as f64;
    // `as` saturates on absurd ratios.
    let height = (max_width as f64 * ratio * aspect as f64).round() as u32;

    Ok((max_width, height.max(1)))
}

/// Check that an aspect correction factor is usable.
pub fn validate_aspect(aspect: f32) -> Result<(), RenderError> {
    if aspect.is_finite() && aspect > 0.0 && aspect <= MAX_ASPECT_CORRECTION {
        Ok(())
    } else {
        Err(RenderError::InvalidAspect(aspect))
    }
}
