//! Behavioral tests for image to text conversion.
//!
//! These tests cover:
//! - Output dimensions and the aspect correction
//! - Ramp membership and endpoint mapping in grayscale mode
//! - Escape sequences and resets in color mode
//! - Determinism

use image::{DynamicImage, ImageBuffer, Rgb, RgbImage, Rgba, RgbaImage};

use termglyph::ascii::{
    calculate_dimensions, convert, render_grid, CharSet, GlyphRamp, RenderMode, RenderOptions,
    BLOCK_GLYPH, RESET,
};
use termglyph::RenderError;

fn solid(w: u32, h: u32, rgb: [u8; 3]) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, Rgb(rgb)))
}

/// Horizontal black-to-white ramp.
fn gradient(w: u32, h: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(w, h, |x, _| {
        let v = (x * 255 / (w - 1)) as u8;
        Rgb([v, v, v])
    }))
}

/// Strip `ESC[...m` sequences.
fn strip_escapes(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

// === Dimensions ===

#[test]
fn test_800x400_at_width_80_gives_20_rows() {
    assert_eq!(calculate_dimensions(800, 400, 80, 0.5).unwrap(), (80, 20));

    let text = convert(&solid(800, 400, [0, 0, 0]), &RenderOptions::new(80, false)).unwrap();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 20);
    assert!(rows.iter().all(|r| r.chars().count() == 80));
}

#[test]
fn test_panorama_still_gets_one_row() {
    let text = convert(&solid(1000, 2, [255, 255, 255]), &RenderOptions::new(40, false)).unwrap();
    assert_eq!(text, format!("{}\n", "@".repeat(40)));
}

#[test]
fn test_zero_width_image_is_an_error() {
    let img = DynamicImage::ImageRgb8(RgbImage::new(0, 5));
    assert_eq!(
        convert(&img, &RenderOptions::default()),
        Err(RenderError::ZeroWidth)
    );
}

#[test]
fn test_oversized_width_is_an_error() {
    assert_eq!(
        convert(&solid(4, 4, [0, 0, 0]), &RenderOptions::new(u32::MAX, false)),
        Err(RenderError::TargetTooWide(u32::MAX))
    );
}

// === Grayscale ===

#[test]
fn test_2x2_black_renders_first_glyph() {
    let ramp = CharSet::Simple.ramp();
    let first = ramp.first();
    let opts = RenderOptions {
        width: 2,
        aspect: 1.0,
        ..RenderOptions::default()
    };
    let text = convert(&solid(2, 2, [0, 0, 0]), &opts).unwrap();
    assert_eq!(text, format!("{first}{first}\n{first}{first}\n"));
}

#[test]
fn test_2x2_black_grid_without_resampling() {
    let grid = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
    let text = render_grid(&grid, &RenderOptions::new(2, false));
    assert_eq!(text, "  \n  \n");
}

#[test]
fn test_white_renders_last_glyph() {
    for set in [CharSet::Simple, CharSet::Standard, CharSet::Detailed, CharSet::Minimal] {
        let ramp = set.ramp();
        let opts = RenderOptions {
            ramp: ramp.clone(),
            ..RenderOptions::new(6, false)
        };
        let text = convert(&solid(12, 12, [255, 255, 255]), &opts).unwrap();
        let last = ramp.last();
        assert!(
            text.lines().all(|row| row.chars().all(|c| c == last)),
            "{} ramp: {:?}",
            set.name(),
            text
        );
    }
}

#[test]
fn test_every_glyph_comes_from_the_ramp() {
    let ramp = GlyphRamp::new(" .oO@").unwrap();
    let opts = RenderOptions {
        ramp: ramp.clone(),
        ..RenderOptions::new(64, false)
    };
    let text = convert(&gradient(256, 64), &opts).unwrap();
    for c in text.chars().filter(|&c| c != '\n') {
        assert!(ramp.glyphs().contains(&c), "unexpected glyph {:?}", c);
    }
}

#[test]
fn test_gradient_brightens_left_to_right() {
    let grid = RgbaImage::from_fn(256, 1, |x, _| {
        let v = x as u8;
        Rgba([v, v, v, 255])
    });
    let ramp = CharSet::Simple.ramp();
    let text = render_grid(&grid, &RenderOptions::new(256, false));
    let row: Vec<char> = text.trim_end_matches('\n').chars().collect();
    assert_eq!(row.len(), 256);
    assert_eq!(row[0], ramp.first());
    assert_eq!(row[255], ramp.last());

    let index = |c: &char| ramp.glyphs().iter().position(|g| g == c).unwrap();
    assert!(row.windows(2).all(|w| index(&w[0]) <= index(&w[1])));
}

#[test]
fn test_transparent_pixels_do_not_bleed_into_black() {
    // Left half hidden white, right half opaque black.
    let img = RgbaImage::from_fn(64, 64, |x, _| {
        if x < 32 {
            Rgba([255, 255, 255, 0])
        } else {
            Rgba([0, 0, 0, 255])
        }
    });
    let opts = RenderOptions {
        ramp: GlyphRamp::new("0123456789").unwrap(),
        aspect: 1.0,
        ..RenderOptions::new(1, false)
    };
    assert_eq!(convert(&DynamicImage::ImageRgba8(img.clone()), &opts).unwrap(), "0\n");

    let wider = RenderOptions {
        width: 8,
        ..opts
    };
    let text = convert(&DynamicImage::ImageRgba8(img), &wider).unwrap();
    assert!(text.lines().all(|row| row == "00000000"), "{:?}", text);
}

#[test]
fn test_transparent_pixels_do_not_bleed_color() {
    // Hidden red next to opaque blue.
    let img = RgbaImage::from_fn(16, 16, |x, _| {
        if x < 8 {
            Rgba([255, 0, 0, 0])
        } else {
            Rgba([0, 0, 255, 255])
        }
    });
    let opts = RenderOptions {
        aspect: 1.0,
        ..RenderOptions::new(2, true)
    };
    let text = convert(&DynamicImage::ImageRgba8(img), &opts).unwrap();
    assert_eq!(text.matches("\x1b[38;2;0;0;").count(), 4, "{:?}", text);
}

#[test]
fn test_row_and_column_counts_match_grid() {
    let grid = RgbaImage::from_pixel(7, 3, Rgba([90, 120, 200, 255]));
    for mode in [RenderMode::Grayscale, RenderMode::Color] {
        let text = render_grid(&grid, &RenderOptions::default().with_mode(mode));
        let visible = strip_escapes(&text);
        let rows: Vec<&str> = visible.lines().collect();
        assert_eq!(rows.len(), 3, "{:?}", mode);
        assert!(rows.iter().all(|r| r.chars().count() == 7), "{:?}", mode);
        assert_eq!(text.matches('\n').count(), 3, "{:?}", mode);
    }
}

// === Color ===

#[test]
fn test_pure_red_escape_parameters() {
    let text = convert(&solid(4, 4, [255, 0, 0]), &RenderOptions::new(2, true)).unwrap();
    assert!(text.starts_with("\x1b[38;2;255;0;0m"));
    assert_eq!(text.matches("\x1b[38;2;255;0;0m").count(), 2);
    assert_eq!(text.matches(BLOCK_GLYPH).count(), 2);
}

#[test]
fn test_color_rows_end_with_reset_and_output_ends_with_extra_reset() {
    let text = convert(&solid(10, 10, [10, 200, 30]), &RenderOptions::new(5, true)).unwrap();
    let rows: Vec<&str> = text.split('\n').collect();
    let (last, body) = rows.split_last().unwrap();
    assert_eq!(body.len(), 3);
    assert!(body.iter().all(|row| row.ends_with(RESET)));
    assert_eq!(*last, RESET);
    assert!(text.ends_with(&format!("{RESET}\n{RESET}")));
}

#[test]
fn test_color_reads_16_bit_channels_by_truncation() {
    let wide: ImageBuffer<Rgb<u16>, Vec<u16>> =
        ImageBuffer::from_pixel(3, 3, Rgb([0xFFFF, 0x80FF, 0x0000]));
    let opts = RenderOptions {
        aspect: 1.0,
        ..RenderOptions::new(3, true)
    };
    let text = convert(&DynamicImage::ImageRgb16(wide), &opts).unwrap();
    assert!(text.contains("\x1b[38;2;255;128;0m"), "{:?}", text);
}

#[test]
fn test_color_ignores_ramp() {
    let a = RenderOptions::new(4, true);
    let b = RenderOptions {
        ramp: CharSet::Blocks.ramp(),
        ..a.clone()
    };
    let img = gradient(16, 16);
    assert_eq!(convert(&img, &a).unwrap(), convert(&img, &b).unwrap());
}

// === Determinism ===

#[test]
fn test_conversion_is_deterministic() {
    let img = gradient(333, 211);
    for color in [false, true] {
        let opts = RenderOptions::new(57, color);
        assert_eq!(convert(&img, &opts).unwrap(), convert(&img, &opts).unwrap());
    }
}

#[test]
fn test_conversions_run_in_parallel() {
    let img = gradient(200, 100);
    let expected = convert(&img, &RenderOptions::new(40, false)).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let img = img.clone();
            std::thread::spawn(move || convert(&img, &RenderOptions::new(40, false)).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_different_charsets_produce_different_output() {
    let img = gradient(160, 80);
    let simple = convert(&img, &RenderOptions::new(40, false)).unwrap();
    let blocks = convert(
        &img,
        &RenderOptions {
            ramp: CharSet::Blocks.ramp(),
            ..RenderOptions::new(40, false)
        },
    )
    .unwrap();

    assert_ne!(simple, blocks);
    assert_eq!(simple.lines().count(), blocks.lines().count());
    assert!(blocks.contains('▒'));
}

#[test]
fn test_invert_flips_brightness() {
    let img = solid(8, 8, [255, 255, 255]);
    let inverted = RenderOptions {
        invert: true,
        ..RenderOptions::new(4, false)
    };
    assert_eq!(convert(&img, &inverted).unwrap(), "    \n    \n");
}
