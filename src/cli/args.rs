//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

use super::enums::{CharacterSet, Filter};
use crate::ascii::MAX_ASPECT_CORRECTION;

/// Parse and validate an aspect correction factor (0 < a <= 4).
pub fn parse_aspect(s: &str) -> Result<f32, String> {
    let aspect: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !aspect.is_finite() || aspect <= 0.0 || aspect > MAX_ASPECT_CORRECTION {
        return Err(format!(
            "Aspect correction must be greater than 0 and at most {}, got {}",
            MAX_ASPECT_CORRECTION, s
        ));
    }
    Ok(aspect)
}

/// Render an image as ASCII art or colored blocks in the terminal
#[derive(Parser, Debug)]
#[command(name = "termglyph")]
#[command(version, about = "Render images as ASCII art in the terminal", long_about = None)]
#[command(after_help = "EXAMPLES:
    termglyph --image photo.jpg
    termglyph --image https://example.com/cat.png --width 120 --color
    termglyph -i photo.png --color --output photo.txt")]
pub struct Args {
    /// Image to render (local path or http(s) URL)
    #[arg(short, long)]
    pub image: String,

    /// Also save the rendering to this file (always plain text)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output width in characters, 1-65535 [default: 80]
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=65_535))]
    pub width: Option<u32>,

    /// Render truecolor blocks instead of ASCII characters
    #[arg(long, overrides_with = "no_color")]
    pub color: bool,

    /// Render ASCII characters even if the config file enables color
    #[arg(long, overrides_with = "color")]
    pub no_color: bool,

    /// Glyph ramp for ASCII output
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Custom glyph ramp, darkest first (overrides --charset)
    #[arg(long, conflicts_with = "charset")]
    pub ramp: Option<String>,

    /// Invert brightness (for light terminals)
    #[arg(long, overrides_with = "no_invert")]
    pub invert: bool,

    /// Keep normal brightness even if the config file enables inversion
    #[arg(long, overrides_with = "invert")]
    pub no_invert: bool,

    /// Vertical compression for tall character cells [default: 0.5]
    #[arg(long, value_parser = parse_aspect)]
    pub aspect: Option<f32>,

    /// Resampling filter
    #[arg(long)]
    pub filter: Option<Filter>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv debug for dependencies too)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
