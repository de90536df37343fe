//! CLI enum types for glyph ramp and resampling filter options.

use clap::ValueEnum;

use crate::ascii;

/// Named glyph ramp for grayscale rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Simple,
    Standard,
    Detailed,
    Blocks,
    Minimal,
}

impl From<CharacterSet> for ascii::CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Simple => ascii::CharSet::Simple,
            CharacterSet::Standard => ascii::CharSet::Standard,
            CharacterSet::Detailed => ascii::CharSet::Detailed,
            CharacterSet::Blocks => ascii::CharSet::Blocks,
            CharacterSet::Minimal => ascii::CharSet::Minimal,
        }
    }
}

/// Interpolation filter used when shrinking the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Filter {
    #[default]
    Lanczos3,
    CatmullRom,
    Gaussian,
    Triangle,
}

impl From<Filter> for ascii::ResampleFilter {
    fn from(f: Filter) -> Self {
        match f {
            Filter::Lanczos3 => ascii::ResampleFilter::Lanczos3,
            Filter::CatmullRom => ascii::ResampleFilter::CatmullRom,
            Filter::Gaussian => ascii::ResampleFilter::Gaussian,
            Filter::Triangle => ascii::ResampleFilter::Triangle,
        }
    }
}
