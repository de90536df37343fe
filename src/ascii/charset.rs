//! Glyph ramp definitions for ASCII rendering.
//!
//! Every ramp is ordered from darkest (index 0) to lightest.

use std::fmt;

use serde::Deserialize;

use super::RenderError;

/// Compact ramp (17 levels). The default.
pub const SIMPLE_RAMP: &str = " .:!/r(l1Z4H9W8$@";

/// Standard ASCII density ramp (10 levels).
pub const STANDARD_RAMP: &str = " .:-=+*#%@";

/// Long ramp (92 levels) for large output widths.
pub const DETAILED_RAMP: &str =
    " `.-':_,^=;><+!rc*/z?sLTv)J7(|Fi{C}fI31tlu[neoZ5Yxjya]2ESwqkP6h9d4VpOGbUAKXHm8RD#$Bg0MNWQ%&@";

/// Unicode shade blocks (5 levels).
pub const BLOCKS_RAMP: &str = " ░▒▓█";

/// Minimal ramp (4 levels) for a clean look.
pub const MINIMAL_RAMP: &str = " .:#";

/// Named glyph ramps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CharSet {
    /// Compact 17-level ramp
    #[default]
    Simple,
    /// Standard 10-level ramp
    Standard,
    /// 92-level ramp
    Detailed,
    /// Unicode shade blocks
    Blocks,
    /// 4-level ramp
    Minimal,
}

impl CharSet {
    /// Get the ramp string for this charset.
    pub fn ramp_str(&self) -> &'static str {
        match self {
            CharSet::Simple => SIMPLE_RAMP,
            CharSet::Standard => STANDARD_RAMP,
            CharSet::Detailed => DETAILED_RAMP,
            CharSet::Blocks => BLOCKS_RAMP,
            CharSet::Minimal => MINIMAL_RAMP,
        }
    }

    /// Build the validated ramp for this charset.
    pub fn ramp(&self) -> GlyphRamp {
        // Built-in ramps are never empty.
        GlyphRamp {
            glyphs: self.ramp_str().chars().collect(),
        }
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Simple => "simple",
            CharSet::Standard => "standard",
            CharSet::Detailed => "detailed",
            CharSet::Blocks => "blocks",
            CharSet::Minimal => "minimal",
        }
    }
}

/// An ordered, non-empty sequence of glyphs, darkest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl GlyphRamp {
    /// Build a ramp from a string of glyphs.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::EmptyRamp` if `glyphs` contains no characters.
    pub fn new(glyphs: &str) -> Result<Self, RenderError> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(RenderError::EmptyRamp);
        }
        Ok(Self { glyphs })
    }

    /// The glyphs, darkest first.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false for a constructed ramp.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Darkest glyph.
    pub fn first(&self) -> char {
        self.glyphs[0]
    }

    /// Lightest glyph.
    pub fn last(&self) -> char {
        self.glyphs[self.glyphs.len() - 1]
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        CharSet::default().ramp()
    }
}

impl fmt::Display for GlyphRamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyphs.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ramps_are_not_empty() {
        for set in [
            CharSet::Simple,
            CharSet::Standard,
            CharSet::Detailed,
            CharSet::Blocks,
            CharSet::Minimal,
        ] {
            assert!(!set.ramp().is_empty(), "{} ramp is empty", set.name());
        }
    }

    #[test]
    fn test_ramp_lengths() {
        assert_eq!(CharSet::Simple.ramp().len(), 17);
        assert_eq!(CharSet::Standard.ramp().len(), 10);
        assert_eq!(CharSet::Detailed.ramp().len(), 92);
        assert_eq!(CharSet::Blocks.ramp().len(), 5);
        assert_eq!(CharSet::Minimal.ramp().len(), 4);
    }

    #[test]
    fn test_ramps_start_dark() {
        assert_eq!(CharSet::Simple.ramp().first(), ' ');
        assert_eq!(CharSet::Simple.ramp().last(), '@');
        assert_eq!(CharSet::Blocks.ramp().last(), '█');
    }

    #[test]
    fn test_empty_ramp_rejected() {
        assert!(matches!(GlyphRamp::new(""), Err(RenderError::EmptyRamp)));
    }

    #[test]
    fn test_custom_ramp_counts_chars_not_bytes() {
        let ramp = GlyphRamp::new(" ░█").unwrap();
        assert_eq!(ramp.len(), 3);
        assert_eq!(ramp.to_string(), " ░█");
    }
}
