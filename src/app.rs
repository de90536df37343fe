//! Command-line application flow.
//!
//! Merges settings (CLI args > config file > built-in defaults), loads the
//! image, prints the rendering and optionally saves a plain-text copy.

use std::io::Write;
use std::path::PathBuf;

use image::DynamicImage;

use crate::ascii::{
    convert, validate_aspect, CharSet, GlyphRamp, RenderError, RenderMode, RenderOptions,
    ResampleFilter, DEFAULT_ASPECT_CORRECTION, DEFAULT_WIDTH,
};
use crate::cli::Args;
use crate::config::{Config, RenderConfig};
use crate::error::{Error, Result};
use crate::output::write_output;
use crate::source::ImageSource;

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub source: ImageSource,
    pub output: Option<PathBuf>,
    pub options: RenderOptions,
}

impl Settings {
    /// Merge CLI arguments over the `[render]` config table.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::EmptyRamp` for an empty custom ramp and
    /// `RenderError::InvalidAspect` for an out-of-range aspect from the
    /// config file.
    pub fn resolve(args: &Args, config: &RenderConfig) -> std::result::Result<Self, RenderError> {
        let ramp = if let Some(glyphs) = &args.ramp {
            GlyphRamp::new(glyphs)?
        } else if let Some(charset) = args.charset {
            CharSet::from(charset).ramp()
        } else if let Some(glyphs) = &config.ramp {
            GlyphRamp::new(glyphs)?
        } else {
            config.charset.unwrap_or_default().ramp()
        };

        let color = flag(args.color, args.no_color, config.color);
        let mode = if color {
            RenderMode::Color
        } else {
            RenderMode::Grayscale
        };

        let aspect = args
            .aspect
            .or(config.aspect)
            .unwrap_or(DEFAULT_ASPECT_CORRECTION);
        validate_aspect(aspect)?;

        let options = RenderOptions {
            width: args.width.or(config.width).unwrap_or(DEFAULT_WIDTH),
            mode,
            ramp,
            invert: flag(args.invert, args.no_invert, Some(config.invert)),
            aspect,
            filter: args
                .filter
                .map(ResampleFilter::from)
                .or(config.filter)
                .unwrap_or_default(),
        };

        Ok(Self {
            source: ImageSource::parse(&args.image),
            output: args.output.clone(),
            options,
        })
    }
}

/// An on/off CLI flag pair over an optional config value, off by default.
fn flag(on: bool, off: bool, config: Option<bool>) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        config.unwrap_or(false)
    }
}

/// Text produced for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// What gets printed to the terminal
    pub terminal: String,
    /// What gets saved, if saving was requested. Never contains escapes.
    pub file: Option<String>,
}

/// Render for the terminal and, when `save` is set, for a file.
///
/// Color renderings are redone in grayscale for the file so saved output
/// stays plain text; grayscale renderings are reused as-is.
pub fn render(
    image: &DynamicImage,
    options: &RenderOptions,
    save: bool,
) -> std::result::Result<Rendered, RenderError> {
    let terminal = convert(image, options)?;

    let file = match (save, options.mode) {
        (false, _) => None,
        (true, RenderMode::Grayscale) => Some(terminal.clone()),
        (true, RenderMode::Color) => {
            log::info!("Generating plain text version for the output file");
            Some(convert(image, &options.with_mode(RenderMode::Grayscale))?)
        }
    };

    Ok(Rendered { terminal, file })
}

/// Load the config file named on the command line, or the default one.
///
/// An explicit path must exist and parse. Problems with the default file
/// are logged and ignored.
pub fn load_config(args: &Args) -> Result<Config> {
    match &args.config {
        Some(path) => Ok(Config::load_from_explicit(path.clone())?),
        None => Ok(Config::load(None).unwrap_or_else(|e| {
            log::warn!("{}; using default settings", e);
            Config::default()
        })),
    }
}

/// Run the tool end to end.
pub fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    let settings = Settings::resolve(args, &config.render)?;
    log::debug!("Resolved settings: {:?}", settings);

    let loaded = settings.source.load()?;
    let rendered = render(&loaded.image, &settings.options, settings.output.is_some())?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.terminal.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(Error::Stdout)?;

    if let (Some(path), Some(text)) = (&settings.output, &rendered.file) {
        write_output(path, text)?;
        eprintln!("ASCII art saved to: {}", path.display());
    }

    Ok(())
}
