//! Top-level error type for the application layer.

use crate::ascii::RenderError;
use crate::config::ConfigError;
use crate::output::OutputError;
use crate::source::SourceError;

/// Any failure between parsing arguments and writing the last byte.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not load image: {0}")]
    Source(#[from] SourceError),

    #[error("could not render image: {0}")]
    Render(#[from] RenderError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("could not write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
