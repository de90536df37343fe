//! Image loading from local files and HTTP(S) URLs.
//!
//! The format is always sniffed from the content, never taken from a file
//! extension or a `Content-Type` header.

use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Duration;

use futures_util::StreamExt;
use image::{DynamicImage, ImageFormat, ImageReader};

/// Largest response body accepted from a URL (64 MiB).
pub const MAX_DOWNLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Default timeout for HTTP requests (30 seconds).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where an image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Path(PathBuf),
    Url(String),
}

impl ImageSource {
    /// Classify a user-supplied location.
    ///
    /// Anything starting with `http://` or `https://` is a URL; everything
    /// else is treated as a filesystem path.
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ImageSource::Url(location.to_string())
        } else {
            ImageSource::Path(PathBuf::from(location))
        }
    }

    pub fn is_url(&self) -> bool {
        matches!(self, ImageSource::Url(_))
    }

    /// Load and decode the image, blocking until done.
    ///
    /// URLs are fetched on a private tokio runtime.
    pub fn load(&self) -> Result<LoadedImage, SourceError> {
        match self {
            ImageSource::Path(path) => load_path(path),
            ImageSource::Url(url) => {
                let rt = tokio::runtime::Runtime::new().map_err(SourceError::Runtime)?;
                rt.block_on(async {
                    let fetcher = ImageFetcher::new()?;
                    fetcher.load(url).await
                })
            }
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Path(path) => write!(f, "{}", path.display()),
            ImageSource::Url(url) => f.write_str(url),
        }
    }
}

/// A decoded image along with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub image: DynamicImage,
    pub format: ImageFormat,
    /// Path or URL the image was loaded from
    pub origin: String,
}

/// Read and decode an image file.
pub fn load_path(path: &Path) -> Result<LoadedImage, SourceError> {
    let bytes = std::fs::read(path).map_err(|e| SourceError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    decode_bytes(&bytes, &path.display().to_string())
}

/// Decode an in-memory image, detecting the format from its signature.
///
/// `origin` is only used for error messages and logging.
pub fn decode_bytes(bytes: &[u8], origin: &str) -> Result<LoadedImage, SourceError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| SourceError::Decode {
            origin: origin.to_string(),
            source: e.into(),
        })?;

    let format = reader.format().ok_or_else(|| SourceError::UnknownFormat {
        origin: origin.to_string(),
    })?;

    let image = reader.decode().map_err(|e| SourceError::Decode {
        origin: origin.to_string(),
        source: e,
    })?;

    log::info!(
        "Loaded image {} (format {:?}, {}x{})",
        origin,
        format,
        image.width(),
        image.height()
    );

    Ok(LoadedImage {
        image,
        format,
        origin: origin.to_string(),
    })
}

/// Downloads images over HTTP(S).
///
/// Makes a single attempt per request; failures are returned as-is.
pub struct ImageFetcher {
    http_client: reqwest::Client,
    max_bytes: usize,
}

impl ImageFetcher {
    /// Create a fetcher with default timeouts and size limit.
    pub fn new() -> Result<Self, SourceError> {
        Self::with_max_bytes(MAX_DOWNLOAD_BYTES)
    }

    /// Create a fetcher that rejects bodies larger than `max_bytes`.
    pub fn with_max_bytes(max_bytes: usize) -> Result<Self, SourceError> {
        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self {
            http_client,
            max_bytes,
        })
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Download the raw body at `url`.
    ///
    /// # Errors
    ///
    /// * `SourceError::Fetch` if the request or body transfer fails
    /// * `SourceError::HttpStatus` for any non-2xx response
    /// * `SourceError::TooLarge` if the body exceeds the size limit
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        let fetch_err = |e: reqwest::Error| SourceError::Fetch {
            url: url.to_string(),
            source: e,
        };

        log::debug!("GET {}", url);
        let response = self.http_client.get(url).send().await.map_err(fetch_err)?;

        if !response.status().is_success() {
            return Err(SourceError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let too_large = || SourceError::TooLarge {
            url: url.to_string(),
            limit: self.max_bytes,
        };

        let declared = response.content_length().unwrap_or(0);
        if declared > self.max_bytes as u64 {
            return Err(too_large());
        }

        let mut body = Vec::with_capacity(declared as usize);
        let mut stream = response.bytes_stream();
        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(fetch_err)?;
            if body.len() + chunk.len() > self.max_bytes {
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }

    /// Download and decode the image at `url`.
    pub async fn load(&self, url: &str) -> Result<LoadedImage, SourceError> {
        let bytes = self.fetch_bytes(url).await?;
        decode_bytes(&bytes, url)
    }
}

/// Errors that can occur while loading an image.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("could not read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not download '{url}': {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("download of '{url}' failed with HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("'{url}' is larger than the {limit} byte download limit")]
    TooLarge { url: String, limit: usize },

    #[error("'{origin}' is not in a recognized image format")]
    UnknownFormat { origin: String },

    #[error("could not decode '{origin}': {source}")]
    Decode {
        origin: String,
        source: image::ImageError,
    },

    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    #[error("async runtime setup failed: {0}")]
    Runtime(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_urls() {
        assert_eq!(
            ImageSource::parse("https://example.com/cat.png"),
            ImageSource::Url("https://example.com/cat.png".to_string())
        );
        assert!(ImageSource::parse("http://example.com/a.jpg").is_url());
        assert!(ImageSource::parse("HTTPS://EXAMPLE.COM/A.JPG").is_url());
    }

    #[test]
    fn test_parse_paths() {
        assert_eq!(
            ImageSource::parse("photos/cat.png"),
            ImageSource::Path(PathBuf::from("photos/cat.png"))
        );
        // No scheme sniffing beyond the two HTTP prefixes.
        assert!(!ImageSource::parse("ftp://example.com/a.png").is_url());
        assert!(!ImageSource::parse("httpfoo.png").is_url());
    }

    #[test]
    fn test_display_is_original_location() {
        assert_eq!(ImageSource::parse("a/b.png").to_string(), "a/b.png");
        assert_eq!(
            ImageSource::parse("https://x.test/y").to_string(),
            "https://x.test/y"
        );
    }

    #[test]
    fn test_decode_garbage_is_unknown_format() {
        let err = decode_bytes(b"definitely not an image", "garbage.png").unwrap_err();
        assert!(
            matches!(err, SourceError::UnknownFormat { ref origin } if origin == "garbage.png")
        );
        assert!(err.to_string().contains("garbage.png"));
    }

    #[test]
    fn test_decode_truncated_png_is_decode_error() {
        // Valid PNG signature, nothing after it.
        let bytes = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        let err = decode_bytes(&bytes, "short.png").unwrap_err();
        assert!(matches!(err, SourceError::Decode { .. }));
        assert!(err.to_string().contains("short.png"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_path(Path::new("/nonexistent/termglyph/missing.png")).unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn test_fetcher_max_bytes() {
        let fetcher = ImageFetcher::with_max_bytes(1024).unwrap();
        assert_eq!(fetcher.max_bytes(), 1024);
        assert_eq!(ImageFetcher::new().unwrap().max_bytes(), MAX_DOWNLOAD_BYTES);
    }
}
