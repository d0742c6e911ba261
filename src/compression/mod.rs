// SPDX-License-Identifier: MPL-2.0
//! Image compression behind a narrow, swappable seam.
//!
//! The uploader only knows about [`Compressor`]: give it a [`Payload`] and a
//! [`CompressionOptions`] policy, get a smaller payload back or a
//! [`CompressionError`]. [`ImageCompressor`] is the production implementation
//! built on the `image` crate; tests plug in fakes that only care about
//! byte lengths.
//!
//! [`run`] is the async entry point used by the UI. It honours the
//! `use_worker` preference by moving the CPU-bound work onto Tokio's
//! blocking pool so the Iced executor stays responsive.

mod encoder;

pub use encoder::ImageCompressor;

use crate::config::{self, CompressionConfig};
pub use crate::error::CompressionError;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Image MIME types the drop zone accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageMime {
    Png,
    Jpeg,
    Gif,
    Bmp,
    WebP,
    Tiff,
    Ico,
}

impl ImageMime {
    /// All accepted types, in the order shown in the browse dialog filter.
    pub const ALL: [ImageMime; 7] = [
        ImageMime::Png,
        ImageMime::Jpeg,
        ImageMime::Gif,
        ImageMime::Bmp,
        ImageMime::WebP,
        ImageMime::Tiff,
        ImageMime::Ico,
    ];

    /// Every file extension mapped to an image type.
    pub const EXTENSIONS: [&'static str; 9] = [
        "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico",
    ];

    /// Maps a file extension (case-insensitive) to an image type.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageMime::Png),
            "jpg" | "jpeg" => Some(ImageMime::Jpeg),
            "gif" => Some(ImageMime::Gif),
            "bmp" => Some(ImageMime::Bmp),
            "webp" => Some(ImageMime::WebP),
            "tif" | "tiff" => Some(ImageMime::Tiff),
            "ico" => Some(ImageMime::Ico),
            _ => None,
        }
    }

    /// Infers the image type from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// The `type/subtype` string, e.g. `image/png`.
    #[must_use]
    pub fn essence(self) -> &'static str {
        match self {
            ImageMime::Png => "image/png",
            ImageMime::Jpeg => "image/jpeg",
            ImageMime::Gif => "image/gif",
            ImageMime::Bmp => "image/bmp",
            ImageMime::WebP => "image/webp",
            ImageMime::Tiff => "image/tiff",
            ImageMime::Ico => "image/x-icon",
        }
    }

    /// Preferred file extension for this type.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            ImageMime::Png => "png",
            ImageMime::Jpeg => "jpg",
            ImageMime::Gif => "gif",
            ImageMime::Bmp => "bmp",
            ImageMime::WebP => "webp",
            ImageMime::Tiff => "tiff",
            ImageMime::Ico => "ico",
        }
    }
}

impl fmt::Display for ImageMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.essence())
    }
}

/// An opaque image file held in memory.
///
/// Bytes are shared so payloads can move into async tasks without copying.
#[derive(Clone, PartialEq, Eq)]
pub struct Payload {
    bytes: Arc<[u8]>,
    mime: ImageMime,
}

impl Payload {
    #[must_use]
    pub fn new(bytes: impl Into<Arc<[u8]>>, mime: ImageMime) -> Self {
        Self {
            bytes: bytes.into(),
            mime,
        }
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn mime(&self) -> ImageMime {
        self.mime
    }

    /// Byte length of the encoded file.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload")
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Compression policy handed to the compressor with every payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionOptions {
    /// Target maximum output size in megabytes.
    pub max_size_mb: f32,
    /// Maximum length of the longest edge, in pixels.
    pub max_width_or_height: u32,
    /// Encoder quality for the first pass (0.0 to 1.0).
    pub initial_quality: f32,
    /// Run on a blocking worker instead of the async executor.
    pub use_worker: bool,
    /// Reach the target size by lowering quality only.
    pub always_keep_resolution: bool,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            max_size_mb: config::DEFAULT_MAX_SIZE_MB,
            max_width_or_height: config::DEFAULT_MAX_WIDTH_OR_HEIGHT,
            initial_quality: config::DEFAULT_INITIAL_QUALITY,
            use_worker: config::DEFAULT_USE_WORKER,
            always_keep_resolution: config::DEFAULT_ALWAYS_KEEP_RESOLUTION,
        }
    }
}

impl CompressionOptions {
    /// Builds options from the `[compression]` config section, filling gaps
    /// with defaults and clamping out-of-range values.
    #[must_use]
    pub fn from_config(cfg: &CompressionConfig) -> Self {
        let defaults = Self::default();
        Self {
            max_size_mb: cfg
                .max_size_mb
                .filter(|v| v.is_finite())
                .unwrap_or(defaults.max_size_mb)
                .clamp(config::MIN_MAX_SIZE_MB, config::MAX_MAX_SIZE_MB),
            max_width_or_height: cfg
                .max_width_or_height
                .unwrap_or(defaults.max_width_or_height)
                .clamp(
                    config::MIN_MAX_WIDTH_OR_HEIGHT,
                    config::MAX_MAX_WIDTH_OR_HEIGHT,
                ),
            initial_quality: cfg
                .initial_quality
                .filter(|v| v.is_finite())
                .unwrap_or(defaults.initial_quality)
                .clamp(config::MIN_QUALITY, config::MAX_QUALITY),
            use_worker: cfg.use_worker.unwrap_or(defaults.use_worker),
            always_keep_resolution: cfg
                .always_keep_resolution
                .unwrap_or(defaults.always_keep_resolution),
        }
    }

    /// Target size in bytes (1 MB = 1024 × 1024 bytes).
    #[must_use]
    pub fn max_size_bytes(&self) -> u64 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bytes = (f64::from(self.max_size_mb) * 1024.0 * 1024.0).round() as u64;
        bytes
    }
}

/// Turns an image payload into a (usually) smaller one.
///
/// Implementations are synchronous and may be CPU heavy; [`run`] decides
/// where they execute.
pub trait Compressor: Send + Sync {
    fn compress(
        &self,
        payload: &Payload,
        options: &CompressionOptions,
    ) -> Result<Payload, CompressionError>;
}

/// Runs `compressor` according to `options.use_worker`.
///
/// Resolves exactly once with the compressed payload or the error.
pub async fn run(
    compressor: Arc<dyn Compressor>,
    payload: Payload,
    options: CompressionOptions,
) -> Result<Payload, CompressionError> {
    if options.use_worker {
        tokio::task::spawn_blocking(move || compressor.compress(&payload, &options))
            .await
            .map_err(|err| CompressionError::Worker(err.to_string()))?
    } else {
        compressor.compress(&payload, &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct HalvingCompressor;

    impl Compressor for HalvingCompressor {
        fn compress(
            &self,
            payload: &Payload,
            _options: &CompressionOptions,
        ) -> Result<Payload, CompressionError> {
            let half = payload.bytes()[..payload.bytes().len() / 2].to_vec();
            Ok(Payload::new(half, ImageMime::Jpeg))
        }
    }

    struct PanickingCompressor;

    impl Compressor for PanickingCompressor {
        fn compress(
            &self,
            _payload: &Payload,
            _options: &CompressionOptions,
        ) -> Result<Payload, CompressionError> {
            panic!("encoder crashed");
        }
    }

    #[test]
    fn mime_from_extension_is_case_insensitive() {
        assert_eq!(ImageMime::from_extension("PNG"), Some(ImageMime::Png));
        assert_eq!(ImageMime::from_extension("jpeg"), Some(ImageMime::Jpeg));
        assert_eq!(ImageMime::from_extension("Tif"), Some(ImageMime::Tiff));
        assert_eq!(ImageMime::from_extension("pdf"), None);
    }

    #[test]
    fn every_listed_extension_maps_to_a_mime() {
        for ext in ImageMime::EXTENSIONS {
            assert!(ImageMime::from_extension(ext).is_some(), "{ext}");
        }
        for mime in ImageMime::ALL {
            assert_eq!(ImageMime::from_extension(mime.extension()), Some(mime));
            assert!(mime.essence().starts_with("image/"));
        }
    }

    #[test]
    fn mime_from_path_uses_extension() {
        assert_eq!(
            ImageMime::from_path(&PathBuf::from("/tmp/photo.JPG")),
            Some(ImageMime::Jpeg)
        );
        assert_eq!(ImageMime::from_path(&PathBuf::from("/tmp/notes")), None);
    }

    #[test]
    fn payload_reports_length() {
        let payload = Payload::new(vec![0u8; 42], ImageMime::Png);
        assert_eq!(payload.len(), 42);
        assert!(!payload.is_empty());
        assert!(Payload::new(Vec::new(), ImageMime::Png).is_empty());
    }

    #[test]
    fn default_options_follow_canonical_policy() {
        let options = CompressionOptions::default();
        assert_eq!(options.max_size_mb, 1.5);
        assert_eq!(options.max_width_or_height, 1200);
        assert_eq!(options.initial_quality, 0.8);
        assert!(options.use_worker);
        assert!(options.always_keep_resolution);
        assert_eq!(options.max_size_bytes(), 1_572_864);
    }

    #[test]
    fn from_config_clamps_out_of_range_values() {
        let cfg = CompressionConfig {
            max_size_mb: Some(-3.0),
            max_width_or_height: Some(1),
            initial_quality: Some(7.0),
            use_worker: Some(false),
            always_keep_resolution: None,
        };
        let options = CompressionOptions::from_config(&cfg);
        assert_eq!(options.max_size_mb, config::MIN_MAX_SIZE_MB);
        assert_eq!(options.max_width_or_height, config::MIN_MAX_WIDTH_OR_HEIGHT);
        assert_eq!(options.initial_quality, config::MAX_QUALITY);
        assert!(!options.use_worker);
        assert!(options.always_keep_resolution);
    }

    #[test]
    fn from_config_replaces_nan_with_default() {
        let cfg = CompressionConfig {
            initial_quality: Some(f32::NAN),
            ..CompressionConfig::default()
        };
        let options = CompressionOptions::from_config(&cfg);
        assert_eq!(options.initial_quality, config::DEFAULT_INITIAL_QUALITY);
    }

    #[tokio::test]
    async fn run_on_worker_returns_compressor_output() {
        let payload = Payload::new(vec![1u8; 100], ImageMime::Png);
        let result = run(
            Arc::new(HalvingCompressor),
            payload,
            CompressionOptions::default(),
        )
        .await
        .expect("compression should succeed");
        assert_eq!(result.len(), 50);
        assert_eq!(result.mime(), ImageMime::Jpeg);
    }

    #[tokio::test]
    async fn run_inline_when_worker_disabled() {
        let options = CompressionOptions {
            use_worker: false,
            ..CompressionOptions::default()
        };
        let payload = Payload::new(vec![1u8; 10], ImageMime::Png);
        let result = run(Arc::new(HalvingCompressor), payload, options)
            .await
            .expect("compression should succeed");
        assert_eq!(result.len(), 5);
    }

    #[tokio::test]
    async fn worker_panic_becomes_worker_error() {
        let payload = Payload::new(vec![1u8; 10], ImageMime::Png);
        let result = run(
            Arc::new(PanickingCompressor),
            payload,
            CompressionOptions::default(),
        )
        .await;
        assert!(matches!(result, Err(CompressionError::Worker(_))));
    }
}
