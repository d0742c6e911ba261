// SPDX-License-Identifier: MPL-2.0
//! End-to-end uploader scenarios driven through the public API.

use iced_shrink::compression::{
    self, CompressionError, CompressionOptions, Compressor, ImageCompressor, ImageMime, Payload,
};
use iced_shrink::config::Config;
use iced_shrink::i18n::fluent::I18n;
use iced_shrink::uploader::format::savings_badge;
use iced_shrink::uploader::view::{compressed_heading, original_heading};
use iced_shrink::uploader::{CompressionStatus, DroppedFile, Outcome, UploaderState};
use image_rs::{DynamicImage, ImageFormat, RgbImage};
use std::io::Cursor;
use std::sync::Arc;

/// Keeps one byte in `ratio_denominator`, or grows the payload when the
/// denominator is zero.
struct FakeCompressor {
    ratio_denominator: usize,
}

impl Compressor for FakeCompressor {
    fn compress(
        &self,
        payload: &Payload,
        _options: &CompressionOptions,
    ) -> Result<Payload, CompressionError> {
        let len = payload.bytes().len();
        let out = if self.ratio_denominator == 0 {
            len * 2
        } else {
            len / self.ratio_denominator
        };
        Ok(Payload::new(vec![7u8; out], ImageMime::Jpeg))
    }
}

fn dropped(name: &str, len: usize) -> DroppedFile {
    DroppedFile {
        name: Some(name.to_string()),
        payload: Payload::new(vec![0u8; len], ImageMime::Png),
    }
}

fn sync_options() -> CompressionOptions {
    CompressionOptions {
        use_worker: false,
        ..CompressionOptions::default()
    }
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_fn(width, height, |x, y| {
        image_rs::Rgb([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8])
    });
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image)
        .write_to(&mut out, ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

#[tokio::test]
async fn drop_then_compress_reports_sizes_and_ratio() {
    let mut state = UploaderState::new();
    let compressor: Arc<dyn Compressor> = Arc::new(FakeCompressor {
        ratio_denominator: 4,
    });

    let request = state
        .handle_drop(Some(dropped("photo.png", 2_000_000)))
        .expect("drop starts a compression");
    assert!(state.is_compressing());

    let result = compression::run(compressor, request.payload, sync_options()).await;
    assert_eq!(state.finish_compression(request.token, result), Outcome::Applied);

    assert_eq!(state.original_size(), 2_000_000);
    assert_eq!(state.compressed_size(), 500_000);
    assert_eq!(state.compression_ratio(), "75.00");
    assert_eq!(state.status(), &CompressionStatus::Idle);
    assert_eq!(state.live_previews(), 2);

    let (payload, name) = state.download_target().expect("compressed result");
    assert_eq!(payload.len(), 500_000);
    assert_eq!(name, "compressed-image.jpg");
}

fn english() -> I18n {
    I18n::new(Some("en-US".to_string()), &Config::default())
}

#[tokio::test]
async fn panel_headings_show_sizes_and_saving() {
    let i18n = english();
    let mut state = UploaderState::new();
    let compressor: Arc<dyn Compressor> = Arc::new(FakeCompressor {
        ratio_denominator: 4,
    });

    let request = state
        .handle_drop(Some(dropped("photo.png", 2_000_000)))
        .expect("drop starts a compression");
    let result = compression::run(compressor, request.payload, sync_options()).await;
    state.finish_compression(request.token, result);

    assert_eq!(
        original_heading(&i18n, state.original_size()),
        "Original (1953.13 KB)"
    );
    assert_eq!(
        compressed_heading(&i18n, state.compressed_size()),
        "Compressed (488.28 KB)"
    );
    assert_eq!(
        savings_badge(state.original_size(), state.compressed_size()),
        "-75.00%"
    );
}

#[test]
fn empty_file_heading_shows_zero_kilobytes() {
    let i18n = english();
    let mut state = UploaderState::new();
    state
        .handle_drop(Some(dropped("empty.png", 0)))
        .expect("drop starts a compression");

    assert_eq!(
        original_heading(&i18n, state.original_size()),
        "Original (0.00 KB)"
    );
    assert_eq!(state.compression_ratio(), "0");
}

#[tokio::test]
async fn output_larger_than_input_gives_negative_ratio() {
    let mut state = UploaderState::new();
    let compressor: Arc<dyn Compressor> = Arc::new(FakeCompressor {
        ratio_denominator: 0,
    });

    let request = state
        .handle_drop(Some(dropped("tiny.png", 1_000)))
        .expect("drop starts a compression");
    let result = compression::run(compressor, request.payload, sync_options()).await;
    state.finish_compression(request.token, result);

    assert_eq!(state.compressed_size(), 2_000);
    assert_eq!(state.compression_ratio(), "-100.00");
}

#[test]
fn late_result_of_earlier_drop_is_discarded() {
    let mut state = UploaderState::new();

    let first = state
        .handle_drop(Some(dropped("first.png", 800)))
        .expect("first drop");
    let second = state
        .handle_drop(Some(dropped("second.png", 400)))
        .expect("second drop");

    let stale = Payload::new(vec![1u8; 100], ImageMime::Jpeg);
    assert_eq!(state.finish_compression(first.token, Ok(stale)), Outcome::Stale);
    assert!(state.compressed().is_none());
    assert_eq!(state.original_name(), Some("second.png"));
    assert!(state.is_compressing());

    let fresh = Payload::new(vec![1u8; 100], ImageMime::Jpeg);
    assert_eq!(state.finish_compression(second.token, Ok(fresh)), Outcome::Applied);
    assert_eq!(state.compression_ratio(), "75.00");
}

#[test]
fn delete_during_compression_keeps_widget_empty() {
    let mut state = UploaderState::new();
    let request = state
        .handle_drop(Some(dropped("photo.png", 800)))
        .expect("drop");

    state.delete();
    assert!(state.is_empty());
    assert_eq!(state.live_previews(), 0);

    let late = Payload::new(vec![1u8; 100], ImageMime::Jpeg);
    assert_eq!(state.finish_compression(request.token, Ok(late)), Outcome::Stale);
    assert!(state.is_empty());
    assert_eq!(state.live_previews(), 0);

    // Deleting twice is harmless.
    state.delete();
    assert!(state.is_empty());
}

#[test]
fn failure_keeps_original_visible() {
    let mut state = UploaderState::new();
    let request = state
        .handle_drop(Some(dropped("broken.png", 64)))
        .expect("drop");

    let outcome = state.finish_compression(
        request.token,
        Err(CompressionError::Decode("bad header".into())),
    );

    assert!(matches!(outcome, Outcome::Failed(CompressionError::Decode(_))));
    assert!(matches!(state.status(), CompressionStatus::Failed(_)));
    assert_eq!(state.original_size(), 64);
    assert!(state.compressed().is_none());
    assert_eq!(state.compressed_size(), 0);
    assert_eq!(state.live_previews(), 1);
}

#[test]
fn replacing_an_image_releases_previous_previews() {
    let mut state = UploaderState::new();
    for round in 0..5 {
        let request = state
            .handle_drop(Some(dropped(&format!("img-{round}.png"), 1_000)))
            .expect("drop");
        let out = Payload::new(vec![1u8; 10], ImageMime::Jpeg);
        state.finish_compression(request.token, Ok(out));
        assert_eq!(state.live_previews(), 2);
    }
}

#[test]
fn empty_drop_is_ignored() {
    let mut state = UploaderState::new();
    assert!(state.handle_drop(None).is_none());
    assert!(state.is_empty());
    assert_eq!(state.compression_ratio(), "0");
}

#[tokio::test]
async fn real_compressor_shrinks_large_png() {
    let bytes = png_bytes(1600, 1200);
    let original_len = bytes.len() as u64;
    let payload = Payload::new(bytes, ImageMime::Png);

    let compressed = compression::run(
        Arc::new(ImageCompressor::new()),
        payload,
        CompressionOptions::default(),
    )
    .await
    .expect("compression succeeds");

    assert_eq!(compressed.mime(), ImageMime::Jpeg);
    assert!(compressed.len() < original_len);

    let decoded = image_rs::load_from_memory(compressed.bytes()).expect("decodable output");
    assert!(decoded.width().max(decoded.height()) <= 1200);
}

#[tokio::test]
async fn real_compressor_rejects_garbage() {
    let payload = Payload::new(vec![0u8; 32], ImageMime::Png);
    let result = compression::run(
        Arc::new(ImageCompressor::new()),
        payload,
        CompressionOptions::default(),
    )
    .await;
    assert!(matches!(result, Err(CompressionError::Decode(_))));
}
