// SPDX-License-Identifier: MPL-2.0
//! `image`-crate backed compressor.
//!
//! Decodes the payload, caps the longest edge, then re-encodes as JPEG (or
//! PNG when the source carries transparency). While the output is above the
//! target size the JPEG quality is stepped down; once quality is exhausted
//! the image is shrunk, unless the policy asks to keep the resolution.

use super::{CompressionError, CompressionOptions, Compressor, ImageMime, Payload};
use crate::config::MIN_QUALITY;
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::codecs::png::{self, PngEncoder};
use image_rs::imageops::FilterType;
use image_rs::{DynamicImage, ExtendedColorType, GenericImageView, ImageEncoder};

/// Quality decrement applied between passes.
const QUALITY_STEP: f32 = 0.05;

/// Scale factor applied to both edges when quality alone is not enough.
const SHRINK_FACTOR: f32 = 0.9;

/// Upper bound on encode passes for a single payload.
const MAX_PASSES: u32 = 32;

/// Production compressor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCompressor;

impl ImageCompressor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Compressor for ImageCompressor {
    fn compress(
        &self,
        payload: &Payload,
        options: &CompressionOptions,
    ) -> Result<Payload, CompressionError> {
        if payload.is_empty() {
            return Err(CompressionError::EmptyInput);
        }

        let decoded = image_rs::load_from_memory(payload.bytes())
            .map_err(|err| CompressionError::Decode(err.to_string()))?;

        let mut image = limit_longest_edge(decoded, options.max_width_or_height);
        let output_mime = output_mime_for(&image);
        let limit = options.max_size_bytes();

        let mut quality = options.initial_quality;
        let mut encoded = encode(&image, output_mime, quality)?;
        let mut passes = 1;

        while encoded.len() as u64 > limit && passes < MAX_PASSES {
            if output_mime == ImageMime::Jpeg && quality - QUALITY_STEP >= MIN_QUALITY {
                quality -= QUALITY_STEP;
            } else if options.always_keep_resolution {
                break;
            } else {
                let Some(smaller) = shrink(&image) else {
                    break;
                };
                image = smaller;
            }

            encoded = encode(&image, output_mime, quality)?;
            passes += 1;
        }

        let (width, height) = image.dimensions();
        tracing::debug!(
            input = payload.len(),
            output = encoded.len(),
            width,
            height,
            quality,
            passes,
            mime = %output_mime,
            "image compressed"
        );

        Ok(Payload::new(encoded, output_mime))
    }
}

/// Downscales so that neither edge exceeds `max_edge`, keeping the aspect ratio.
fn limit_longest_edge(image: DynamicImage, max_edge: u32) -> DynamicImage {
    let (width, height) = image.dimensions();
    if width.max(height) <= max_edge {
        return image;
    }
    image.resize(max_edge, max_edge, FilterType::Lanczos3)
}

/// JPEG cannot carry transparency, so alpha sources stay PNG.
fn output_mime_for(image: &DynamicImage) -> ImageMime {
    if image.color().has_alpha() {
        ImageMime::Png
    } else {
        ImageMime::Jpeg
    }
}

/// Returns a copy scaled by [`SHRINK_FACTOR`], or `None` once the image
/// cannot get any smaller.
fn shrink(image: &DynamicImage) -> Option<DynamicImage> {
    let (width, height) = image.dimensions();
    let scale = |edge: u32| {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scaled = (edge as f32 * SHRINK_FACTOR).floor() as u32;
        scaled.max(1)
    };
    let (new_width, new_height) = (scale(width), scale(height));
    if new_width == width && new_height == height {
        return None;
    }
    Some(image.resize_exact(new_width, new_height, FilterType::Lanczos3))
}

/// Maps a 0.0–1.0 quality to the encoder's 1–100 scale.
fn jpeg_quality(quality: f32) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled = (quality * 100.0).round().clamp(1.0, 100.0) as u8;
    scaled
}

fn encode(
    image: &DynamicImage,
    mime: ImageMime,
    quality: f32,
) -> Result<Vec<u8>, CompressionError> {
    let (width, height) = image.dimensions();
    let mut buffer = Vec::new();

    let result = match mime {
        ImageMime::Png => {
            let rgba = image.to_rgba8();
            PngEncoder::new_with_quality(
                &mut buffer,
                png::CompressionType::Best,
                png::FilterType::Adaptive,
            )
            .write_image(rgba.as_raw(), width, height, ExtendedColorType::Rgba8)
        }
        _ => {
            let rgb = image.to_rgb8();
            JpegEncoder::new_with_quality(&mut buffer, jpeg_quality(quality)).write_image(
                rgb.as_raw(),
                width,
                height,
                ExtendedColorType::Rgb8,
            )
        }
    };

    result.map_err(|err| CompressionError::Encode(err.to_string()))?;
    Ok(buffer)
}
