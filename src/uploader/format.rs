// SPDX-License-Identifier: MPL-2.0
//! Display formatting for sizes and the compression ratio.
//!
//! Two-decimal values round half away from zero (`1953.125` → `1953.13`),
//! which `format!("{:.2}")` alone does not guarantee.

use crate::compression::ImageMime;

/// Base name of the downloaded file.
pub const DOWNLOAD_BASE_NAME: &str = "compressed-image";

fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // Folds -0.0 into 0.0 so tiny growth does not print as "-0.00".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Percentage saved, already rounded; `None` without an original.
fn ratio_value(original: u64, compressed: u64) -> Option<f64> {
    if original == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = (1.0 - compressed as f64 / original as f64) * 100.0;
    Some(round2(ratio))
}

/// Byte count as kilobytes with two decimals, e.g. `1953.13`.
#[must_use]
pub fn format_kb(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let kb = bytes as f64 / 1024.0;
    format!("{:.2}", round2(kb))
}

/// Percentage saved by compression with two decimals.
///
/// Returns `"0"` when `original` is zero. Negative when the output grew.
#[must_use]
pub fn compression_ratio(original: u64, compressed: u64) -> String {
    match ratio_value(original, compressed) {
        Some(ratio) => format!("{ratio:.2}"),
        None => "0".to_string(),
    }
}

/// Badge shown next to the compressed size: `-75.00%` for a saving,
/// `+12.50%` when the output is larger than the input, unsigned when
/// nothing changed.
#[must_use]
pub fn savings_badge(original: u64, compressed: u64) -> String {
    match ratio_value(original, compressed) {
        None => "0%".to_string(),
        Some(ratio) if ratio > 0.0 => format!("-{ratio:.2}%"),
        Some(ratio) if ratio < 0.0 => format!("+{:.2}%", -ratio),
        Some(_) => "0.00%".to_string(),
    }
}

/// File name offered in the save dialog, with the extension of the output type.
#[must_use]
pub fn download_file_name(mime: ImageMime) -> String {
    format!("{DOWNLOAD_BASE_NAME}.{}", mime.extension())
}
