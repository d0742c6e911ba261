// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Compression**: Target size, edge length and quality of the output
//! - **Drop Zone**: Multi-file drop handling

// ==========================================================================
// Compression Defaults
// ==========================================================================

/// Default maximum output size in megabytes.
pub const DEFAULT_MAX_SIZE_MB: f32 = 1.5;

/// Smallest accepted target size in megabytes.
pub const MIN_MAX_SIZE_MB: f32 = 0.05;

/// Largest accepted target size in megabytes.
pub const MAX_MAX_SIZE_MB: f32 = 50.0;

/// Default limit for the longest image edge, in pixels.
pub const DEFAULT_MAX_WIDTH_OR_HEIGHT: u32 = 1200;

/// Smallest accepted longest-edge limit, in pixels.
pub const MIN_MAX_WIDTH_OR_HEIGHT: u32 = 16;

/// Largest accepted longest-edge limit, in pixels.
pub const MAX_MAX_WIDTH_OR_HEIGHT: u32 = 16_384;

/// Default encoder quality (0.0 to 1.0).
pub const DEFAULT_INITIAL_QUALITY: f32 = 0.8;

/// Lowest quality the encoder will step down to.
pub const MIN_QUALITY: f32 = 0.1;

/// Highest accepted quality.
pub const MAX_QUALITY: f32 = 1.0;

/// Run compression on a blocking worker thread by default.
pub const DEFAULT_USE_WORKER: bool = true;

/// Only trade quality for size, never resolution, by default.
pub const DEFAULT_ALWAYS_KEEP_RESOLUTION: bool = true;

// ==========================================================================
// Drop Zone Defaults
// ==========================================================================

/// Window (in milliseconds) during which further dropped files are treated
/// as part of the same multi-file drop.
pub const MULTI_DROP_WINDOW_MS: u64 = 500;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_SIZE_MB > 0.0);
    assert!(DEFAULT_MAX_SIZE_MB >= MIN_MAX_SIZE_MB);
    assert!(DEFAULT_MAX_SIZE_MB <= MAX_MAX_SIZE_MB);
    assert!(DEFAULT_MAX_WIDTH_OR_HEIGHT >= MIN_MAX_WIDTH_OR_HEIGHT);
    assert!(DEFAULT_MAX_WIDTH_OR_HEIGHT <= MAX_MAX_WIDTH_OR_HEIGHT);
    assert!(DEFAULT_INITIAL_QUALITY >= MIN_QUALITY);
    assert!(DEFAULT_INITIAL_QUALITY <= MAX_QUALITY);
};
