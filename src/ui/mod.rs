// SPDX-License-Identifier: MPL-2.0
//! Shared user interface infrastructure.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Button and container styles
//! - [`theming`] - Light/Dark theme mode and its color scheme
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
