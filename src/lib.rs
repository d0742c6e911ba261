// SPDX-License-Identifier: MPL-2.0
//! `iced_shrink` is a drag-and-drop image compressor built with the Iced GUI
//! framework.
//!
//! Drop (or browse for) an image and the uploader shows the original next to
//! a compressed copy, with both sizes and the space saved. The compressed
//! copy can be saved to disk or discarded.
//!
//! # Modules
//!
//! - [`app`] - Application root: update loop, dialogs, persistence
//! - [`uploader`] - The uploader widget and its state machine
//! - [`compression`] - Payloads, compression policy and the encoder
//! - [`config`] - `settings.toml` loading and saving
//! - [`i18n`] - Fluent-based localization
//! - [`ui`] - Design tokens, styles, theming and toasts

#![doc(html_root_url = "https://docs.rs/iced_shrink/0.1.0")]

pub mod app;
pub mod compression;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
pub mod uploader;
