// SPDX-License-Identifier: MPL-2.0
//! Drag-and-drop image uploader widget.
//!
//! A dropped (or browsed) image is read from disk, handed to the
//! [`Compressor`](crate::compression::Compressor) and shown next to its
//! compressed version with both sizes and the saving. The widget owns the
//! upload state; the host owns the theme and performs the [`Effect`]s the
//! widget returns (dialogs, file writes, toasts).
//!
//! - [`state`]: pure state machine with the request-token fence
//! - [`preview`]: displayable image handles with explicit release
//! - [`drop_zone`]: image filter and multi-file gesture guard
//! - [`format`]: size and ratio formatting

pub mod component;
pub mod drop_zone;
pub mod format;
pub mod preview;
pub mod state;
pub mod view;

pub use component::{Effect, Message, State};
pub use state::{CompressionStatus, DroppedFile, Outcome, RequestToken, UploaderState};
pub use view::ViewContext;
