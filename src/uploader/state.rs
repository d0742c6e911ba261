// SPDX-License-Identifier: MPL-2.0
//! Upload state machine.
//!
//! ```text
//! EMPTY ──drop──▶ HAS_ORIGINAL ──compress ok──▶ HAS_BOTH
//!                 HAS_ORIGINAL ──compress err─▶ HAS_ORIGINAL (Failed)
//! HAS_ORIGINAL | HAS_BOTH ──delete──▶ EMPTY
//! HAS_BOTH ──drop──▶ HAS_ORIGINAL (new)
//! ```
//!
//! Compression results are fenced by [`RequestToken`]: only the result of
//! the most recently started compression is applied. Starting a new one or
//! deleting advances the fence, so late results from earlier requests are
//! discarded instead of overwriting newer state.
//!
//! File reads that run before a drop reaches the state machine have their
//! own fence: [`UploaderState::begin_load`] issues a load token when a path
//! is accepted, and only the most recent load may become the original.
//!
//! This module is free of Iced message plumbing so it can be driven directly
//! from tests.

use super::format;
use super::preview::{PreviewId, PreviewStore};
use crate::compression::{CompressionError, Payload};
use iced::widget::image;

/// Identifies one compression request. Later requests compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// An image held by the uploader together with its preview.
#[derive(Debug, Clone)]
pub struct Asset {
    payload: Payload,
    preview: PreviewId,
}

impl Asset {
    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.payload.len()
    }

    #[must_use]
    pub fn preview(&self) -> PreviewId {
        self.preview
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CompressionStatus {
    #[default]
    Idle,
    Compressing(RequestToken),
    Failed(CompressionError),
}

/// A file handed to the uploader after it was read from disk.
#[derive(Debug, Clone)]
pub struct DroppedFile {
    pub name: Option<String>,
    pub payload: Payload,
}

/// Work the caller must start after a drop.
#[derive(Debug, Clone)]
pub struct CompressionRequest {
    pub token: RequestToken,
    pub payload: Payload,
}

/// What happened to a finished compression.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied,
    Failed(CompressionError),
    /// A newer drop or a delete superseded the request.
    Stale,
}

#[derive(Debug, Default)]
pub struct UploaderState {
    original: Option<Asset>,
    original_name: Option<String>,
    compressed: Option<Asset>,
    status: CompressionStatus,
    latest_request: RequestToken,
    latest_load: RequestToken,
    previews: PreviewStore,
}

impl UploaderState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new original and returns the compression to start.
    ///
    /// `None` (an empty drop) leaves the state untouched.
    pub fn handle_drop(&mut self, file: Option<DroppedFile>) -> Option<CompressionRequest> {
        let file = file?;

        self.release_assets();

        let preview = self.previews.acquire(&file.payload);
        self.original = Some(Asset {
            payload: file.payload.clone(),
            preview,
        });
        self.original_name = file.name;

        self.latest_request = self.latest_request.next();
        self.status = CompressionStatus::Compressing(self.latest_request);

        tracing::debug!(
            token = self.latest_request.0,
            size = file.payload.len(),
            mime = %file.payload.mime(),
            "starting compression"
        );

        Some(CompressionRequest {
            token: self.latest_request,
            payload: file.payload,
        })
    }

    /// Starts reading a dropped or chosen file and returns its load token.
    ///
    /// Supersedes any read still in flight. The current original and any
    /// running compression are left alone until the read completes.
    pub fn begin_load(&mut self) -> RequestToken {
        self.latest_load = self.latest_load.next();
        self.latest_load
    }

    /// Whether `token` belongs to the most recently started load.
    #[must_use]
    pub fn is_current_load(&self, token: RequestToken) -> bool {
        token == self.latest_load
    }

    /// Hands a finished read to [`Self::handle_drop`] unless a newer load or
    /// a delete superseded it.
    pub fn finish_load(
        &mut self,
        token: RequestToken,
        file: Option<DroppedFile>,
    ) -> Option<CompressionRequest> {
        if !self.is_current_load(token) {
            tracing::debug!(
                token = token.0,
                latest = self.latest_load.0,
                "discarding stale file read"
            );
            return None;
        }
        self.handle_drop(file)
    }

    /// Applies the result of the compression identified by `token`.
    pub fn finish_compression(
        &mut self,
        token: RequestToken,
        result: Result<Payload, CompressionError>,
    ) -> Outcome {
        if token != self.latest_request || self.original.is_none() {
            tracing::debug!(
                token = token.0,
                latest = self.latest_request.0,
                "discarding stale compression result"
            );
            return Outcome::Stale;
        }

        match result {
            Ok(payload) => {
                if let Some(previous) = self.compressed.take() {
                    self.previews.release(previous.preview);
                }
                let preview = self.previews.acquire(&payload);
                tracing::info!(
                    original = self.original_size(),
                    compressed = payload.len(),
                    ratio = %format::compression_ratio(self.original_size(), payload.len()),
                    "compression finished"
                );
                self.compressed = Some(Asset { payload, preview });
                self.status = CompressionStatus::Idle;
                Outcome::Applied
            }
            Err(err) => {
                tracing::error!(token = token.0, "compression failed: {err}");
                self.status = CompressionStatus::Failed(err.clone());
                Outcome::Failed(err)
            }
        }
    }

    /// Returns to the empty state, releasing both previews.
    ///
    /// Also advances both fences so neither an in-flight read nor an
    /// in-flight compression can repopulate the widget.
    pub fn delete(&mut self) {
        self.release_assets();
        self.original_name = None;
        self.status = CompressionStatus::Idle;
        self.latest_request = self.latest_request.next();
        self.latest_load = self.latest_load.next();
    }

    /// Compressed payload and the file name to save it under.
    #[must_use]
    pub fn download_target(&self) -> Option<(Payload, String)> {
        self.compressed.as_ref().map(|asset| {
            (
                asset.payload.clone(),
                format::download_file_name(asset.payload.mime()),
            )
        })
    }

    fn release_assets(&mut self) {
        for asset in [self.original.take(), self.compressed.take()]
            .into_iter()
            .flatten()
        {
            self.previews.release(asset.preview);
        }
    }

    #[must_use]
    pub fn original(&self) -> Option<&Asset> {
        self.original.as_ref()
    }

    #[must_use]
    pub fn original_name(&self) -> Option<&str> {
        self.original_name.as_deref()
    }

    #[must_use]
    pub fn compressed(&self) -> Option<&Asset> {
        self.compressed.as_ref()
    }

    /// Original byte length, `0` when empty.
    #[must_use]
    pub fn original_size(&self) -> u64 {
        self.original.as_ref().map_or(0, Asset::size)
    }

    /// Compressed byte length, `0` until a compression succeeded.
    #[must_use]
    pub fn compressed_size(&self) -> u64 {
        self.compressed.as_ref().map_or(0, Asset::size)
    }

    #[must_use]
    pub fn compression_ratio(&self) -> String {
        format::compression_ratio(self.original_size(), self.compressed_size())
    }

    #[must_use]
    pub fn status(&self) -> &CompressionStatus {
        &self.status
    }

    #[must_use]
    pub fn is_compressing(&self) -> bool {
        matches!(self.status, CompressionStatus::Compressing(_))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.original.is_none()
    }

    #[must_use]
    pub fn latest_request(&self) -> RequestToken {
        self.latest_request
    }

    #[must_use]
    pub fn preview(&self, asset: &Asset) -> Option<&image::Handle> {
        self.previews.get(asset.preview)
    }

    /// Number of previews currently held.
    #[must_use]
    pub fn live_previews(&self) -> usize {
        self.previews.live_count()
    }
}
