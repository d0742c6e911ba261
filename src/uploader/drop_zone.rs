// SPDX-License-Identifier: MPL-2.0
//! Filtering of files dropped on the window.
//!
//! The windowing layer reports a multi-file drop as one event per file. The
//! drop zone keeps the first image of such a gesture and ignores the rest
//! until the pointer hovers again or [`MULTI_DROP_WINDOW`] has elapsed.

use crate::compression::ImageMime;
use crate::config::MULTI_DROP_WINDOW_MS;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Time after an accepted drop during which further drops belong to the same gesture.
pub const MULTI_DROP_WINDOW: Duration = Duration::from_millis(MULTI_DROP_WINDOW_MS);

/// A path that passed the image filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedFile {
    pub path: PathBuf,
    pub mime: ImageMime,
}

#[derive(Debug, Default)]
pub struct DropZone {
    hovering: bool,
    last_accepted: Option<Instant>,
}

impl DropZone {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A file is dragged over the window; a new gesture begins.
    pub fn hover(&mut self) {
        self.hovering = true;
        self.last_accepted = None;
    }

    /// The dragged files left the window without being dropped.
    pub fn hover_left(&mut self) {
        self.hovering = false;
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Decides whether a dropped path reaches the uploader.
    pub fn accept(&mut self, path: &Path, now: Instant) -> Option<AcceptedFile> {
        self.hovering = false;

        if let Some(previous) = self.last_accepted {
            if now.saturating_duration_since(previous) < MULTI_DROP_WINDOW {
                tracing::debug!(path = %path.display(), "ignoring extra file of drop gesture");
                return None;
            }
        }

        let Some(mime) = ImageMime::from_path(path) else {
            tracing::debug!(path = %path.display(), "ignoring non-image drop");
            return None;
        };

        self.last_accepted = Some(now);
        Some(AcceptedFile {
            path: path.to_path_buf(),
            mime,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_image_extensions_only() {
        let mut zone = DropZone::new();
        let now = Instant::now();
        assert!(zone.accept(Path::new("/tmp/notes.txt"), now).is_none());

        let accepted = zone
            .accept(Path::new("/tmp/photo.JPEG"), now)
            .expect("image should be accepted");
        assert_eq!(accepted.mime, ImageMime::Jpeg);
        assert_eq!(accepted.path, PathBuf::from("/tmp/photo.JPEG"));
    }

    #[test]
    fn rejected_file_does_not_open_the_gesture() {
        let mut zone = DropZone::new();
        let now = Instant::now();
        assert!(zone.accept(Path::new("/tmp/readme.md"), now).is_none());
        assert!(zone.accept(Path::new("/tmp/b.png"), now).is_some());
    }

    #[test]
    fn keeps_first_file_of_a_gesture() {
        let mut zone = DropZone::new();
        let now = Instant::now();
        zone.hover();
        assert!(zone.accept(Path::new("/tmp/a.png"), now).is_some());
        assert!(zone
            .accept(Path::new("/tmp/b.png"), now + Duration::from_millis(5))
            .is_none());
    }

    #[test]
    fn new_hover_starts_a_new_gesture() {
        let mut zone = DropZone::new();
        let now = Instant::now();
        assert!(zone.accept(Path::new("/tmp/a.png"), now).is_some());
        zone.hover();
        assert!(zone.is_hovering());
        assert!(zone
            .accept(Path::new("/tmp/b.png"), now + Duration::from_millis(5))
            .is_some());
        assert!(!zone.is_hovering());
    }

    #[test]
    fn gesture_closes_after_window() {
        let mut zone = DropZone::new();
        let now = Instant::now();
        assert!(zone.accept(Path::new("/tmp/a.png"), now).is_some());
        assert!(zone
            .accept(Path::new("/tmp/b.png"), now + MULTI_DROP_WINDOW)
            .is_some());
    }
}
