// SPDX-License-Identifier: MPL-2.0
//! Uploader component: Iced messages, effects and async tasks around
//! [`UploaderState`].

use super::drop_zone::{AcceptedFile, DropZone};
use super::state::{DroppedFile, Outcome, RequestToken, UploaderState};
use crate::compression::{self, CompressionError, CompressionOptions, Compressor, ImageMime, Payload};
use crate::error::Error;
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Messages emitted by the uploader or routed to it by the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// The host finished booting; the widget may render.
    Mounted,
    FileHovered,
    FilesHoveredLeft,
    /// A path dropped onto the window (one message per file).
    FileDropped(PathBuf),
    /// A path picked through the browse dialog or given on the command line.
    FileChosen(PathBuf),
    BrowseRequested,
    /// A file read finished. `token` is the load token issued when the path
    /// was accepted.
    FileLoaded {
        token: RequestToken,
        result: Result<DroppedFile, Error>,
    },
    CompressionFinished {
        token: RequestToken,
        result: Result<Payload, CompressionError>,
    },
    DownloadRequested,
    DeleteRequested,
    SetTheme(ThemeMode),
}

/// Side effects the application performs on behalf of the uploader.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    OpenFileDialog,
    Download {
        payload: Payload,
        suggested_name: String,
    },
    SetTheme(ThemeMode),
    ShowError {
        /// The i18n key for the notification message.
        key: &'static str,
    },
}

pub struct State {
    uploader: UploaderState,
    drop_zone: DropZone,
    compressor: Arc<dyn Compressor>,
    options: CompressionOptions,
    ready: bool,
}

impl State {
    #[must_use]
    pub fn new(compressor: Arc<dyn Compressor>, options: CompressionOptions) -> Self {
        Self {
            uploader: UploaderState::new(),
            drop_zone: DropZone::new(),
            compressor,
            options,
            ready: false,
        }
    }

    #[must_use]
    pub fn uploader(&self) -> &UploaderState {
        &self.uploader
    }

    #[must_use]
    pub fn options(&self) -> &CompressionOptions {
        &self.options
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.drop_zone.is_hovering()
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Mounted => {
                self.ready = true;
                (Effect::None, Task::none())
            }
            Message::FileHovered => {
                self.drop_zone.hover();
                (Effect::None, Task::none())
            }
            Message::FilesHoveredLeft => {
                self.drop_zone.hover_left();
                (Effect::None, Task::none())
            }
            Message::FileDropped(path) => match self.drop_zone.accept(&path, Instant::now()) {
                Some(file) => (Effect::None, self.load_file(file)),
                None => (Effect::None, Task::none()),
            },
            Message::FileChosen(path) => match ImageMime::from_path(&path) {
                Some(mime) => (Effect::None, self.load_file(AcceptedFile { path, mime })),
                None => {
                    tracing::warn!(path = %path.display(), "unsupported file type");
                    (
                        Effect::ShowError {
                            key: "notification-unsupported-file",
                        },
                        Task::none(),
                    )
                }
            },
            Message::BrowseRequested => (Effect::OpenFileDialog, Task::none()),
            Message::FileLoaded {
                token,
                result: Ok(file),
            } => {
                let task = self.start_compression(token, file);
                (Effect::None, task)
            }
            Message::FileLoaded {
                token,
                result: Err(err),
            } => {
                if !self.uploader.is_current_load(token) {
                    tracing::debug!("ignoring read error of superseded file: {err}");
                    return (Effect::None, Task::none());
                }
                tracing::warn!("cannot read dropped file: {err}");
                (
                    Effect::ShowError {
                        key: "notification-file-read-error",
                    },
                    Task::none(),
                )
            }
            Message::CompressionFinished { token, result } => {
                match self.uploader.finish_compression(token, result) {
                    Outcome::Failed(err) => (
                        Effect::ShowError {
                            key: err.i18n_key(),
                        },
                        Task::none(),
                    ),
                    Outcome::Applied | Outcome::Stale => (Effect::None, Task::none()),
                }
            }
            Message::DownloadRequested => match self.uploader.download_target() {
                Some((payload, suggested_name)) => (
                    Effect::Download {
                        payload,
                        suggested_name,
                    },
                    Task::none(),
                ),
                None => (Effect::None, Task::none()),
            },
            Message::DeleteRequested => {
                self.uploader.delete();
                (Effect::None, Task::none())
            }
            Message::SetTheme(mode) => (Effect::SetTheme(mode), Task::none()),
        }
    }

    fn load_file(&mut self, file: AcceptedFile) -> Task<Message> {
        let token = self.uploader.begin_load();
        Task::perform(read_file(file.path, file.mime), move |result| {
            Message::FileLoaded { token, result }
        })
    }

    fn start_compression(&mut self, token: RequestToken, file: DroppedFile) -> Task<Message> {
        let Some(request) = self.uploader.finish_load(token, Some(file)) else {
            return Task::none();
        };

        let token = request.token;
        Task::perform(
            compression::run(Arc::clone(&self.compressor), request.payload, self.options),
            move |result| Message::CompressionFinished { token, result },
        )
    }
}

async fn read_file(path: PathBuf, mime: ImageMime) -> Result<DroppedFile, Error> {
    let bytes = tokio::fs::read(&path).await?;
    Ok(DroppedFile {
        name: file_name(&path),
        payload: Payload::new(bytes, mime),
    })
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
