// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::compression::Payload;
use crate::error::Error;
use crate::ui::notifications;
use crate::uploader;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded; the remaining variants carry results of host-side tasks.
#[derive(Debug, Clone)]
pub enum Message {
    Uploader(uploader::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the browse dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// Result from the save dialog, with the bytes to write.
    SaveDialogResult {
        path: Option<PathBuf>,
        payload: Payload,
    },
    /// The compressed image was written (or not).
    DownloadWritten(Result<PathBuf, Error>),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Image to load on startup, as if it had been dropped.
    pub file_path: Option<String>,
}
