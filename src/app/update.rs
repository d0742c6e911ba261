// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! The uploader reports what it needs through [`uploader::Effect`]; this
//! module performs those effects: native dialogs, writing the compressed
//! file, theme changes and toasts.

use super::persisted_state::AppState;
use super::{persistence, Message};
use crate::compression::{ImageMime, Payload};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::uploader;
use iced::Task;
use std::path::PathBuf;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub uploader: &'a mut uploader::State,
    pub theme_mode: &'a mut ThemeMode,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_uploader_message(
    ctx: &mut UpdateContext<'_>,
    message: uploader::Message,
) -> Task<Message> {
    let (effect, task) = ctx.uploader.handle_message(message);
    let task = task.map(Message::Uploader);
    let effect_task = handle_uploader_effect(ctx, effect);
    Task::batch([task, effect_task])
}

fn handle_uploader_effect(ctx: &mut UpdateContext<'_>, effect: uploader::Effect) -> Task<Message> {
    match effect {
        uploader::Effect::None => Task::none(),
        uploader::Effect::OpenFileDialog => open_file_dialog(
            ctx.app_state.last_open_directory.clone(),
            ctx.i18n.tr("dialog-open-title"),
            ctx.i18n.tr("dialog-filter-images"),
        ),
        uploader::Effect::Download {
            payload,
            suggested_name,
        } => save_file_dialog(
            payload,
            suggested_name,
            ctx.app_state.last_save_directory.clone(),
            ctx.i18n.tr("dialog-save-title"),
        ),
        uploader::Effect::SetTheme(mode) => {
            *ctx.theme_mode = mode;
            if let Some(key) = persistence::persist_theme(mode) {
                ctx.notifications.push(Notification::warning(key));
            }
            Task::none()
        }
        uploader::Effect::ShowError { key } => {
            ctx.notifications.push(Notification::error(key));
            Task::none()
        }
    }
}

/// Opens the browse dialog, filtered to the accepted image types.
fn open_file_dialog(
    last_directory: Option<PathBuf>,
    title: String,
    filter_name: String,
) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter(&filter_name, &ImageMime::EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

pub fn handle_open_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };

    ctx.app_state.remember_open_location(&path);
    persist_app_state(ctx);

    handle_uploader_message(ctx, uploader::Message::FileChosen(path))
}

/// Opens the save dialog for the compressed image.
fn save_file_dialog(
    payload: Payload,
    suggested_name: String,
    last_directory: Option<PathBuf>,
    title: String,
) -> Task<Message> {
    let extension = payload.mime().extension();

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(&title)
                .set_file_name(&suggested_name)
                .add_filter(extension.to_uppercase(), &[extension]);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            let path = dialog.save_file().await.map(|h| h.path().to_path_buf());
            (path, payload)
        },
        |(path, payload)| Message::SaveDialogResult { path, payload },
    )
}

pub fn handle_save_dialog_result(path: Option<PathBuf>, payload: Payload) -> Task<Message> {
    let Some(path) = path else {
        tracing::debug!("download cancelled");
        return Task::none();
    };

    Task::perform(write_payload(path, payload), Message::DownloadWritten)
}

async fn write_payload(path: PathBuf, payload: Payload) -> Result<PathBuf, Error> {
    tokio::fs::write(&path, payload.bytes()).await?;
    Ok(path)
}

pub fn handle_download_written(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    match result {
        Ok(path) => {
            tracing::info!(path = %path.display(), "compressed image saved");
            ctx.app_state.remember_save_location(&path);
            persist_app_state(ctx);
            ctx.notifications.push(
                Notification::success("notification-download-success")
                    .with_arg("path", path.display().to_string()),
            );
        }
        Err(err) => {
            tracing::warn!("cannot write compressed image: {err}");
            ctx.notifications
                .push(Notification::error("notification-download-error"));
        }
    }
    Task::none()
}

fn persist_app_state(ctx: &mut UpdateContext<'_>) {
    if let Some(key) = persistence::persist_app_state(ctx.app_state) {
        ctx.notifications.push(Notification::warning(key));
    }
}
