// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the uploader widget, localization, the theme and
//! the toast queue, and translates uploader effects into side effects like
//! native dialogs, file writes and config persistence.

mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::compression::{CompressionOptions, ImageCompressor};
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::uploader;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    uploader: uploader::State,
    theme_mode: ThemeMode,
    /// Persisted application state (last open/save directories).
    app_state: persisted_state::AppState,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("has_original", &!self.uploader.uploader().is_empty())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; the flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            uploader: uploader::State::new(
                Arc::new(ImageCompressor::new()),
                CompressionOptions::default(),
            ),
            theme_mode: ThemeMode::default(),
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let options = CompressionOptions::from_config(&config.compression);
        tracing::info!(?options, locale = %i18n.current_locale(), "starting");

        let (app_state, state_warning) = persisted_state::AppState::load();

        let mut app = App {
            i18n,
            uploader: uploader::State::new(Arc::new(ImageCompressor::new()), options),
            theme_mode: config
                .general
                .theme_mode
                .unwrap_or_else(ThemeMode::from_system),
            app_state,
            notifications: notifications::Manager::new(),
        };

        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications.push(Notification::warning(key));
        }

        let mut tasks = vec![Task::done(Message::Uploader(uploader::Message::Mounted))];
        if let Some(path) = flags.file_path {
            tasks.push(Task::done(Message::Uploader(
                uploader::Message::FileChosen(PathBuf::from(path)),
            )));
        }

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.uploader.uploader().original_name() {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            uploader: &mut self.uploader,
            theme_mode: &mut self.theme_mode,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Uploader(message) => update::handle_uploader_message(&mut ctx, message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::OpenFileDialogResult(path) => {
                update::handle_open_file_dialog_result(&mut ctx, path)
            }
            Message::SaveDialogResult { path, payload } => {
                update::handle_save_dialog_result(path, payload)
            }
            Message::DownloadWritten(result) => update::handle_download_written(&mut ctx, result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            uploader: &self.uploader,
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
        })
    }
}
