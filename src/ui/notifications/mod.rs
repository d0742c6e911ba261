// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! The application pushes [`Notification`]s into a [`Manager`]; a periodic
//! tick expires them and [`Toast::view_overlay`] renders the visible ones in
//! the bottom-right corner. Errors stay until dismissed.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
