//! Notification module for gifscrub
//!
//! Transient on-screen messages: config warnings and animation load failures
//! are surfaced here in addition to the log.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType};
