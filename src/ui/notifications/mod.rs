// SPDX-License-Identifier: MPL-2.0
//! Non-blocking toasts for backend failures and settings problems. Rejected
//! files get a modal alert instead, see `upload_area::show_rejection_alert`.
//!
//! Success and info toasts disappear after a few seconds, warnings stay a
//! little longer and errors remain until closed.
//!
//! ```ignore
//! let mut toasts = Manager::new();
//! toasts.push(Notification::warning("notification-upload-error-network").with_arg("detail", "refused"));
//! let layer = Toast::view_overlay(&toasts, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
