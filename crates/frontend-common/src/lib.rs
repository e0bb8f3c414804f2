//! Page utilities shared by the Oceanview frontend pages
//!
//! Auth guard, logout, display-name lookup, date and currency formatting, and
//! toast notifications. Browser services sit behind small traits so the same
//! code runs in the page and in native tests; the `web-sys` implementations
//! live in [`browser`] and are only built for `wasm32`.

pub mod format;
pub mod logging;
pub mod navigation;
pub mod notification;
pub mod page;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use format::{format_currency, format_date};
pub use navigation::Navigator;
pub use notification::{Notification, NotificationKind, Notifier};
pub use page::PageUtilities;
