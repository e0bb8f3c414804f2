//! Utilities every page script uses

use crate::format;
use crate::navigation::Navigator;
use crate::notification::{Notification, NotificationKind, Notifier};
use oceanview_core::{FrontendConfig, SessionStore};
use std::rc::Rc;

/// Name shown when the session has neither a name nor an email
pub const FALLBACK_USER_NAME: &str = "Staff";

/// Auth guard, logout and display helpers for a page
///
/// Shares its session store with the page's `ApiClient`.
pub struct PageUtilities<N, T> {
    session: Rc<dyn SessionStore>,
    navigator: N,
    notifier: T,
    config: FrontendConfig,
}

impl<N: Navigator, T: Notifier> PageUtilities<N, T> {
    /// Create page utilities with the default configuration
    pub fn new(session: Rc<dyn SessionStore>, navigator: N, notifier: T) -> Self {
        Self::with_config(session, navigator, notifier, FrontendConfig::default())
    }

    pub fn with_config(
        session: Rc<dyn SessionStore>,
        navigator: N,
        notifier: T,
        config: FrontendConfig,
    ) -> Self {
        Self {
            session,
            navigator,
            notifier,
            config,
        }
    }

    /// Send the user to the login page unless a token is stored
    ///
    /// Returns whether the page may continue.
    pub fn require_auth(&self) -> bool {
        if self.session.auth_token().is_some() {
            return true;
        }

        tracing::info!(login_page = %self.config.login_page, "No auth token, redirecting to login");
        self.navigator.navigate(&self.config.login_page);
        false
    }

    /// Forget the session and go back to the login page
    pub fn logout(&self) {
        if let Err(e) = self.session.clear() {
            tracing::warn!(error = %e, "Failed to clear session storage");
        }

        tracing::info!("Logged out");
        self.navigator.navigate(&self.config.login_page);
    }

    /// Display name, then email, then a fixed fallback
    pub fn user_name(&self) -> String {
        self.session
            .user_name()
            .or_else(|| self.session.user_email())
            .unwrap_or_else(|| FALLBACK_USER_NAME.to_string())
    }

    /// See [`format::format_date`]
    pub fn format_date(&self, date: Option<&str>) -> String {
        format::format_date(date)
    }

    /// See [`format::format_currency`]
    pub fn format_currency(&self, amount: f64) -> String {
        format::format_currency(amount)
    }

    /// Show a toast that disappears after the configured delay
    pub fn show_notification(&self, message: impl Into<String>, kind: impl Into<NotificationKind>) {
        let notification = Notification::new(message, kind.into());
        tracing::debug!(kind = %notification.kind, "Showing notification");
        self.notifier
            .notify(&notification, self.config.notification_duration_ms);
    }
}
