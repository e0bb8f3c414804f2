//! Browser implementations backed by `web-sys`

use crate::navigation::Navigator;
use crate::notification::{Notification, Notifier};
use crate::page::PageUtilities;
use gloo::timers::callback::Timeout;
use oceanview_core::{CoreError, CoreResult, FrontendConfig, SessionStore};
use oceanview_http::{ApiClient, ClientError};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::Storage;

fn storage_error(err: JsValue) -> CoreError {
    CoreError::storage(format!("{err:?}"))
}

/// The tab's `window.sessionStorage`
#[derive(Clone)]
pub struct BrowserSessionStorage {
    storage: Storage,
}

impl BrowserSessionStorage {
    pub fn new() -> CoreResult<Self> {
        let storage = web_sys::window()
            .and_then(|w| w.session_storage().ok().flatten())
            .ok_or_else(|| CoreError::storage("sessionStorage is not available"))?;
        Ok(Self { storage })
    }
}

impl SessionStore for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.storage.set_item(key, value).map_err(storage_error)
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.storage.remove_item(key).map_err(storage_error)
    }

    fn clear(&self) -> CoreResult<()> {
        self.storage.clear().map_err(storage_error)
    }
}

/// Navigates by assigning `window.location.href`
#[derive(Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, target: &str) {
        if let Err(err) = gloo::utils::window().location().set_href(target) {
            tracing::warn!(href = target, error = ?err, "Navigation failed");
        }
    }
}

/// Appends toasts to `document.body` and removes them on a timer
#[derive(Clone, Copy, Default)]
pub struct DomNotifier;

impl DomNotifier {
    fn render(notification: &Notification, duration_ms: u32) -> Result<(), JsValue> {
        let element = gloo::utils::document().create_element("div")?;
        element.set_class_name(&notification.class_name());
        element.set_text_content(Some(&notification.message));
        element.set_attribute("style", &notification.style())?;
        gloo::utils::body().append_child(&element)?;

        // Fire and forget; the timer owns the element until it fires.
        Timeout::new(duration_ms, move || element.remove()).forget();
        Ok(())
    }
}

impl Notifier for DomNotifier {
    fn notify(&self, notification: &Notification, duration_ms: u32) {
        if let Err(err) = Self::render(notification, duration_ms) {
            tracing::warn!(error = ?err, "Failed to render notification");
        }
    }
}

/// Origin of the current page, or empty for relative URLs
pub fn origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

/// The tab's session storage, shared between client and page utilities
pub fn session_storage() -> CoreResult<Rc<dyn SessionStore>> {
    Ok(Rc::new(BrowserSessionStorage::new()?))
}

/// API client for the current origin
pub fn create_api_client(
    session: Rc<dyn SessionStore>,
    config: &FrontendConfig,
) -> Result<ApiClient, ClientError> {
    ApiClient::builder()
        .origin(origin())
        .session(session)
        .config(config)
        .build()
}

/// Page utilities wired to the real browser
pub fn page_utilities(
    session: Rc<dyn SessionStore>,
    config: FrontendConfig,
) -> PageUtilities<BrowserNavigator, DomNotifier> {
    PageUtilities::with_config(session, BrowserNavigator, DomNotifier, config)
}
