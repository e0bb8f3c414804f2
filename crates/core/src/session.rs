//! Session storage abstraction
//!
//! The browser keeps the login state in tab-scoped `sessionStorage`. Everything
//! that needs it goes through [`SessionStore`] so the same logic runs against the
//! real storage in the browser and against [`MemorySessionStore`] elsewhere.

use crate::error::CoreResult;
use std::cell::RefCell;
use std::collections::HashMap;

/// Keys the frontend reads from and writes to session storage
pub struct SessionKeys;

impl SessionKeys {
    /// Bearer token issued at login
    pub const AUTH_TOKEN: &'static str = "authToken";

    /// Display name of the logged-in user
    pub const USER_NAME: &'static str = "userName";

    /// Email of the logged-in user
    pub const USER_EMAIL: &'static str = "userEmail";
}

/// Tab-scoped key/value store holding the login state
pub trait SessionStore {
    /// Read a value, `None` when the key is unset
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;

    /// Remove a single key
    fn remove(&self, key: &str) -> CoreResult<()>;

    /// Remove every key
    fn clear(&self) -> CoreResult<()>;

    /// The stored auth token, ignoring empty values
    fn auth_token(&self) -> Option<String> {
        non_empty(self.get(SessionKeys::AUTH_TOKEN))
    }

    /// The stored display name, ignoring empty values
    fn user_name(&self) -> Option<String> {
        non_empty(self.get(SessionKeys::USER_NAME))
    }

    /// The stored email, ignoring empty values
    fn user_email(&self) -> Option<String> {
        non_empty(self.get(SessionKeys::USER_EMAIL))
    }

    /// Record a successful login
    fn establish(&self, token: &str, name: Option<&str>, email: Option<&str>) -> CoreResult<()> {
        self.set(SessionKeys::AUTH_TOKEN, token)?;
        if let Some(name) = name {
            self.set(SessionKeys::USER_NAME, name)?;
        }
        if let Some(email) = email {
            self.set(SessionKeys::USER_EMAIL, email)?;
        }
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// In-process session store for native callers and tests
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds an auth token
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(SessionKeys::AUTH_TOKEN.to_string(), token.into());
        store
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> CoreResult<()> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}
