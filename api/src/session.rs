//! Session handling for the catalog client.
//!
//! The session is an explicit value: loaded once at startup, provided to the
//! UI as context, and injected into every [`crate::CatalogClient`]. Nothing in
//! the client reads storage ambiently per request.
//!
//! The token itself is opaque — the remote service issues it on login and is
//! the actual authority; its presence here is only the client-side signal that
//! gates the admin views.

/// Storage key the token persists under, shared with earlier deployments.
pub const SESSION_TOKEN_KEY: &str = "sessionToken";

/// An admin session: at most one opaque bearer token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Load the persisted session, if any.
    pub fn load() -> Self {
        Self {
            token: storage::read(SESSION_TOKEN_KEY),
        }
    }

    /// Build a session from a freshly issued token.
    pub fn authenticated(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Write the current state back to storage: the token when present,
    /// otherwise remove the key.
    pub fn persist(&self) {
        match &self.token {
            Some(token) => storage::write(SESSION_TOKEN_KEY, token),
            None => storage::remove(SESSION_TOKEN_KEY),
        }
    }

    /// Log out: drop the token and remove it from storage.
    pub fn clear(&mut self) {
        self.token = None;
        storage::remove(SESSION_TOKEN_KEY);
    }
}

/// Key/value persistence for the session token.
///
/// `localStorage` in the browser; an in-process map on native targets so the
/// full persist/load/clear cycle runs under host tests.
mod storage {
    #[cfg(target_arch = "wasm32")]
    pub fn read(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    #[cfg(target_arch = "wasm32")]
    pub fn write(key: &str, value: &str) {
        if let Some(store) = local_storage() {
            if let Err(e) = store.set_item(key, value) {
                tracing::error!("Failed to persist {key}: {e:?}");
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn remove(key: &str) {
        if let Some(store) = local_storage() {
            let _ = store.remove_item(key);
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    #[cfg(not(target_arch = "wasm32"))]
    use std::collections::BTreeMap;
    #[cfg(not(target_arch = "wasm32"))]
    use std::sync::{Mutex, OnceLock};

    #[cfg(not(target_arch = "wasm32"))]
    fn store() -> &'static Mutex<BTreeMap<String, String>> {
        static STORE: OnceLock<Mutex<BTreeMap<String, String>>> = OnceLock::new();
        STORE.get_or_init(|| Mutex::new(BTreeMap::new()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn read(key: &str) -> Option<String> {
        store().lock().ok()?.get(key).cloned()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn write(key: &str, value: &str) {
        if let Ok(mut map) = store().lock() {
            map.insert(key.to_string(), value.to_string());
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn remove(key: &str) {
        if let Ok(mut map) = store().lock() {
            map.remove(key);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
