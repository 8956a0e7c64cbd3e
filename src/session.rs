//! Login session kept by the rest of the site in browser local storage.
use crate::error::ReviewError;

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";

/// Key/value source for session data.
pub trait SessionStore {
    fn item(&self, key: &str) -> Option<String>;
}

/// `window.localStorage`. Reads as empty when there is no window, e.g. while
/// rendering on the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl SessionStore for LocalStorage {
    #[cfg(target_arch = "wasm32")]
    fn item(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                leptos::logging::warn!("[SESSION] Could not read {} from local storage: {:?}", key, err);
                None
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn item(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Credentials needed by every write request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: String,
}

impl Session {
    /// Both values must be present and non-empty.
    pub fn from_store<S: SessionStore + ?Sized>(store: &S) -> Result<Self, ReviewError> {
        let token = non_empty(store.item(TOKEN_KEY)).ok_or(ReviewError::LoginRequired)?;
        let user_id = non_empty(store.item(USER_ID_KEY)).ok_or(ReviewError::LoginRequired)?;
        Ok(Self { token, user_id })
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Identifier of whoever is looking at the page, used to decide which reviews
/// show edit and delete controls. Does not require a token.
pub fn viewer_id<S: SessionStore + ?Sized>(store: &S) -> Option<String> {
    non_empty(store.item(USER_ID_KEY))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
pub(crate) mod testing {
    use super::SessionStore;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory stand-in for local storage.
    #[derive(Default)]
    pub struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        pub fn logged_in(user_id: &str, token: &str) -> Self {
            let store = Self::default();
            store.set(super::USER_ID_KEY, user_id);
            store.set(super::TOKEN_KEY, token);
            store
        }

        pub fn set(&self, key: &str, value: &str) {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    impl SessionStore for MemoryStore {
        fn item(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }
    }
}
