use std::{cell::RefCell, rc::Rc};

/// Holder of the persisted session token.
///
/// The token is only ever written, read or removed as a whole, so there is no
/// partial-update API.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Keeps the token for the lifetime of the process. Used off the browser and
/// in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::default();
        store.save(&token.into());
        store
    }
}

impl TokenStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

/// Logs a `localStorage` mutation that did not go through. `None` means the
/// browser has no storage to write to.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn storage_write_ok<E: std::fmt::Debug>(action: &str, result: Option<Result<(), E>>) -> bool {
    match result {
        Some(Ok(())) => true,
        Some(Err(e)) => {
            tracing::warn!("Could not {action} session token in localStorage: {e:?}");
            false
        }
        None => {
            tracing::warn!("Could not {action} session token: localStorage unavailable");
            false
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use types::TOKEN_STORAGE_KEY;
    use web_sys::Storage;

    use super::{TokenStore, storage_write_ok};

    /// The browser's `localStorage`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStorage;

    impl LocalStorage {
        fn storage() -> Option<Storage> {
            web_sys::window()?.local_storage().ok().flatten()
        }
    }

    impl TokenStore for LocalStorage {
        fn load(&self) -> Option<String> {
            Self::storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
        }

        fn save(&self, token: &str) {
            let saved = Self::storage().map(|s| s.set_item(TOKEN_STORAGE_KEY, token));
            storage_write_ok("write", saved);
        }

        fn clear(&self) {
            let removed = Self::storage().map(|s| s.remove_item(TOKEN_STORAGE_KEY));
            storage_write_ok("remove", removed);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::LocalStorage;

/// Shared handle to whichever store backs this platform.
pub type SharedStore = Rc<dyn TokenStore>;

#[cfg(target_arch = "wasm32")]
pub fn platform_store() -> SharedStore {
    Rc::new(LocalStorage)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn platform_store() -> SharedStore {
    Rc::new(MemoryStore::default())
}
