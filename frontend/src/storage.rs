use logiconnect_lib::{Error, session::SessionStore, storage::KeyValueStore};
use web_sys::Storage;

/// `window.localStorage`. Reads as empty and refuses writes when the browser
/// does not expose it, e.g. with storage disabled.
#[derive(Clone, Debug)]
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        Self {
            storage: gloo_utils::window().local_storage().ok().flatten(),
        }
    }

    fn available(&self) -> Result<&Storage, Error> {
        self.storage
            .as_ref()
            .ok_or_else(|| Error::Storage("local storage is unavailable".into()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.available()?
            .set_item(key, value)
            .map_err(|err| Error::Storage(format!("failed to write {key}: {err:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        self.available()?
            .remove_item(key)
            .map_err(|err| Error::Storage(format!("failed to remove {key}: {err:?}")))
    }
}

pub fn session_store() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage::local())
}
