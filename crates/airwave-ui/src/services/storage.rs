//! `localStorage` backend for receiver NVRAM.

use airwave_nvram::{KeyValueStore, StorageError};
use gloo::utils::window;
use wasm_bindgen::JsValue;

/// Handle to the browser's local storage area.
#[derive(Clone, Debug)]
pub(crate) struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    /// Open `window.localStorage`.
    pub(crate) fn local() -> Result<Self, StorageError> {
        match window().local_storage() {
            Ok(Some(inner)) => Ok(Self { inner }),
            Ok(None) => Err(StorageError::new(
                "open",
                "localStorage",
                "storage is unavailable",
            )),
            Err(err) => Err(js_error("open", "localStorage", &err)),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner
            .get_item(key)
            .map_err(|err| js_error("get", key, &err))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .set_item(key, value)
            .map_err(|err| js_error("set", key, &err))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner
            .remove_item(key)
            .map_err(|err| js_error("remove", key, &err))
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let len = self
            .inner
            .length()
            .map_err(|err| js_error("keys", "*", &err))?;
        let mut keys = Vec::with_capacity(len as usize);
        for index in 0..len {
            if let Some(key) = self
                .inner
                .key(index)
                .map_err(|err| js_error("keys", "*", &err))?
            {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}

fn js_error(operation: &'static str, key: &str, err: &JsValue) -> StorageError {
    let detail = err.as_string().unwrap_or_else(|| format!("{err:?}"));
    StorageError::new(operation, key, detail)
}
