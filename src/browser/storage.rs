use login_core::{ClientError, KeyValueStore, Result};
use wasm_bindgen::JsValue;

/// `window.localStorage`, looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| ClientError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| ClientError::Storage("localStorage unavailable".to_string()))
    }
}

fn js_error(value: JsValue) -> ClientError {
    ClientError::Storage(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::local_storage()?.set_item(key, value).map_err(js_error)
    }
}
