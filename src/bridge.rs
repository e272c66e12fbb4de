/// Browser-backed implementations of the storage, clipboard and menu seams

use crate::config::{STORAGE_AREA, STORAGE_KEY};
use crate::copy::Clipboard;
use crate::error::{ClipboardError, StoreError};
use crate::format::FormatList;
use crate::menu::{MenuEntry, MenuSurface};
use crate::storage::FormatStorage;
use crate::tab_data::TabContext;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/js/browser.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn writeClipboardText(text: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn writeClipboardRich(html: &str, plain: &str) -> Result<(), JsValue>;

    fn removeAllMenus();

    fn createMenu(properties: JsValue);

    fn addBackgroundListeners(
        on_init: &js_sys::Function,
        on_menu_click: &js_sys::Function,
        on_storage_change: &js_sys::Function,
        storage_area: &str,
        storage_key: &str,
    );
}

/// `storage.sync`, key `formats`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl FormatStorage for BrowserStorage {
    async fn read(&self) -> Result<Option<FormatList>, StoreError> {
        let formats_js = getStorage(STORAGE_KEY)
            .await
            .map_err(|e| StoreError::Storage(format!("Failed to get storage: {:?}", e)))?;

        decode_formats(formats_js)
    }

    async fn write(&self, formats: &FormatList) -> Result<(), StoreError> {
        let formats_js = serde_wasm_bindgen::to_value(formats)
            .map_err(|e| StoreError::Storage(format!("Failed to serialize formats: {:?}", e)))?;

        setStorage(STORAGE_KEY, formats_js)
            .await
            .map_err(|e| StoreError::Storage(format!("Failed to save storage: {:?}", e)))
    }
}

/// `navigator.clipboard`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        writeClipboardText(text)
            .await
            .map_err(|e| ClipboardError::Rejected(format!("{:?}", e)))
    }

    async fn write_rich(&self, html: &str, plain: &str) -> Result<(), ClipboardError> {
        writeClipboardRich(html, plain)
            .await
            .map_err(|e| ClipboardError::Rejected(format!("{:?}", e)))
    }
}

/// `contextMenus`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserMenu;

impl MenuSurface for BrowserMenu {
    fn remove_all(&self) {
        removeAllMenus();
    }

    fn create(&self, entry: &MenuEntry) {
        match serde_wasm_bindgen::to_value(entry) {
            Ok(properties) => createMenu(properties),
            Err(e) => log::error!("Failed to create menu {}: {:?}", entry.id, e),
        }
    }
}

/// Decode a stored value; `undefined` and `null` mean nothing is stored
pub fn decode_formats(value: JsValue) -> Result<Option<FormatList>, StoreError> {
    if value.is_null() || value.is_undefined() {
        Ok(None)
    } else {
        serde_wasm_bindgen::from_value(value)
            .map(Some)
            .map_err(|e| StoreError::Decode(format!("{:?}", e)))
    }
}

/// Decode the tab passed to a menu click, if any
pub fn decode_tab(value: JsValue) -> Option<TabContext> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    match serde_wasm_bindgen::from_value(value) {
        Ok(tab) => Some(tab),
        Err(e) => {
            log::warn!("Failed to parse tab: {:?}", e);
            None
        }
    }
}

pub fn add_background_listeners(
    on_init: &js_sys::Function,
    on_menu_click: &js_sys::Function,
    on_storage_change: &js_sys::Function,
) {
    addBackgroundListeners(on_init, on_menu_click, on_storage_change, STORAGE_AREA, STORAGE_KEY);
}
