/// Background event handlers: startup, menu clicks, storage changes

use crate::bridge::{self, BrowserClipboard, BrowserMenu, BrowserStorage};
use crate::copy::{Clipboard, CopyOutcome, copy_tab_link};
use crate::format::FormatList;
use crate::menu::{self, MenuSurface};
use crate::storage::{FormatStorage, FormatStore};
use crate::tab_data::TabContext;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub struct Background<S, C, M> {
    store: FormatStore<S>,
    clipboard: C,
    menu: M,
}

impl<S: FormatStorage, C: Clipboard, M: MenuSurface> Background<S, C, M> {
    pub fn new(storage: S, clipboard: C, menu: M) -> Self {
        Background {
            store: FormatStore::new(storage),
            clipboard,
            menu,
        }
    }

    pub fn store(&self) -> &FormatStore<S> {
        &self.store
    }

    /// Load formats and build the context menu (startup and install)
    pub async fn initialize(&self) -> FormatList {
        let formats = self.store.load().await;
        menu::rebuild(&self.menu, &formats);
        log::info!("initialized with {} formats", formats.len());
        formats
    }

    /// Copy the clicked format for `tab`
    ///
    /// The list is read again from storage so the index is resolved
    /// against what the user has now, not what the menu was built from.
    /// If storage cannot be read nothing is copied.
    pub async fn handle_menu_click(
        &self,
        menu_item_id: &str,
        tab: Option<TabContext>,
    ) -> Option<CopyOutcome> {
        let Some(index) = menu::format_index(menu_item_id) else {
            log::debug!("ignoring menu item {}", menu_item_id);
            return None;
        };

        let formats = match self.store.reload().await {
            Ok(formats) => formats,
            Err(e) => {
                log::error!("not copying menu item {}: {}", menu_item_id, e);
                return None;
            }
        };
        let (Some(format), Some(tab)) = (formats.get(index), tab) else {
            log::debug!("no format or tab for menu item {}", menu_item_id);
            return None;
        };

        Some(copy_tab_link(&self.clipboard, format, &tab).await)
    }

    /// Rebuild the menu from a changed list; `None` means it was removed
    pub fn handle_formats_changed(&self, formats: Option<FormatList>) {
        let formats = formats.filter(|f| !f.is_empty()).unwrap_or_default();
        menu::rebuild(&self.menu, &formats);
    }
}

type BrowserBackground = Background<BrowserStorage, BrowserClipboard, BrowserMenu>;

/// Register the background listeners with the browser
pub fn listen() {
    let background: Rc<BrowserBackground> =
        Rc::new(Background::new(BrowserStorage, BrowserClipboard, BrowserMenu));

    let on_init = {
        let background = background.clone();
        Closure::wrap(Box::new(move || {
            let background = background.clone();
            spawn_local(async move {
                background.initialize().await;
            });
        }) as Box<dyn Fn()>)
    };

    let on_menu_click = {
        let background = background.clone();
        Closure::wrap(Box::new(move |menu_item_id: String, tab_js: JsValue| {
            let background = background.clone();
            let tab = bridge::decode_tab(tab_js);
            spawn_local(async move {
                background.handle_menu_click(&menu_item_id, tab).await;
            });
        }) as Box<dyn Fn(String, JsValue)>)
    };

    let on_storage_change = {
        let background = background.clone();
        Closure::wrap(Box::new(move |new_value: JsValue| {
            let formats = bridge::decode_formats(new_value).unwrap_or_else(|e| {
                log::warn!("using default formats: {}", e);
                None
            });
            background.handle_formats_changed(formats);
        }) as Box<dyn Fn(JsValue)>)
    };

    bridge::add_background_listeners(
        on_init.as_ref().unchecked_ref(),
        on_menu_click.as_ref().unchecked_ref(),
        on_storage_change.as_ref().unchecked_ref(),
    );

    // Listeners live as long as the background page
    on_init.forget();
    on_menu_click.forget();
    on_storage_change.forget();
}
