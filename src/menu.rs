/// Context menu projection of the format list

use crate::config::{MENU_CONTEXT, MENU_ITEM_PREFIX, MENU_PARENT_ID, MENU_PARENT_TITLE};
use crate::format::FormatList;
use serde::Serialize;

/// One context menu item, shaped like `contextMenus.create` properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub title: String,
    pub contexts: Vec<String>,
}

/// Something that displays menu entries
pub trait MenuSurface {
    fn remove_all(&self);
    fn create(&self, entry: &MenuEntry);
}

pub fn menu_item_id(index: usize) -> String {
    format!("{}{}", MENU_ITEM_PREFIX, index)
}

/// Recover the format index from a clicked menu item id
///
/// Returns `None` for the parent entry and for ids we did not create.
pub fn format_index(menu_item_id: &str) -> Option<usize> {
    menu_item_id
        .strip_prefix(MENU_ITEM_PREFIX)
        .and_then(|index| index.parse().ok())
}

/// Parent entry followed by one child per format, in list order
pub fn menu_entries(formats: &FormatList) -> Vec<MenuEntry> {
    let contexts = vec![MENU_CONTEXT.to_string()];

    let parent = MenuEntry {
        id: MENU_PARENT_ID.to_string(),
        parent_id: None,
        title: MENU_PARENT_TITLE.to_string(),
        contexts: contexts.clone(),
    };

    std::iter::once(parent)
        .chain(formats.iter().enumerate().map(|(index, format)| MenuEntry {
            id: menu_item_id(index),
            parent_id: Some(MENU_PARENT_ID.to_string()),
            title: format.name.clone(),
            contexts: contexts.clone(),
        }))
        .collect()
}

/// Replace everything on the surface with the current formats
pub fn rebuild(surface: &impl MenuSurface, formats: &FormatList) {
    surface.remove_all();
    for entry in menu_entries(formats) {
        surface.create(&entry);
    }
    log::debug!("context menu rebuilt with {} formats", formats.len());
}
