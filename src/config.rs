/// Fixed settings shared by the background and options contexts

/// `storage.sync` key holding the whole format list
pub const STORAGE_KEY: &str = "formats";

/// Storage area whose change notifications we follow
pub const STORAGE_AREA: &str = "sync";

pub const MENU_PARENT_ID: &str = "copy-link-parent";
pub const MENU_PARENT_TITLE: &str = "Copy Link As...";
/// Child menu ids are this prefix followed by the format's list index
pub const MENU_ITEM_PREFIX: &str = "copy-";
pub const MENU_CONTEXT: &str = "tab";

/// Title used when a tab reports none
pub const UNTITLED: &str = "Untitled";

// Sample tab shown in options page previews
pub const SAMPLE_TITLE: &str = "Example Page Title";
pub const SAMPLE_URL: &str = "https://example.com/page";
pub const SAMPLE_DOMAIN: &str = "example.com";
pub const SAMPLE_DOMAIN_PATH: &str = "example.com/page";

// Seed for the options page "Add format" button
pub const NEW_FORMAT_NAME: &str = "New Format";
pub const NEW_FORMAT_TEMPLATE: &str = "{{title}} - {{url}}";
