/// Tab data received from the browser
use crate::config::UNTITLED;
use serde::{Deserialize, Serialize};

/// The parts of a browser tab needed to build a link
///
/// Both fields are optional in the browser's tab object: tabs without
/// permission or still loading may omit them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabContext {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl TabContext {
    pub fn new(title: &str, url: &str) -> TabContext {
        TabContext {
            title: Some(title.to_string()),
            url: Some(url.to_string()),
        }
    }

    /// Tab title, with "Untitled" standing in for a missing or empty one
    pub fn title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => UNTITLED,
        }
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }
}
