/// Link formats and the built-in default list
use crate::config::{NEW_FORMAT_NAME, NEW_FORMAT_TEMPLATE};
use crate::error::StoreError;
use serde::{Deserialize, Serialize};

/// How a rendered format is written to the clipboard
///
/// `Plain` and `Markdown` both copy plain text; only `Rich` writes HTML.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    Markdown,
    Rich,
    // Unknown type strings from storage fall back to plain text
    #[default]
    #[serde(other)]
    Plain,
}

impl FormatType {
    pub const ALL: [FormatType; 3] = [FormatType::Plain, FormatType::Markdown, FormatType::Rich];

    pub fn is_rich(self) -> bool {
        self == FormatType::Rich
    }

    /// Value used in storage and in the options page select
    pub fn as_str(self) -> &'static str {
        match self {
            FormatType::Plain => "plain",
            FormatType::Markdown => "markdown",
            FormatType::Rich => "rich",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormatType::Plain => "Plain Text",
            FormatType::Markdown => "Markdown",
            FormatType::Rich => "Rich Text",
        }
    }

    pub fn from_value(value: &str) -> FormatType {
        match value {
            "markdown" => FormatType::Markdown,
            "rich" => FormatType::Rich,
            _ => FormatType::Plain,
        }
    }
}

/// A named rendering rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    pub name: String,
    pub template: String,
    #[serde(rename = "type", default)]
    pub kind: FormatType,
}

impl Format {
    pub fn new(name: &str, template: &str, kind: FormatType) -> Format {
        Format {
            name: name.to_string(),
            template: template.to_string(),
            kind,
        }
    }

    /// Trimmed copy, or `None` if the name or template is blank
    pub fn normalized(&self) -> Option<Format> {
        let name = self.name.trim();
        let template = self.template.trim();

        if name.is_empty() || template.is_empty() {
            None
        } else {
            Some(Format::new(name, template, self.kind))
        }
    }
}

/// Formats every installation starts with
const DEFAULT_FORMATS: [(&str, &str, FormatType); 8] = [
    ("Markdown", "[{{title}}]({{url}})", FormatType::Plain),
    ("Rich Text", "<a href=\"{{url}}\">{{title}}</a>", FormatType::Rich),
    ("Title First", "\"{{title}}\" - {{url}}", FormatType::Plain),
    ("Link First", "{{url}} - \"{{title}}\"", FormatType::Plain),
    ("Rich: domain", "<a href=\"{{url}}\">{{domain}}</a>", FormatType::Rich),
    ("Rich: domain+path", "<a href=\"{{url}}\">{{domain_path}}</a>", FormatType::Rich),
    ("Markdown: domain", "[{{domain}}]({{url}})", FormatType::Plain),
    ("Markdown: domain+path", "[{{domain_path}}]({{url}})", FormatType::Plain),
];

/// Ordered formats; a format's position is its identity in the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatList(Vec<Format>);

impl FormatList {
    pub fn new(formats: Vec<Format>) -> FormatList {
        FormatList(formats)
    }

    pub fn defaults() -> FormatList {
        FormatList(
            DEFAULT_FORMATS
                .iter()
                .map(|(name, template, kind)| Format::new(name, template, *kind))
                .collect(),
        )
    }

    /// Keep only entries with a non-blank name and template, trimmed
    pub fn validated(candidates: &[Format]) -> Result<FormatList, StoreError> {
        let formats: Vec<Format> = candidates.iter().filter_map(Format::normalized).collect();

        if formats.is_empty() {
            Err(StoreError::NothingToSave)
        } else {
            Ok(FormatList(formats))
        }
    }

    pub fn get(&self, index: usize) -> Option<&Format> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Format> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Format] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Format> {
        self.0
    }

    /// Append the "New Format" seed and return its index
    pub fn push_new(&mut self) -> usize {
        self.0.push(Format::new(NEW_FORMAT_NAME, NEW_FORMAT_TEMPLATE, FormatType::Plain));
        self.0.len() - 1
    }

    /// Remove a format, refusing to drop the last one
    pub fn remove(&mut self, index: usize) -> Result<Format, StoreError> {
        if index >= self.0.len() {
            return Err(StoreError::NoSuchFormat(index));
        }
        if self.0.len() == 1 {
            return Err(StoreError::LastFormat);
        }
        Ok(self.0.remove(index))
    }
}

impl Default for FormatList {
    fn default() -> Self {
        Self::defaults()
    }
}
