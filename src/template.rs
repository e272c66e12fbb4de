/// Placeholder substitution for link templates
use crate::config::{SAMPLE_DOMAIN, SAMPLE_DOMAIN_PATH, SAMPLE_TITLE, SAMPLE_URL};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Matches exactly the four recognized tokens, case-sensitive
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(title|url|domain_path|domain)\}\}").expect("placeholder pattern is valid")
});

/// Values substituted into a template; missing values render as empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateFields {
    pub title: String,
    pub url: String,
    pub domain: String,
    pub domain_path: String,
}

impl TemplateFields {
    fn value(&self, token: &str) -> &str {
        match token {
            "title" => &self.title,
            "url" => &self.url,
            "domain" => &self.domain,
            "domain_path" => &self.domain_path,
            _ => "",
        }
    }
}

/// Replace every `{{title}}`, `{{url}}`, `{{domain}}` and `{{domain_path}}`
///
/// The template is scanned once, left to right. Inserted values are never
/// scanned again, so a title such as "{{url}}" is copied literally.
/// Any other `{{...}}` text is left as is.
pub fn render(template: &str, fields: &TemplateFields) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| fields.value(&caps[1]).to_string())
        .into_owned()
}

/// Render against the sample tab shown on the options page
pub fn preview(template: &str) -> String {
    let sample = TemplateFields {
        title: SAMPLE_TITLE.to_string(),
        url: SAMPLE_URL.to_string(),
        domain: SAMPLE_DOMAIN.to_string(),
        domain_path: SAMPLE_DOMAIN_PATH.to_string(),
    };
    render(template, &sample)
}
