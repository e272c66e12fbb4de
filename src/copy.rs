/// Copying a rendered link to the clipboard

use crate::domain::derive_fields;
use crate::error::ClipboardError;
use crate::format::Format;
use crate::tab_data::TabContext;
use crate::template::{TemplateFields, render};

/// Clipboard write operations offered by the platform
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Write `text/html` together with a `text/plain` fallback
    async fn write_rich(&self, html: &str, plain: &str) -> Result<(), ClipboardError>;
}

/// What to put on the clipboard for one copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardPayload {
    Plain(String),
    Rich { html: String, plain: String },
}

/// How a dispatch ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Plain,
    Rich,
    /// Rich write failed and the plain fallback was written instead
    FellBack,
    Failed,
}

/// Build the clipboard payload for a format and tab
pub fn prepare(format: &Format, tab: &TabContext) -> ClipboardPayload {
    let title = tab.title();
    let url = tab.url();
    let derived = derive_fields(url);

    let fields = TemplateFields {
        title: title.to_string(),
        url: url.to_string(),
        domain: derived.domain,
        domain_path: derived.domain_path,
    };
    let text = render(&format.template, &fields);

    if format.kind.is_rich() {
        ClipboardPayload::Rich {
            html: text,
            plain: format!("{} - {}", title, url),
        }
    } else {
        ClipboardPayload::Plain(text)
    }
}

/// Write a payload, falling back from rich to plain text
///
/// Failures are logged and never returned to the caller.
pub async fn dispatch(clipboard: &impl Clipboard, payload: &ClipboardPayload) -> CopyOutcome {
    match payload {
        ClipboardPayload::Plain(text) => match clipboard.write_text(text).await {
            Ok(()) => CopyOutcome::Plain,
            Err(e) => {
                log::error!("Failed to copy text: {}", e);
                CopyOutcome::Failed
            }
        },
        ClipboardPayload::Rich { html, plain } => match clipboard.write_rich(html, plain).await {
            Ok(()) => CopyOutcome::Rich,
            Err(e) => {
                log::error!("Failed to copy rich text: {}", e);
                match clipboard.write_text(plain).await {
                    Ok(()) => CopyOutcome::FellBack,
                    Err(e) => {
                        log::error!("Failed to copy text: {}", e);
                        CopyOutcome::Failed
                    }
                }
            }
        },
    }
}

/// Render `format` for `tab` and put it on the clipboard
pub async fn copy_tab_link(
    clipboard: &impl Clipboard,
    format: &Format,
    tab: &TabContext,
) -> CopyOutcome {
    let payload = prepare(format, tab);
    let outcome = dispatch(clipboard, &payload).await;
    log::debug!("copied {:?} as {:?}", format.name, outcome);
    outcome
}
