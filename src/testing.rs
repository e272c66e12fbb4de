/// Test doubles for the storage, clipboard and menu seams
use crate::copy::Clipboard;
use crate::error::{ClipboardError, StoreError};
use crate::format::FormatList;
use crate::menu::{MenuEntry, MenuSurface};
use crate::storage::FormatStorage;
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::pin;
use std::task::{Context, Poll, Waker};

/// Drive a future whose awaits all complete immediately
pub fn block_on<F: Future>(future: F) -> F::Output {
    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
            return output;
        }
    }
}

/// Storage that keeps the JSON text a browser would persist
#[derive(Default)]
pub struct MemoryStorage {
    pub json: RefCell<Option<String>>,
    pub fail_reads: Cell<bool>,
    pub fail_writes: Cell<bool>,
    pub writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn with_json(json: &str) -> MemoryStorage {
        let storage = MemoryStorage::default();
        storage.json.replace(Some(json.to_string()));
        storage
    }

    pub fn with_formats(formats: &FormatList) -> MemoryStorage {
        MemoryStorage::with_json(&serde_json::to_string(formats).unwrap())
    }
}

impl FormatStorage for MemoryStorage {
    async fn read(&self) -> Result<Option<FormatList>, StoreError> {
        if self.fail_reads.get() {
            return Err(StoreError::Storage("storage.sync is unavailable".to_string()));
        }
        match self.json.borrow().as_deref() {
            None => Ok(None),
            Some(json) => serde_json::from_str(json)
                .map(Some)
                .map_err(|e| StoreError::Decode(e.to_string())),
        }
    }

    async fn write(&self, formats: &FormatList) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Storage("quota exceeded".to_string()));
        }
        let json =
            serde_json::to_string(formats).map_err(|e| StoreError::Storage(e.to_string()))?;
        self.json.replace(Some(json));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardWrite {
    Text(String),
    Rich { html: String, plain: String },
}

/// Clipboard that records successful writes
#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: RefCell<Vec<ClipboardWrite>>,
    pub reject_rich: Cell<bool>,
    pub reject_text: Cell<bool>,
}

impl Clipboard for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.reject_text.get() {
            return Err(ClipboardError::Rejected("document is not focused".to_string()));
        }
        self.writes.borrow_mut().push(ClipboardWrite::Text(text.to_string()));
        Ok(())
    }

    async fn write_rich(&self, html: &str, plain: &str) -> Result<(), ClipboardError> {
        if self.reject_rich.get() {
            return Err(ClipboardError::Rejected("ClipboardItem is not supported".to_string()));
        }
        self.writes.borrow_mut().push(ClipboardWrite::Rich {
            html: html.to_string(),
            plain: plain.to_string(),
        });
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCall {
    RemoveAll,
    Create(MenuEntry),
}

/// Menu surface that records every call in order
#[derive(Default)]
pub struct RecordingMenu {
    pub calls: RefCell<Vec<MenuCall>>,
}

impl RecordingMenu {
    /// Entries present after replaying the recorded calls
    pub fn visible(&self) -> Vec<MenuEntry> {
        let mut entries = Vec::new();
        for call in self.calls.borrow().iter() {
            match call {
                MenuCall::RemoveAll => entries.clear(),
                MenuCall::Create(entry) => entries.push(entry.clone()),
            }
        }
        entries
    }
}

impl MenuSurface for RecordingMenu {
    fn remove_all(&self) {
        self.calls.borrow_mut().push(MenuCall::RemoveAll);
    }

    fn create(&self, entry: &MenuEntry) {
        self.calls.borrow_mut().push(MenuCall::Create(entry.clone()));
    }
}
