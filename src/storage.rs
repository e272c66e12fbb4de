/// Format store: persisted format list with save validation and reset

use crate::error::StoreError;
use crate::format::{Format, FormatList};
use std::cell::RefCell;

/// Where the format list is persisted
///
/// The browser implementation wraps `storage.sync`; the list is always
/// written as a whole.
#[allow(async_fn_in_trait)]
pub trait FormatStorage {
    /// `Ok(None)` when nothing has been stored yet
    async fn read(&self) -> Result<Option<FormatList>, StoreError>;

    async fn write(&self, formats: &FormatList) -> Result<(), StoreError>;
}

/// Lifecycle of the in-memory list
#[derive(Debug, Clone, PartialEq)]
pub enum StoreState {
    Uninitialized,
    Loaded(FormatList),
    Saved(FormatList),
    Default(FormatList),
}

impl StoreState {
    pub fn formats(&self) -> Option<&FormatList> {
        match self {
            StoreState::Uninitialized => None,
            StoreState::Loaded(list) | StoreState::Saved(list) | StoreState::Default(list) => {
                Some(list)
            }
        }
    }
}

pub struct FormatStore<S> {
    storage: S,
    // Never borrowed across an await
    state: RefCell<StoreState>,
}

impl<S: FormatStorage> FormatStore<S> {
    pub fn new(storage: S) -> Self {
        FormatStore {
            storage,
            state: RefCell::new(StoreState::Uninitialized),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn state(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// The in-memory list, `None` until the first load
    pub fn current(&self) -> Option<FormatList> {
        self.state.borrow().formats().cloned()
    }

    /// Read the persisted list, falling back to the defaults
    pub async fn load(&self) -> FormatList {
        let formats = read_or_defaults(&self.storage).await;
        self.state.replace(StoreState::Loaded(formats.clone()));
        formats
    }

    /// Read the persisted list, failing if storage itself cannot be read
    ///
    /// Unlike `load`, a storage failure is returned instead of replaced by
    /// the defaults, so an index taken from the menu is never resolved
    /// against a list the user does not have.
    pub async fn reload(&self) -> Result<FormatList, StoreError> {
        let formats = read_persisted(&self.storage).await?;
        self.state.replace(StoreState::Loaded(formats.clone()));
        Ok(formats)
    }

    /// Validate candidates and replace the persisted list with them
    ///
    /// Entries with a blank name or template are dropped. If nothing is
    /// left the save is refused and both storage and memory keep the
    /// previous list. Memory only changes once the write has completed.
    pub async fn save(&self, candidates: &[Format]) -> Result<FormatList, StoreError> {
        let formats = FormatList::validated(candidates)?;

        self.storage.write(&formats).await?;
        self.state.replace(StoreState::Saved(formats.clone()));

        log::info!("saved {} formats", formats.len());
        Ok(formats)
    }

    /// Discard all custom formats in favor of the defaults
    ///
    /// `confirm` is asked first; nothing changes unless it returns true.
    pub async fn reset_to_defaults(
        &self,
        confirm: impl FnOnce() -> bool,
    ) -> Result<FormatList, StoreError> {
        if !confirm() {
            return Err(StoreError::ResetDeclined);
        }

        let defaults = FormatList::defaults();
        self.storage.write(&defaults).await?;
        self.state.replace(StoreState::Default(defaults.clone()));

        log::info!("formats reset to defaults");
        Ok(defaults)
    }
}

/// Read the authoritative list from storage
///
/// Missing, empty and undecodable lists resolve to the defaults. Only a
/// failure of the storage backend itself is returned as an error.
pub async fn read_persisted<S: FormatStorage>(storage: &S) -> Result<FormatList, StoreError> {
    match storage.read().await {
        Ok(Some(formats)) if !formats.is_empty() => Ok(formats),
        Ok(_) => Ok(FormatList::defaults()),
        Err(StoreError::Decode(e)) => {
            log::warn!("using default formats: {}", e);
            Ok(FormatList::defaults())
        }
        Err(e) => Err(e),
    }
}

/// Like `read_persisted`, but a backend failure also yields the defaults
pub async fn read_or_defaults<S: FormatStorage>(storage: &S) -> FormatList {
    read_persisted(storage).await.unwrap_or_else(|e| {
        log::warn!("using default formats: {}", e);
        FormatList::defaults()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatType;
    use crate::testing::{MemoryStorage, block_on};

    fn custom_list() -> FormatList {
        FormatList::new(vec![
            Format::new("Org", "[[{{url}}][{{title}}]]", FormatType::Plain),
            Format::new("Bold", "<b>{{title}}</b>", FormatType::Rich),
        ])
    }

    #[test]
    fn test_new_store_is_uninitialized() {
        let store = FormatStore::new(MemoryStorage::default());

        assert_eq!(store.state(), StoreState::Uninitialized);
        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_load_without_stored_formats() {
        let store = FormatStore::new(MemoryStorage::default());

        let formats = block_on(store.load());

        assert_eq!(formats, FormatList::defaults());
        assert_eq!(store.state(), StoreState::Loaded(FormatList::defaults()));
        // Loading never writes
        assert_eq!(store.storage().writes.get(), 0);
        assert!(store.storage().json.borrow().is_none());
    }

    #[test]
    fn test_load_stored_formats() {
        let store = FormatStore::new(MemoryStorage::with_formats(&custom_list()));

        assert_eq!(block_on(store.load()), custom_list());
        assert_eq!(store.current(), Some(custom_list()));
    }

    #[test]
    fn test_load_empty_or_corrupt_storage() {
        let empty = FormatStore::new(MemoryStorage::with_json("[]"));
        assert_eq!(block_on(empty.load()), FormatList::defaults());

        let corrupt = FormatStore::new(MemoryStorage::with_json(r#"{"formats":"#));
        assert_eq!(block_on(corrupt.load()), FormatList::defaults());
    }

    #[test]
    fn test_save_replaces_list() {
        let store = FormatStore::new(MemoryStorage::default());
        block_on(store.load());

        let candidates = vec![
            Format::new(" Org ", " [[{{url}}][{{title}}]] ", FormatType::Plain),
            Format::new("", "dropped", FormatType::Plain),
            Format::new("Bold", "<b>{{title}}</b>", FormatType::Rich),
        ];
        let saved = block_on(store.save(&candidates)).unwrap();

        assert_eq!(saved, custom_list());
        assert_eq!(store.state(), StoreState::Saved(custom_list()));
        assert_eq!(block_on(store.storage().read()).unwrap(), Some(custom_list()));
    }

    #[test]
    fn test_save_persists_wire_format() {
        let store = FormatStore::new(MemoryStorage::default());

        block_on(store.save(&[Format::new("Link", "{{url}}", FormatType::Markdown)])).unwrap();

        assert_eq!(
            store.storage().json.borrow().as_deref(),
            Some(r#"[{"name":"Link","template":"{{url}}","type":"markdown"}]"#)
        );
    }

    #[test]
    fn test_save_rejects_empty_result() {
        let store = FormatStore::new(MemoryStorage::with_formats(&custom_list()));
        block_on(store.load());

        let result = block_on(store.save(&[Format::new("", "x", FormatType::Plain)]));

        assert_eq!(result, Err(StoreError::NothingToSave));
        assert_eq!(store.state(), StoreState::Loaded(custom_list()));
        assert_eq!(store.storage().writes.get(), 0);
        assert_eq!(block_on(store.storage().read()).unwrap(), Some(custom_list()));
    }

    #[test]
    fn test_save_of_loaded_list_is_idempotent() {
        let store = FormatStore::new(MemoryStorage::with_formats(&custom_list()));
        let before = store.storage().json.borrow().clone();

        let loaded = block_on(store.load());
        block_on(store.save(loaded.as_slice())).unwrap();

        assert_eq!(*store.storage().json.borrow(), before);
        assert_eq!(store.current(), Some(loaded));
    }

    #[test]
    fn test_failed_write_keeps_memory() {
        let store = FormatStore::new(MemoryStorage::with_formats(&custom_list()));
        block_on(store.load());
        store.storage().fail_writes.set(true);

        let result = block_on(store.save(FormatList::defaults().as_slice()));

        assert!(matches!(result, Err(StoreError::Storage(_))));
        assert_eq!(store.current(), Some(custom_list()));
    }

    #[test]
    fn test_reset_to_defaults() {
        let store = FormatStore::new(MemoryStorage::with_formats(&custom_list()));
        block_on(store.load());

        let formats = block_on(store.reset_to_defaults(|| true)).unwrap();

        assert_eq!(formats, FormatList::defaults());
        assert_eq!(store.state(), StoreState::Default(FormatList::defaults()));
        assert_eq!(block_on(store.storage().read()).unwrap(), Some(FormatList::defaults()));
    }

    #[test]
    fn test_reset_declined() {
        let store = FormatStore::new(MemoryStorage::with_formats(&custom_list()));
        block_on(store.load());

        let result = block_on(store.reset_to_defaults(|| false));

        assert_eq!(result, Err(StoreError::ResetDeclined));
        assert_eq!(store.current(), Some(custom_list()));
        assert_eq!(store.storage().writes.get(), 0);
    }

    #[test]
    fn test_reset_from_uninitialized() {
        let store = FormatStore::new(MemoryStorage::with_formats(&custom_list()));

        block_on(store.reset_to_defaults(|| true)).unwrap();

        assert_eq!(store.current(), Some(FormatList::defaults()));
    }

    #[test]
    fn test_reload_reports_read_failure() {
        let store = FormatStore::new(MemoryStorage::with_formats(&custom_list()));
        block_on(store.load());
        store.storage().fail_reads.set(true);

        let result = block_on(store.reload());

        assert!(matches!(result, Err(StoreError::Storage(_))));
        assert_eq!(store.current(), Some(custom_list()));
    }

    #[test]
    fn test_reload_reads_current_list() {
        let store = FormatStore::new(MemoryStorage::default());
        assert_eq!(block_on(store.reload()), Ok(FormatList::defaults()));

        block_on(store.storage().write(&custom_list())).unwrap();

        assert_eq!(block_on(store.reload()), Ok(custom_list()));
        assert_eq!(store.state(), StoreState::Loaded(custom_list()));
    }

    #[test]
    fn test_read_persisted_falls_back_on_corrupt_data() {
        let storage = MemoryStorage::with_json("not json");
        assert_eq!(block_on(read_persisted(&storage)), Ok(FormatList::defaults()));
    }

    #[test]
    fn test_read_or_defaults_on_read_failure() {
        let storage = MemoryStorage::with_formats(&custom_list());
        storage.fail_reads.set(true);

        assert_eq!(block_on(read_or_defaults(&storage)), FormatList::defaults());
    }

    #[test]
    fn test_read_or_defaults() {
        assert_eq!(block_on(read_or_defaults(&MemoryStorage::default())), FormatList::defaults());
        assert_eq!(
            block_on(read_or_defaults(&MemoryStorage::with_formats(&custom_list()))),
            custom_list()
        );
    }
}
