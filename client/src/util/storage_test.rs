use super::*;

/// Backend that rejects every call, like a browser with storage disabled.
struct BrokenStorage;

impl StorageBackend for BrokenStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".to_owned()))
    }
}

#[test]
fn read_missing_key_is_none() {
    let store = PreferenceStore::new(MemoryStorage::default());
    assert_eq!(store.read(LANGUAGE_KEY), None);
}

#[test]
fn write_then_read_returns_value() {
    let store = PreferenceStore::new(MemoryStorage::default());
    store.write(THEME_KEY, "dark");
    assert_eq!(store.read(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn memory_storage_clones_share_items() {
    let backend = MemoryStorage::default();
    PreferenceStore::new(backend.clone()).write(LANGUAGE_KEY, "ar");

    let reloaded = PreferenceStore::new(backend);
    assert_eq!(reloaded.read(LANGUAGE_KEY).as_deref(), Some("ar"));
}

#[test]
fn memory_storage_clear_removes_items() {
    let backend = MemoryStorage::default();
    let store = PreferenceStore::new(backend.clone());
    store.write(THEME_KEY, "light");
    backend.clear();
    assert_eq!(store.read(THEME_KEY), None);
}

#[test]
fn broken_backend_reads_as_absent() {
    let store = PreferenceStore::new(BrokenStorage);
    assert_eq!(store.read(THEME_KEY), None);
}

#[test]
fn try_read_surfaces_backend_failure() {
    let store = PreferenceStore::new(BrokenStorage);
    assert_eq!(store.try_read(THEME_KEY), Err(StorageError::Unavailable));
}

#[test]
fn try_read_distinguishes_missing_from_stored() {
    let store = PreferenceStore::new(MemoryStorage::default());
    assert_eq!(store.try_read(THEME_KEY), Ok(None));
    store.write(THEME_KEY, "dark");
    assert_eq!(store.try_read(THEME_KEY), Ok(Some("dark".to_owned())));
}

#[test]
fn broken_backend_write_does_not_panic() {
    let store = PreferenceStore::new(BrokenStorage);
    store.write(LANGUAGE_KEY, "ar");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn session_store_starts_empty_without_browser() {
    let store = session_store();
    assert_eq!(store.read(LANGUAGE_KEY), None);
    assert_eq!(store.read(THEME_KEY), None);
}

#[test]
fn storage_error_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(
        StorageError::Write("quota".to_owned()).to_string(),
        "storage write failed: quota"
    );
}
