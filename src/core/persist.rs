//! Save and load complete checklist snapshots.

use crate::errors::{AppError, AppResult};
use crate::models::entry::{ChecklistEntry, KEY_PREFIX, Shift, storage_key};
use std::collections::BTreeMap;

/// Minimal key-value storage used for snapshots and the working draft.
pub trait KeyValueStore {
    fn get(&mut self, key: &str) -> AppResult<Option<String>>;

    /// Insert or overwrite.
    fn put(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Keys starting with `prefix`, sorted.
    fn keys_with_prefix(&mut self, prefix: &str) -> AppResult<Vec<String>>;
}

/// In-process store, handy for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&mut self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn keys_with_prefix(&mut self, prefix: &str) -> AppResult<Vec<String>> {
        Ok(self
            .items
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }
}

/// Store the whole entry under `checklist-<date>-<shift>`, overwriting any
/// previous snapshot with the same key. Returns the key.
pub fn save<S: KeyValueStore + ?Sized>(
    store: &mut S,
    entry: &ChecklistEntry,
) -> AppResult<String> {
    if entry.date.trim().is_empty() {
        return Err(AppError::MissingField("a date"));
    }
    let Some(shift) = entry.shift else {
        return Err(AppError::MissingField("a shift"));
    };

    let key = storage_key(&entry.date, shift);
    let json = serde_json::to_string(entry)?;
    store.put(&key, &json)?;
    Ok(key)
}

/// Read back the snapshot saved for `date` and `shift`.
///
/// The returned entry is re-keyed against the current catalog; fields the
/// snapshot does not carry keep their defaults.
pub fn load<S: KeyValueStore + ?Sized>(
    store: &mut S,
    date: &str,
    shift: Option<Shift>,
) -> AppResult<ChecklistEntry> {
    if date.trim().is_empty() {
        return Err(AppError::MissingField("a date"));
    }
    let Some(shift) = shift else {
        return Err(AppError::MissingField("a shift"));
    };

    let key = storage_key(date, shift);
    let raw = store
        .get(&key)?
        .ok_or_else(|| AppError::NoDataFound(format!("{date} shift {shift}")))?;

    let entry: ChecklistEntry = serde_json::from_str(&raw)?;
    Ok(entry.rekeyed())
}

/// Keys of every saved snapshot.
pub fn saved_entries<S: KeyValueStore + ?Sized>(store: &mut S) -> AppResult<Vec<String>> {
    store.keys_with_prefix(KEY_PREFIX)
}
