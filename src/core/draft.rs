//! Working draft: the entry being edited between two CLI invocations.

use crate::core::persist::KeyValueStore;
use crate::core::store::FormStore;
use crate::errors::AppResult;
use crate::models::entry::ChecklistEntry;

pub const DRAFT_KEY: &str = "session-draft";

/// Load the current draft, or a fresh form when none was stored yet.
pub fn load_draft<S: KeyValueStore + ?Sized>(store: &mut S) -> AppResult<FormStore> {
    match store.get(DRAFT_KEY)? {
        Some(raw) => {
            let entry: ChecklistEntry = serde_json::from_str(&raw)?;
            Ok(FormStore::from_entry(entry))
        }
        None => Ok(FormStore::new()),
    }
}

pub fn store_draft<S: KeyValueStore + ?Sized>(store: &mut S, form: &FormStore) -> AppResult<()> {
    let json = serde_json::to_string(form.entry())?;
    store.put(DRAFT_KEY, &json)
}
