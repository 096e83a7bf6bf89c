//! SQLite connection wrapper (lightweight for CLI usage).

use crate::core::persist::KeyValueStore;
use crate::db::{initialize, snapshots};
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database and make sure the schema is in place.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        initialize::init_db(&conn)?;
        Ok(Self { conn })
    }
}

impl KeyValueStore for DbPool {
    fn get(&mut self, key: &str) -> AppResult<Option<String>> {
        snapshots::get_value(&self.conn, key)
    }

    fn put(&mut self, key: &str, value: &str) -> AppResult<()> {
        snapshots::put_value(&self.conn, key, value)
    }

    fn keys_with_prefix(&mut self, prefix: &str) -> AppResult<Vec<String>> {
        snapshots::keys_with_prefix(&self.conn, prefix)
    }
}
