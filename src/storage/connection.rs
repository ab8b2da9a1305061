use std::fs;
use std::path::Path;

use rusqlite::Connection;

use super::{SqliteStorage, StorageResult};

/// Open (or create) the SQLite storage file at `path`, creating the parent
/// directory and the key-value table on first use.
pub fn open_storage(path: &Path) -> StorageResult<SqliteStorage> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(path)?;
    ensure_schema(&conn)?;
    log::debug!("event=storage_open path={}", path.display());
    Ok(SqliteStorage::new(conn))
}

pub(super) fn ensure_schema(conn: &Connection) -> StorageResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS local_storage (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}
