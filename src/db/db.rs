use super::migrations::init_with_migrations;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use parking_lot::{Mutex, MutexGuard};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub const DB_FILE_NAME: &str = "taskql.db";

/// How long a writer waits on a lock held by another connection before
/// SQLite reports `SQLITE_BUSY`.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared SQLite connection.
///
/// Clones hand out the same connection; access is serialized by the mutex,
/// so a `Db` can be shared freely between request handlers.
#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    /// Opens (or creates) a database file and applies pending migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let path = path.as_ref();
        let mut conn = Self::open_without_migrations(path)?;
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |_| Ok(()))?;
        init_with_migrations(&mut conn)?;

        msg_debug!(Message::DatabaseOpened(path.display().to_string()));
        Ok(Self::from_connection(conn))
    }

    /// Private in-memory database, migrated. Used by tests and the `schema`
    /// command.
    pub fn in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;
        Ok(Self::from_connection(conn))
    }

    /// Raw connection to `path` with the busy timeout set but no migrations
    /// applied.
    pub fn open_without_migrations(path: impl AsRef<Path>) -> Result<Connection> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    fn from_connection(conn: Connection) -> Db {
        Db {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Locks the connection for the duration of the returned guard.
    pub fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock()
    }
}
