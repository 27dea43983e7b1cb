//! Long-lived owner of the database target.
//!
//! The factory is opened once at start-up. Every store operation asks it for
//! a fresh session (a SQLite connection) and drops that session before
//! returning, so no two operations ever share a connection or a transaction.

use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS contacts (
        id    INTEGER PRIMARY KEY AUTOINCREMENT,
        name  TEXT NOT NULL,
        phone TEXT NOT NULL,
        email TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_contacts_name ON contacts(name);
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbTarget {
    File(PathBuf),
    Memory,
}

#[derive(Debug)]
pub struct SessionFactory {
    uri: String,
    target: DbTarget,
    // In-memory databases live only while a connection is open.
    anchor: Option<Connection>,
}

impl SessionFactory {
    pub fn open(target: DbTarget) -> Result<Self, AppError> {
        let (uri, anchor) = match &target {
            DbTarget::File(path) => {
                create_file_parent(path)?;
                (path.to_string_lossy().into_owned(), None)
            }
            DbTarget::Memory => {
                let uri = format!("file:agenda-{}?mode=memory&cache=shared", Uuid::new_v4());
                let anchor = Connection::open(&uri)?;
                (uri, Some(anchor))
            }
        };

        let factory = Self {
            uri,
            target,
            anchor,
        };

        let conn = factory.session()?;
        conn.execute_batch(SCHEMA)?;
        debug!(db = ?factory.target, "contact schema ready");

        Ok(factory)
    }

    /// A new connection to the target. Dropping it closes it.
    pub fn session(&self) -> Result<Connection, AppError> {
        let conn = Connection::open(&self.uri)?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(conn)
    }

    pub fn target(&self) -> &DbTarget {
        &self.target
    }

    /// Shut the factory down. An in-memory database is discarded here.
    pub fn close(self) -> Result<(), AppError> {
        if let Some(anchor) = self.anchor {
            anchor.close().map_err(|(_, err)| AppError::Storage(err))?;
        }
        debug!(db = ?self.target, "session factory closed");
        Ok(())
    }
}

fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
