use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::PersistenceError;

/// Well-known storage keys. Values are JSON-encoded.
pub mod keys {
    pub const BILLING_INFO: &str = "billingInfo";
    pub const USER_LOGO: &str = "userLogo";
    pub const PRODUCTS: &str = "automobileProducts";
    pub const INVOICE_HISTORY: &str = "invoiceHistory";
}

/// Opaque key-value store behind the app. Every value is a JSON document and
/// every write replaces the whole value for its key.
pub trait Repository {
    fn get_raw(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set_raw(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
    fn remove_raw(&self, key: &str) -> Result<(), PersistenceError>;

    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PersistenceError>
    where
        Self: Sized,
    {
        match self.get_raw(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| PersistenceError::Malformed {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Read with the fallback policy: a missing, unreadable, or malformed
    /// value yields the default instead of ending the session.
    fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T
    where
        Self: Sized,
    {
        match self.get(key) {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!(key, error = %e, "falling back to defaults for unreadable stored value");
                T::default()
            }
        }
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), PersistenceError>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)
            .map_err(|e| PersistenceError::Write(e.to_string()))?;
        self.set_raw(key, &raw)
    }
}

/// SQLite-backed store: one `kv` table, JSON values.
pub struct Database {
    pub conn: Mutex<Connection>,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self, PersistenceError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| PersistenceError::Write(e.to_string()))?;
        }

        let conn = Connection::open(path).map_err(|e| PersistenceError::Read(e.to_string()))?;
        let db = Database {
            conn: Mutex::new(conn),
        };
        db.initialize()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self, PersistenceError> {
        let conn =
            Connection::open_in_memory().map_err(|e| PersistenceError::Read(e.to_string()))?;
        let db = Database {
            conn: Mutex::new(conn),
        };
        db.initialize()?;
        Ok(db)
    }

    fn initialize(&self) -> Result<(), PersistenceError> {
        let conn = self.conn.lock().map_err(|e| PersistenceError::Read(e.to_string()))?;

        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )
        .map_err(|e| PersistenceError::Write(e.to_string()))?;

        Ok(())
    }
}

impl Repository for Database {
    fn get_raw(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let conn = self.conn.lock().map_err(|e| PersistenceError::Read(e.to_string()))?;

        let mut stmt = conn
            .prepare("SELECT value FROM kv WHERE key = ?1")
            .map_err(|e| PersistenceError::Read(e.to_string()))?;

        let mut rows = stmt
            .query_map([key], |row| row.get::<_, String>(0))
            .map_err(|e| PersistenceError::Read(e.to_string()))?;

        match rows.next() {
            Some(value) => value
                .map(Some)
                .map_err(|e| PersistenceError::Read(e.to_string())),
            None => Ok(None),
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let conn = self.conn.lock().map_err(|e| PersistenceError::Write(e.to_string()))?;

        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![key, value],
        )
        .map_err(|e| PersistenceError::Write(e.to_string()))?;

        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<(), PersistenceError> {
        let conn = self.conn.lock().map_err(|e| PersistenceError::Write(e.to_string()))?;

        conn.execute("DELETE FROM kv WHERE key = ?1", [key])
            .map_err(|e| PersistenceError::Write(e.to_string()))?;

        Ok(())
    }
}

/// In-memory store for tests and previews.
#[derive(Default)]
pub struct MemoryRepository {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository for MemoryRepository {
    fn get_raw(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let values = self.values.lock().map_err(|e| PersistenceError::Read(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut values = self.values.lock().map_err(|e| PersistenceError::Write(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<(), PersistenceError> {
        let mut values = self.values.lock().map_err(|e| PersistenceError::Write(e.to_string()))?;
        values.remove(key);
        Ok(())
    }
}
