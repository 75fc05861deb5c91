//! Database connection and operations

use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;

use crate::migrations::run_migrations;
use crate::Result;

/// Shared handle to the one database connection.
///
/// Cloning is cheap and every clone talks to the same connection, so the
/// handle is opened once at startup and passed to each record store.
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode for better concurrent performance
        let _: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;

        // Run migrations
        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run `f` with exclusive access to the connection. Each call is one
    /// serialized engine request; no ordering is imposed across calls.
    pub fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock();
        f(&conn)
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_count(db: &Database, name: &str) -> i64 {
        db.with_connection(|conn| {
            let count = conn.query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [name],
                |row| row.get(0),
            )?;
            Ok(count)
        })
        .unwrap()
    }

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        db.with_connection(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
            assert_eq!(count, 0);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn test_open_creates_each_store_once() {
        let db = Database::open_in_memory().unwrap();
        for store in ["products", "customers", "invoices"] {
            assert_eq!(store_count(&db, store), 1);
        }
    }

    #[test]
    fn test_reopen_preserves_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventa.db");

        {
            let db = Database::open(&path).unwrap();
            db.with_connection(|conn| {
                conn.execute(
                    "INSERT INTO products (data) VALUES (?1)",
                    [r#"{"name":"Widget"}"#],
                )?;
                Ok(())
            })
            .unwrap();
        }

        // Opening again must not re-create stores or lose rows.
        let db = Database::open(&path).unwrap();
        for store in ["products", "customers", "invoices"] {
            assert_eq!(store_count(&db, store), 1);
        }
        db.with_connection(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
            assert_eq!(count, 1);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn test_clones_share_one_connection() {
        let db = Database::open_in_memory().unwrap();
        let clone = db.clone();

        clone
            .with_connection(|conn| {
                conn.execute("INSERT INTO customers (data) VALUES ('{}')", [])?;
                Ok(())
            })
            .unwrap();

        db.with_connection(|conn| {
            let count: i64 =
                conn.query_row("SELECT COUNT(*) FROM customers", [], |row| row.get(0))?;
            assert_eq!(count, 1);
            Ok(())
        })
        .unwrap();
    }
}
