//! Product store
//!
//! Add, read-all, and delete over the `products` table. Rows are keyed
//! by an auto-increment integer; payloads are opaque JSON.

use inventa_storage::Database;

use crate::record::Record;
use crate::Result;

pub struct ProductStore {
    db: Database,
}

impl ProductStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Persist a product record. A record without an id gets the next
    /// auto-increment key; an explicit id inserts under that key and
    /// fails if the key is already taken.
    pub fn add(&self, record: &Record) -> Result<()> {
        let data = serde_json::to_string(&record.fields)?;

        self.db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO products (id, data) VALUES (?1, ?2)",
                rusqlite::params![record.id, data],
            )?;

            tracing::debug!(id = conn.last_insert_rowid(), "added product");
            Ok(())
        })
    }

    /// All product records in key order, freshly materialized.
    pub fn get_all(&self) -> Result<Vec<Record>> {
        self.db.with_connection(|conn| {
            let mut stmt = conn.prepare("SELECT id, data FROM products ORDER BY id")?;
            let rows = stmt.query_map([], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
            })?;

            let mut records = Vec::new();
            for row in rows {
                let (id, data) = row?;
                records.push(Record {
                    id: Some(id),
                    fields: serde_json::from_str(&data)?,
                });
            }

            Ok(records)
        })
    }

    /// Remove the product with the given key. Unknown keys are a no-op.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.db.with_connection(|conn| {
            conn.execute("DELETE FROM products WHERE id = ?1", [id])?;
            Ok(())
        })?;

        tracing::debug!(id, "deleted product");
        Ok(())
    }
}

impl Clone for ProductStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
