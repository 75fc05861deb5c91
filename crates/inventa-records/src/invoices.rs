//! Invoice store

use inventa_storage::Database;

use crate::record::Record;
use crate::Result;

pub struct InvoiceStore {
    db: Database,
}

impl InvoiceStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn add(&self, record: &Record) -> Result<()> {
        let data = serde_json::to_string(&record.fields)?;

        self.db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO invoices (id, data) VALUES (?1, ?2)",
                rusqlite::params![record.id, data],
            )?;

            tracing::debug!(id = conn.last_insert_rowid(), "added invoice");
            Ok(())
        })
    }

    pub fn get_all(&self) -> Result<Vec<Record>> {
        self.db.with_connection(|conn| {
            let mut stmt = conn.prepare("SELECT id, data FROM invoices ORDER BY id")?;
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

    pub fn delete(&self, id: i64) -> Result<()> {
        self.db.with_connection(|conn| {
            conn.execute("DELETE FROM invoices WHERE id = ?1", [id])?;
            Ok(())
        })?;

        tracing::debug!(id, "deleted invoice");
        Ok(())
    }
}

impl Clone for InvoiceStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
