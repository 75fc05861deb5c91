//! Inventory storage client
//!
//! The explicitly constructed entry point: opens the database once and
//! hands a clone of the handle to each record store. Created at startup
//! and passed to whatever code needs persistence.

use inventa_records::{CustomerStore, InvoiceStore, ProductStore, Record};
use inventa_storage::Database;

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

pub struct Inventory {
    /// Configuration
    config: Config,
    /// Database
    db: Database,
    /// Product records
    products: ProductStore,
    /// Customer records
    customers: CustomerStore,
    /// Invoice records
    invoices: InvoiceStore,
}

impl Inventory {
    /// Open (or create) the database and wire up the stores.
    pub fn new(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;

        let products = ProductStore::new(db.clone());
        let customers = CustomerStore::new(db.clone());
        let invoices = InvoiceStore::new(db.clone());

        tracing::info!(
            path = %config.database_path.display(),
            "Opened inventory database"
        );

        Ok(Self {
            config,
            db,
            products,
            customers,
            invoices,
        })
    }

    // === Product operations ===

    pub fn add_product(&self, record: &Record) -> Result<()> {
        Ok(self.products.add(record)?)
    }

    pub fn get_all_products(&self) -> Result<Vec<Record>> {
        Ok(self.products.get_all()?)
    }

    pub fn delete_product(&self, id: i64) -> Result<()> {
        Ok(self.products.delete(id)?)
    }

    // === Customer operations ===

    pub fn add_customer(&self, record: &Record) -> Result<()> {
        Ok(self.customers.add(record)?)
    }

    pub fn get_all_customers(&self) -> Result<Vec<Record>> {
        Ok(self.customers.get_all()?)
    }

    pub fn delete_customer(&self, id: i64) -> Result<()> {
        Ok(self.customers.delete(id)?)
    }

    // === Invoice operations ===

    pub fn add_invoice(&self, record: &Record) -> Result<()> {
        Ok(self.invoices.add(record)?)
    }

    pub fn get_all_invoices(&self) -> Result<Vec<Record>> {
        Ok(self.invoices.get_all()?)
    }

    pub fn delete_invoice(&self, id: i64) -> Result<()> {
        Ok(self.invoices.delete(id)?)
    }

    // === Accessors ===

    pub fn products(&self) -> &ProductStore {
        &self.products
    }

    pub fn customers(&self) -> &CustomerStore {
        &self.customers
    }

    pub fn invoices(&self) -> &InvoiceStore {
        &self.invoices
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl Clone for Inventory {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            db: self.db.clone(),
            products: self.products.clone(),
            customers: self.customers.clone(),
            invoices: self.invoices.clone(),
        }
    }
}

// Implement std::io::Error conversion for fs operations
impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_inventory() -> Inventory {
        let db = Database::open_in_memory().unwrap();

        Inventory {
            config: Config {
                database_path: PathBuf::from(":memory:"),
            },
            db: db.clone(),
            products: ProductStore::new(db.clone()),
            customers: CustomerStore::new(db.clone()),
            invoices: InvoiceStore::new(db),
        }
    }

    #[test]
    fn test_widget_gadget_scenario() {
        let inventory = test_inventory();

        inventory
            .add_product(&Record::new().with_field("name", "Widget").with_field("price", 10))
            .unwrap();

        let all = inventory.get_all_products().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, Some(1));
        assert_eq!(all[0].field("name"), Some(&serde_json::Value::from("Widget")));

        inventory
            .add_product(&Record::new().with_field("name", "Gadget").with_field("price", 20))
            .unwrap();

        let all = inventory.get_all_products().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, Some(1));
        assert_eq!(all[1].id, Some(2));

        inventory.delete_product(1).unwrap();

        let all = inventory.get_all_products().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, Some(2));
        assert_eq!(all[0].field("name"), Some(&serde_json::Value::from("Gadget")));
    }

    #[test]
    fn test_stores_are_independent() {
        let inventory = test_inventory();

        inventory
            .add_product(&Record::new().with_field("name", "Widget"))
            .unwrap();
        inventory
            .add_customer(&Record::new().with_field("name", "Acme Corp"))
            .unwrap();
        inventory
            .add_invoice(&Record::new().with_field("total", 100))
            .unwrap();

        // Each store keys from 1 and sees only its own records.
        assert_eq!(inventory.get_all_products().unwrap()[0].id, Some(1));
        assert_eq!(inventory.get_all_customers().unwrap()[0].id, Some(1));
        assert_eq!(inventory.get_all_invoices().unwrap()[0].id, Some(1));

        inventory.delete_product(1).unwrap();

        assert!(inventory.get_all_products().unwrap().is_empty());
        assert_eq!(inventory.get_all_customers().unwrap().len(), 1);
        assert_eq!(inventory.get_all_invoices().unwrap().len(), 1);
    }

    #[test]
    fn test_open_on_disk_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().to_path_buf());

        {
            let inventory = Inventory::new(config.clone()).unwrap();
            inventory
                .add_customer(&Record::new().with_field("name", "Acme Corp"))
                .unwrap();
        }

        let inventory = Inventory::new(config).unwrap();
        let customers = inventory.get_all_customers().unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].id, Some(1));
    }
}
