//! Implements a struct that holds the state of the catalog server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, db::initialize};

/// Settings that change how the catalog validates input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Whether the duplicate category name check matches letter case exactly.
    ///
    /// When `false`, "book" is rejected if "Books" exists.
    pub case_sensitive_names: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            case_sensitive_names: true,
        }
    }
}

/// The state of the catalog server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,

    /// The validation settings.
    pub config: CatalogConfig,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for products and categories.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection, config: CatalogConfig) -> Result<Self, Error> {
        initialize(&db_connection)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
            config,
        })
    }
}
