//! Database schema setup for the catalog.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, category::create_category_table, product::create_product_table};

/// Create the tables for the domain models and enable foreign key enforcement.
///
/// Tables are created with `IF NOT EXISTS`, so this is safe to call on an
/// existing database.
///
/// # Errors
/// Returns an error if a table cannot be created or if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    // Foreign keys are off by default in SQLite and this pragma is a no-op
    // inside a transaction, so it must be set first.
    connection.execute_batch("PRAGMA foreign_keys = ON;")?;

    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_category_table(&transaction)?;
    create_product_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
