//! Database operations for products.

use rusqlite::{Connection, Row, params};

use crate::{
    Error,
    category::{Category, CategoryId, CategoryName},
    product::{NewProduct, Price, Product, ProductId, ProductName},
};

const SELECT_PRODUCT: &str = "SELECT p.id, p.name, p.price, c.id, c.name \
    FROM product p INNER JOIN category c ON p.category_id = c.id";

/// Create a product and return it with its generated ID and category.
///
/// # Errors
///
/// This function will return an [Error::InvalidChoice] if `product.category_id`
/// does not refer to an existing category.
pub fn create_product(product: NewProduct, connection: &Connection) -> Result<Product, Error> {
    connection.execute(
        "INSERT INTO product (name, price, category_id) VALUES (?1, ?2, ?3);",
        params![
            product.name.as_ref(),
            product.price.as_f64(),
            product.category_id
        ],
    )?;

    let id = connection.last_insert_rowid();

    get_product(id, connection)
}

/// Retrieve a single product and its category by ID.
pub fn get_product(product_id: ProductId, connection: &Connection) -> Result<Product, Error> {
    connection
        .prepare(&format!("{SELECT_PRODUCT} WHERE p.id = :id;"))?
        .query_row(&[(":id", &product_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all products in the order they were created.
pub fn get_all_products(connection: &Connection) -> Result<Vec<Product>, Error> {
    connection
        .prepare(&format!("{SELECT_PRODUCT} ORDER BY p.id ASC;"))?
        .query_map([], map_row)?
        .map(|maybe_product| maybe_product.map_err(|error| error.into()))
        .collect()
}

/// Retrieve the products that belong to a category in the order they were created.
pub fn get_products_in_category(
    category_id: CategoryId,
    connection: &Connection,
) -> Result<Vec<Product>, Error> {
    connection
        .prepare(&format!(
            "{SELECT_PRODUCT} WHERE p.category_id = :category_id ORDER BY p.id ASC;"
        ))?
        .query_map(&[(":category_id", &category_id)], map_row)?
        .map(|maybe_product| maybe_product.map_err(|error| error.into()))
        .collect()
}

/// Initialize the product table and indexes.
///
/// The category table must exist first.
pub fn create_product_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS product (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            price REAL NOT NULL CHECK (price >= 0),
            category_id INTEGER NOT NULL REFERENCES category(id)
        );

        CREATE INDEX IF NOT EXISTS idx_product_category_id ON product(category_id);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Product, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let price = row.get(2)?;
    let category_id = row.get(3)?;
    let raw_category_name: String = row.get(4)?;

    Ok(Product {
        id,
        name: ProductName::new_unchecked(&raw_name),
        price: Price::new_unchecked(price),
        category: Category {
            id: category_id,
            name: CategoryName::new_unchecked(&raw_category_name),
        },
    })
}
