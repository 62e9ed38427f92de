//! Products: priced items that each belong to a category.

mod create;
mod db;
mod domain;
mod form;
mod list;
mod view;

pub use create::{create_product_endpoint, get_new_product_page};
pub use db::{
    create_product, create_product_table, get_all_products, get_product, get_products_in_category,
};
pub use domain::{NewProduct, Price, Product, ProductId, ProductName};
pub use form::{ProductFormData, ProductFormErrors, validate_product_form};
pub use list::get_products_page;
pub use view::get_product_page;

pub(crate) use list::products_table;
