//! Categories group products. Each product belongs to exactly one category.

mod choice;
mod create;
mod db;
mod domain;
mod duplicate;
mod list;
mod view;

pub use choice::{
    CategoryChoice, category_choices, category_select, load_category_snapshot,
    validate_category_choice,
};
pub use create::{create_category_endpoint, get_new_category_page};
pub use db::{create_category, create_category_table, get_all_categories, get_category};
pub use domain::{Category, CategoryFormData, CategoryId, CategoryName};
pub use duplicate::{check_duplicate_name, find_categories_containing};
pub use list::get_categories_page;
pub use view::get_category_page;
