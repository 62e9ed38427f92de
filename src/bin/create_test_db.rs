use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use catalog::{
    CategoryName, NewProduct, Price, ProductName, create_category, create_product, initialize_db,
};

/// A utility for creating a test database for the catalog server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const SAMPLE_PRODUCTS: [(&str, &[(&str, f64)]); 3] = [
    ("Books", &[("Dune", 12.5), ("Emma", 8.0)]),
    ("Toys", &[("Yo-yo", 3.5), ("Kite", 24.99)]),
    ("Garden", &[]),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if output_path
        .extension()
        .is_none_or(|extension| extension.is_empty())
    {
        eprintln!("Output path must include a file extension (e.g., 'catalog.db').");
        exit(1);
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let connection = Connection::open(output_path)?;

    initialize_db(&connection)?;

    for (category_name, products) in SAMPLE_PRODUCTS {
        println!("Creating category {category_name} with {} products...", products.len());
        let category = create_category(CategoryName::new(category_name)?, &connection)?;

        for &(name, price) in products {
            create_product(
                NewProduct {
                    name: ProductName::new(name)?,
                    price: Price::new(price)?,
                    category_id: category.id,
                },
                &connection,
            )?;
        }
    }

    println!("Success!");

    Ok(())
}
