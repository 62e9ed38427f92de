//! Products listing page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    html::{
        CATEGORY_BADGE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_price,
    },
    navigation::NavBar,
    product::{Product, get_all_products},
};

/// The state needed for the products listing page.
#[derive(Debug, Clone)]
pub struct ProductsPageState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ProductsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render every product with its price and category.
pub async fn get_products_page(
    State(state): State<ProductsPageState>,
) -> Result<Response, Error> {
    let products = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        get_all_products(&connection)
            .inspect_err(|error| tracing::error!("Failed to retrieve products: {error}"))?
    };

    Ok(products_view(&products).into_response())
}

/// A table of products, shared by the products page and the category page.
pub(crate) fn products_table(products: &[Product], show_category: bool) -> Markup {
    html! {
        table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Price" }
                    @if show_category {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                    }
                }
            }

            tbody
            {
                @for product in products {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td class=(TABLE_CELL_STYLE)
                        {
                            a
                                href=(endpoints::format_endpoint(endpoints::PRODUCT_VIEW, product.id))
                                class=(LINK_STYLE)
                            {
                                (product.name)
                            }
                        }

                        td class=(TABLE_CELL_STYLE) { (format_price(product.price.as_f64())) }

                        @if show_category {
                            td class=(TABLE_CELL_STYLE)
                            {
                                a
                                    href=(endpoints::format_endpoint(endpoints::CATEGORY_VIEW, product.category.id))
                                    class=(CATEGORY_BADGE_STYLE)
                                {
                                    (product.category.name)
                                }
                            }
                        }
                    }
                }

                @if products.is_empty() {
                    tr
                    {
                        td
                            colspan=(if show_category { "3" } else { "2" })
                            class="px-6 py-4 text-center text-gray-500 dark:text-gray-400"
                        {
                            "No products yet. "
                            a href=(endpoints::NEW_PRODUCT_VIEW) class=(LINK_STYLE)
                            {
                                "Create a product"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn products_view(products: &[Product]) -> Markup {
    let nav_bar = NavBar::new(endpoints::PRODUCTS_VIEW).into_html();
    let table = products_table(products, true);

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Products" }

                    a href=(endpoints::NEW_PRODUCT_VIEW) class=(LINK_STYLE)
                    {
                        "Create Product"
                    }
                }

                section class="dark:bg-gray-800 w-full overflow-x-auto" { (table) }
            }
        }
    );

    base("Products", &[], &content)
}
