//! Product detail page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    html::{CATEGORY_BADGE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base, format_price},
    navigation::NavBar,
    product::{Product, ProductId, get_product},
};

/// The state needed for the product page.
#[derive(Debug, Clone)]
pub struct ProductPageState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ProductPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render a single product, or the 404 page if it does not exist.
pub async fn get_product_page(
    State(state): State<ProductPageState>,
    Path(product_id): Path<ProductId>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let product = get_product(product_id, &connection)?;

    Ok(product_view(&product).into_response())
}

fn product_view(product: &Product) -> Markup {
    let nav_bar = NavBar::new(endpoints::PRODUCTS_VIEW).into_html();
    let category_url = endpoints::format_endpoint(endpoints::CATEGORY_VIEW, product.category.id);

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            article class="space-y-4 w-full lg:max-w-xl"
            {
                h1 class="text-2xl font-bold" { (product.name) }

                dl class="grid grid-cols-2 gap-2 text-sm"
                {
                    dt class="font-medium" { "Price" }
                    dd id="price" { (format_price(product.price.as_f64())) }

                    dt class="font-medium" { "Category" }
                    dd
                    {
                        a href=(category_url) class=(CATEGORY_BADGE_STYLE)
                        {
                            (product.category.name)
                        }
                    }
                }

                a href=(endpoints::PRODUCTS_VIEW) class=(LINK_STYLE) { "Back to products" }
            }
        }
    };

    base(product.name.as_ref(), &[], &content)
}
