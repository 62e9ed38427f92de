//! Category detail page listing the products in a category.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    category::{Category, CategoryId, get_category},
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    product::{Product, get_products_in_category, products_table},
};

/// The state needed for the category page.
#[derive(Debug, Clone)]
pub struct CategoryPageState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CategoryPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render a category and its products, or the 404 page if it does not exist.
pub async fn get_category_page(
    State(state): State<CategoryPageState>,
    Path(category_id): Path<CategoryId>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let category = get_category(category_id, &connection)?;
    let products = get_products_in_category(category.id, &connection).inspect_err(|error| {
        tracing::error!("Could not get products for category {category_id}: {error}")
    })?;

    Ok(category_view(&category, &products).into_response())
}

fn category_view(category: &Category, products: &[Product]) -> Markup {
    let nav_bar = NavBar::new(endpoints::CATEGORIES_VIEW).into_html();
    let table = products_table(products, false);

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { (category.name) }

                    a href=(endpoints::CATEGORIES_VIEW) class=(LINK_STYLE)
                    {
                        "All categories"
                    }
                }

                section class="dark:bg-gray-800 w-full overflow-x-auto" { (table) }
            }
        }
    };

    base(category.name.as_ref(), &[], &content)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use rusqlite::Connection;
    use scraper::Selector;

    use crate::{
        category::{CategoryName, create_category},
        db::initialize,
        product::{NewProduct, Price, ProductName, create_product},
        test_utils::{assert_valid_html, parse_html_document},
    };

    use super::{CategoryPageState, get_category_page};

    fn get_test_state() -> CategoryPageState {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        CategoryPageState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn lists_only_products_in_category() {
        let state = get_test_state();
        let books_id = {
            let connection = state.db_connection.lock().unwrap();
            let books = create_category(CategoryName::new_unchecked("Books"), &connection).unwrap();
            let toys = create_category(CategoryName::new_unchecked("Toys"), &connection).unwrap();
            for (name, category_id) in [("Dune", books.id), ("Yo-yo", toys.id), ("Emma", books.id)]
            {
                create_product(
                    NewProduct {
                        name: ProductName::new_unchecked(name),
                        price: Price::new_unchecked(5.0),
                        category_id,
                    },
                    &connection,
                )
                .unwrap();
            }
            books.id
        };

        let response = get_category_page(State(state), Path(books_id))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let names = html
            .select(&Selector::parse("tbody td:first-child").unwrap())
            .map(|cell| cell.text().collect::<String>().trim().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Dune", "Emma"]);
    }

    #[tokio::test]
    async fn missing_category_is_not_found() {
        let state = get_test_state();

        let response = get_category_page(State(state), Path(3))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
