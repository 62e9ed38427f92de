//! Product creation page and endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    category::{Category, load_category_snapshot},
    endpoints,
    html::{FORM_CONTAINER_STYLE, LINK_STYLE, base, dollar_input_styles},
    navigation::NavBar,
    product::{
        ProductFormData, ProductFormErrors, create_product, form::product_form_view,
        validate_product_form,
    },
};

/// The state needed for the create product page and endpoint.
#[derive(Debug, Clone)]
pub struct CreateProductState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateProductState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Renders the page for creating a product.
///
/// The category options are read from the database on every request.
pub async fn get_new_product_page(
    State(state): State<CreateProductState>,
) -> Result<Response, Error> {
    let categories = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        load_category_snapshot(&connection)?
    };

    Ok(new_product_view(&categories).into_response())
}

/// A route handler for creating a new product, redirects to the products view on success.
///
/// The submitted category is checked against the categories in the database at
/// the time of the request. Validation errors are returned as the form with an
/// error message under each invalid field.
pub async fn create_product_endpoint(
    State(state): State<CreateProductState>,
    Form(form): Form<ProductFormData>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    let categories = match load_category_snapshot(&connection) {
        Ok(categories) => categories,
        Err(error) => return error.into_alert_response(),
    };

    let new_product = match validate_product_form(&form, &categories) {
        Ok(new_product) => new_product,
        Err(errors) => {
            tracing::debug!("Product form failed validation: {errors:?}");
            return product_form_view(&form, &categories, &errors).into_response();
        }
    };

    match create_product(new_product, &connection) {
        Ok(product) => {
            tracing::info!("Created product {product:?}");

            (
                HxRedirect(endpoints::PRODUCTS_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(Error::InvalidChoice) => {
            let errors = ProductFormErrors {
                category_id: Some(Error::InvalidChoice),
                ..Default::default()
            };

            product_form_view(&form, &categories, &errors).into_response()
        }
        Err(error) => {
            tracing::error!("could not create product: {error}");

            error.into_alert_response()
        }
    }
}

fn new_product_view(categories: &[Category]) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_PRODUCT_VIEW).into_html();
    let form = product_form_view(
        &ProductFormData::default(),
        categories,
        &ProductFormErrors::default(),
    );

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            @if categories.is_empty() {
                p class="mb-4 text-sm"
                {
                    "Products need a category. "
                    a href=(endpoints::NEW_CATEGORY_VIEW) class=(LINK_STYLE)
                    {
                        "Create a category"
                    }
                    " first."
                }
            }

            (form)
        }
    };

    base("Create Product", &[dollar_input_styles()], &content)
}
