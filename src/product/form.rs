//! The product form: its submitted data, validation and rendering.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    category::{Category, category_select, validate_category_choice},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, field_error,
        loading_spinner,
    },
    product::{NewProduct, Price, ProductName, domain::MAX_PRODUCT_NAME_LENGTH},
};

/// Form data for product creation.
///
/// Fields are kept as text so that missing and malformed values can be
/// reported back to the user next to the field they typed them in.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ProductFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub category_id: String,
}

/// The validation errors for each field of the product form.
#[derive(Debug, Default, PartialEq)]
pub struct ProductFormErrors {
    pub name: Option<Error>,
    pub price: Option<Error>,
    pub category_id: Option<Error>,
}

/// Validate a submitted product form against the current categories.
///
/// Every field is checked so that all errors can be shown at once.
///
/// # Errors
///
/// Returns a [ProductFormErrors] with an error for each invalid field.
pub fn validate_product_form(
    form: &ProductFormData,
    categories: &[Category],
) -> Result<NewProduct, ProductFormErrors> {
    let name = ProductName::new(&form.name);
    let price = Price::parse(&form.price);
    let category_id = validate_category_choice(&form.category_id, categories);

    match (name, price, category_id) {
        (Ok(name), Ok(price), Ok(category_id)) => Ok(NewProduct {
            name,
            price,
            category_id,
        }),
        (name, price, category_id) => Err(ProductFormErrors {
            name: name.err(),
            price: price.err(),
            category_id: category_id.err(),
        }),
    }
}

/// Render the product form.
///
/// `form` holds the previously submitted values, if any, so the user does not
/// have to type them again after a validation error.
pub fn product_form_view(
    form: &ProductFormData,
    categories: &[Category],
    errors: &ProductFormErrors,
) -> Markup {
    let create_product_route = endpoints::POST_PRODUCT;
    let selected_category = form.category_id.trim().parse().ok();
    let spinner = loading_spinner();

    let name_error = errors.name.as_ref().map(ToString::to_string);
    let price_error = errors.price.as_ref().map(ToString::to_string);
    let category_error = errors.category_id.as_ref().map(ToString::to_string);

    html! {
        form
            hx-post=(create_product_route)
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            h2 class="text-xl font-bold" { "New Product" }

            div
            {
                label
                    for="name"
                    class=(FORM_LABEL_STYLE)
                {
                    "Name"
                }

                input
                    name="name"
                    id="name"
                    type="text"
                    placeholder="Product Name"
                    value=(form.name)
                    maxlength=(MAX_PRODUCT_NAME_LENGTH)
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);

                (field_error(name_error.as_deref()))
            }

            div
            {
                label
                    for="price"
                    class=(FORM_LABEL_STYLE)
                {
                    "Price"
                }

                // w-full needed to ensure input takes the full width when prefilled with a value
                div class="input-wrapper w-full"
                {
                    input
                        name="price"
                        id="price"
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="0.00"
                        value=(form.price)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                (field_error(price_error.as_deref()))
            }

            (category_select(categories, selected_category, category_error.as_deref()))

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span
                    id="indicator"
                    class="inline htmx-indicator"
                {
                    (spinner)
                }
                " Create Product"
            }
        }
    }
}
