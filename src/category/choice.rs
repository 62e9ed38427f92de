//! The category select field for product forms.
//!
//! Categories are rows in the database rather than fixed configuration, so the
//! valid options for the field are read from the database every time the field
//! is rendered and again every time a submitted value is validated. Nothing is
//! cached between requests.

use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    Error,
    category::{Category, CategoryId, get_all_categories},
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, field_error},
};

/// One option in the category select field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChoice<'a> {
    pub id: CategoryId,
    pub name: &'a str,
    pub selected: bool,
}

/// Build the options for the category select field from a snapshot of the
/// current categories.
///
/// Options are yielded in the same order as `categories`. An option is marked
/// as selected if its ID matches `selected`.
pub fn category_choices(
    categories: &[Category],
    selected: Option<CategoryId>,
) -> impl Iterator<Item = CategoryChoice<'_>> {
    categories.iter().map(move |category| CategoryChoice {
        id: category.id,
        name: category.name.as_ref(),
        selected: Some(category.id) == selected,
    })
}

/// Read the current categories from the database.
///
/// Callers should call this once per render or validation so that the options
/// reflect categories created since the last request.
pub fn load_category_snapshot(connection: &Connection) -> Result<Vec<Category>, Error> {
    get_all_categories(connection)
        .inspect_err(|error| tracing::error!("Could not load category choices: {error}"))
}

/// Check that a submitted category value refers to one of `categories`.
///
/// # Errors
///
/// This function will return:
/// - [Error::InputRequired] if `submitted` is empty or only whitespace.
/// - [Error::InvalidChoice] if `submitted` is not an integer or does not match
///   the ID of any category in `categories`.
pub fn validate_category_choice(
    submitted: &str,
    categories: &[Category],
) -> Result<CategoryId, Error> {
    let submitted = submitted.trim();

    if submitted.is_empty() {
        return Err(Error::InputRequired);
    }

    let category_id: CategoryId = submitted.parse().map_err(|_| Error::InvalidChoice)?;

    if categories.iter().any(|category| category.id == category_id) {
        Ok(category_id)
    } else {
        Err(Error::InvalidChoice)
    }
}

/// Render the category select field.
pub fn category_select(
    categories: &[Category],
    selected: Option<CategoryId>,
    error_message: Option<&str>,
) -> Markup {
    html! {
        div
        {
            label
                for="category_id"
                class=(FORM_LABEL_STYLE)
            {
                "Category"
            }

            select
                name="category_id"
                id="category_id"
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" selected[selected.is_none()] { "Select a category" }

                @for choice in category_choices(categories, selected) {
                    option value=(choice.id) selected[choice.selected] { (choice.name) }
                }
            }

            (field_error(error_message))
        }
    }
}
