//! Core category domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// The maximum number of characters in a category name.
pub const MAX_CATEGORY_NAME_LENGTH: usize = 100;

/// A validated, non-empty category name of at most [MAX_CATEGORY_NAME_LENGTH] characters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name from user input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// This function will return:
    /// - [Error::InputRequired] if `name` is empty or only whitespace.
    /// - [Error::NameTooLong] if `name` has more than [MAX_CATEGORY_NAME_LENGTH] characters.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::InputRequired)
        } else if name.chars().count() > MAX_CATEGORY_NAME_LENGTH {
            Err(Error::NameTooLong(MAX_CATEGORY_NAME_LENGTH))
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Database identifier for a category.
pub type CategoryId = i64;

/// A named grouping of products (e.g., 'Books', 'Toys').
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,
    /// The unique name of the category.
    pub name: CategoryName,
}

/// Form data for category creation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryFormData {
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod category_name_tests {
    use crate::{
        Error,
        category::{CategoryName, domain::MAX_CATEGORY_NAME_LENGTH},
    };

    #[test]
    fn new_fails_on_empty_string() {
        let name = CategoryName::new("");

        assert_eq!(name, Err(Error::InputRequired));
    }

    #[test]
    fn new_fails_on_just_whitespace() {
        let name = CategoryName::new("\n\t \r");

        assert_eq!(name, Err(Error::InputRequired));
    }

    #[test]
    fn new_trims_whitespace() {
        let name = CategoryName::new("  Books ");

        assert_eq!(name, Ok(CategoryName::new_unchecked("Books")));
    }

    #[test]
    fn new_fails_on_long_name() {
        let long_name = "a".repeat(MAX_CATEGORY_NAME_LENGTH + 1);

        let name = CategoryName::new(&long_name);

        assert_eq!(name, Err(Error::NameTooLong(MAX_CATEGORY_NAME_LENGTH)));
    }

    #[test]
    fn new_counts_characters_not_bytes() {
        let name = "📚".repeat(MAX_CATEGORY_NAME_LENGTH);

        assert!(CategoryName::new(&name).is_ok());
    }
}
