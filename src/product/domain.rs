//! Core product domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    category::{Category, CategoryId},
};

/// The maximum number of characters in a product name.
pub const MAX_PRODUCT_NAME_LENGTH: usize = 255;

/// A validated, non-empty product name of at most [MAX_PRODUCT_NAME_LENGTH] characters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct ProductName(String);

impl ProductName {
    /// Create a product name from user input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// This function will return:
    /// - [Error::InputRequired] if `name` is empty or only whitespace.
    /// - [Error::NameTooLong] if `name` has more than [MAX_PRODUCT_NAME_LENGTH] characters.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::InputRequired)
        } else if name.chars().count() > MAX_PRODUCT_NAME_LENGTH {
            Err(Error::NameTooLong(MAX_PRODUCT_NAME_LENGTH))
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a product name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ProductName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative, finite price in dollars.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    /// The smallest allowed price.
    pub const MIN: f64 = 0.0;

    /// Create a price.
    ///
    /// # Errors
    ///
    /// This function will return:
    /// - [Error::InvalidDecimal] if `value` is NaN or infinite.
    /// - [Error::NumberRange] if `value` is less than [Price::MIN].
    pub fn new(value: f64) -> Result<Self, Error> {
        if !value.is_finite() {
            Err(Error::InvalidDecimal)
        } else if value < Self::MIN {
            Err(Error::NumberRange)
        } else {
            // Normalise negative zero so it displays as "0.00".
            Ok(Self(value + 0.0))
        }
    }

    /// Parse a price from form input.
    ///
    /// # Errors
    ///
    /// This function will return:
    /// - [Error::InputRequired] if `text` is empty or only whitespace.
    /// - [Error::InvalidDecimal] if `text` is not a number.
    /// - [Error::NumberRange] if the number is less than [Price::MIN].
    pub fn parse(text: &str) -> Result<Self, Error> {
        let text = text.trim();

        if text.is_empty() {
            return Err(Error::InputRequired);
        }

        let value: f64 = text.parse().map_err(|_| Error::InvalidDecimal)?;

        Self::new(value)
    }

    /// Create a price without validation.
    ///
    /// The caller should ensure that the value is finite and not negative.
    pub fn new_unchecked(value: f64) -> Self {
        Self(value)
    }

    /// The price in dollars.
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

/// Database identifier for a product.
pub type ProductId = i64;

/// A purchasable item that belongs to exactly one category.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// The ID of the product.
    pub id: ProductId,
    /// The name shown in product listings.
    pub name: ProductName,
    /// The price in dollars.
    pub price: Price,
    /// The category the product belongs to.
    pub category: Category,
}

/// A validated product that has not been saved yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// The name of the product.
    pub name: ProductName,
    /// The price in dollars.
    pub price: Price,
    /// The ID of an existing category.
    pub category_id: CategoryId,
}
