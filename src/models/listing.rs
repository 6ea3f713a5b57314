use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::review::Review;
use crate::validation::{validate, ValidationError, LISTING_SCHEMA};
#[cfg(test)]
use crate::validation::MAX_PRICE;

/// Shown for listings created without an image.
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1625505826533-5c80aca7d157?auto=format&fit=crop&w=800&q=60";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,           // Store-assigned identifier
    pub title: String,
    pub description: String,
    pub image: Option<String>, // Absolute image URL, if one was given
    pub price: f64,           // Nightly price, never negative
    pub location: String,
    pub country: String,
    pub reviews: Vec<String>, // Ordered ids of the reviews this listing owns
}

impl Listing {
    pub fn image_url(&self) -> &str {
        self.image.as_deref().unwrap_or(DEFAULT_IMAGE)
    }

    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// Validated field set used for both creating and replacing a listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListingInput {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub price: f64,
    pub location: String,
    pub country: String,
}

impl ListingInput {
    /// Reads the `listing[...]` keys of a submitted form.
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let fields = validate(form, &LISTING_SCHEMA)?;
        Ok(Self {
            title: fields.text("title"),
            description: fields.text("description"),
            image: fields.optional_text("image"),
            price: fields.number("price"),
            location: fields.text("location"),
            country: fields.text("country"),
        })
    }
}

/// A listing with its review references resolved to full reviews.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListingWithReviews {
    pub listing: Listing,
    pub reviews: Vec<Review>,
}

/// Formats a price with thousands separators, keeping cents only when present.
pub fn format_price(price: f64) -> String {
    let total_cents = (price.max(0.0) * 100.0).round() as u64;
    let whole = (total_cents / 100).to_string();
    let cents = total_cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if cents == 0 {
        grouped
    } else {
        format!("{grouped}.{cents:02}")
    }
}
