use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{validate, ValidationError, REVIEW_SCHEMA};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,                // Store-assigned identifier
    pub comment: String,           // Free-text body of the review
    pub rating: u8,                // 1 to 5
    pub created_at: DateTime<Utc>, // Set by the store on insert
}

impl Review {
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewInput {
    pub comment: String,
    pub rating: u8,
}

impl ReviewInput {
    /// Reads the `review[...]` keys of a submitted form.
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let fields = validate(form, &REVIEW_SCHEMA)?;
        // The schema bounds the rating to 1..=5, so the conversion cannot fail.
        let rating = u8::try_from(fields.integer("rating")).unwrap_or(1);
        Ok(Self {
            comment: fields.text("comment"),
            rating,
        })
    }
}
