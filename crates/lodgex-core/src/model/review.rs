use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Error, Result};
use crate::rules::validation;

use super::Entity;

/// Review - a rated comment a user leaves on a place
///
/// Both references are set at construction and have no setters: a review
/// never migrates to another user or place. Only text and rating mutate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier (UUID v7, canonical string form)
    id: String,
    text: String,
    /// Star rating, 1..=5 inclusive
    rating: u8,
    /// Id of the authoring user; immutable after construction
    user_id: String,
    /// Id of the reviewed place; immutable after construction
    place_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Review {
    /// Create a new review with a generated id and current timestamps
    ///
    /// # Errors
    /// * `InvalidField` - empty text or rating outside 1..=5
    pub fn new(text: String, rating: u8, user_id: String, place_id: String) -> Result<Self> {
        validation::require_non_empty("text", &text)?;
        validation::require_rating(rating)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::now_v7().to_string(),
            text,
            rating,
            user_id,
            place_id,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn place_id(&self) -> &str {
        &self.place_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Set the review text, re-running constructor validation
    ///
    /// # Errors
    /// * `InvalidField` - empty or whitespace-only text
    pub fn set_text(&mut self, value: String) -> Result<()> {
        validation::require_non_empty("text", &value)?;
        self.text = value;
        Ok(())
    }

    /// Set the rating, re-running constructor validation
    ///
    /// # Errors
    /// * `InvalidField` - rating outside 1..=5
    pub fn set_rating(&mut self, value: u8) -> Result<()> {
        validation::require_rating(value)?;
        self.rating = value;
        Ok(())
    }
}

impl Entity for Review {
    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn not_found(id: &str) -> Error {
        Error::ReviewNotFound {
            review_id: id.to_string(),
        }
    }
}
