//! Input records for create and update operations
//!
//! These are the plain structured payloads the embedding layer deserializes
//! straight from requests. Updates are full-replace: the caller supplies the
//! complete set of mutable fields, never a partial patch. Immutable
//! references (`Review::user_id`, `Review::place_id`) simply have no update
//! field; the one advisory exception is `PlaceUpdate::owner_id`, which may
//! be echoed back but is rejected when it differs from the current owner.

use serde::{Deserialize, Serialize};

/// Fields for creating a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Administrator flag; defaults to false when absent
    #[serde(default)]
    pub is_admin: bool,
}

/// Full-replace update of a user's mutable fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Fields for creating an amenity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAmenity {
    pub name: String,
}

/// Full-replace update of an amenity's mutable fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmenityUpdate {
    pub name: String,
}

/// Fields for creating a place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlace {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Id of the owning user; must resolve to a live user
    pub owner_id: String,
    /// Amenity ids to attach; each must resolve, duplicates rejected
    #[serde(default)]
    pub amenity_ids: Vec<String>,
}

/// Full-replace update of a place's mutable fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceUpdate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Advisory echo of the owner; rejected if it differs from current
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub amenity_ids: Vec<String>,
}

/// Fields for creating a review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub text: String,
    pub rating: u8,
    /// Id of the authoring user; must resolve to a live user
    pub user_id: String,
    /// Id of the reviewed place; must resolve to a live place
    pub place_id: String,
}

/// Full-replace update of a review's mutable fields
///
/// The user and place references are immutable and have no update fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewUpdate {
    pub text: String,
    pub rating: u8,
}
