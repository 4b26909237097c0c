//! The facade: the sole entry point for business operations
//!
//! One `Facade` instance owns one `Store`; everything that needs business
//! operations holds a reference to the facade, never to repositories or
//! models directly. There is no global instance — tests and embeddings
//! construct their own.

use std::sync::{Arc, Mutex};

use crate::errors::Result;
use crate::model::{Amenity, Place, Review, User};
use crate::ops::{amenity_ops, place_ops, review_ops, user_ops, Store};
use crate::payloads::{
    AmenityUpdate, NewAmenity, NewPlace, NewReview, NewUser, PlaceUpdate, ReviewUpdate, UserUpdate,
};
use crate::rules::invariants::{self, Violation};

/// A facade shared across threads behind a single exclusive lock
///
/// Each facade call runs to completion under the lock, so operations are
/// serialized with respect to store mutation and no partial write is ever
/// observable. Sufficient for the in-memory, non-sharded store; embeddings
/// with one caller can use a plain `Facade` directly.
pub type SharedFacade = Arc<Mutex<Facade>>;

/// Facade over the four entity repositories
///
/// Every method validates inputs, resolves cross-entity references, and
/// writes through to the store, returning either the affected entity (as an
/// owned record, cheap to serialize) or a typed error. No method suspends
/// mid-mutation and no I/O happens here.
#[derive(Debug, Default)]
pub struct Facade {
    store: Store,
}

impl Facade {
    /// Create a facade over a fresh empty store
    pub fn new() -> Self {
        Self {
            store: Store::new(),
        }
    }

    /// Wrap a fresh facade for concurrent embeddings
    pub fn shared() -> SharedFacade {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Read-only access to the underlying store, for diagnostics and tests
    pub fn store(&self) -> &Store {
        &self.store
    }

    // ===== Users =====

    /// Create a user; `Conflict` if the email is already registered
    ///
    /// # Errors
    /// * `EmailTaken`, `InvalidField`
    pub fn create_user(&mut self, payload: NewUser) -> Result<User> {
        user_ops::create_user(&mut self.store, payload)
    }

    /// Read a user by id
    ///
    /// # Errors
    /// * `UserNotFound`
    pub fn get_user(&self, user_id: &str) -> Result<User> {
        user_ops::get_user(&self.store, user_id)
    }

    /// Look a user up by email; `None` is a normal result
    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        user_ops::get_user_by_email(&self.store, email)
    }

    /// All users in insertion order
    pub fn list_users(&self) -> Vec<User> {
        user_ops::list_users(&self.store)
    }

    /// Full-replace update of a user's mutable fields
    ///
    /// # Errors
    /// * `UserNotFound`, `EmailTaken`, `InvalidField`
    pub fn update_user(&mut self, user_id: &str, payload: UserUpdate) -> Result<User> {
        user_ops::update_user(&mut self.store, user_id, payload)
    }

    // ===== Amenities =====

    /// Create an amenity; no cross-entity checks, no name uniqueness
    ///
    /// # Errors
    /// * `InvalidField`
    pub fn create_amenity(&mut self, payload: NewAmenity) -> Result<Amenity> {
        amenity_ops::create_amenity(&mut self.store, payload)
    }

    /// Read an amenity by id
    ///
    /// # Errors
    /// * `AmenityNotFound`
    pub fn get_amenity(&self, amenity_id: &str) -> Result<Amenity> {
        amenity_ops::get_amenity(&self.store, amenity_id)
    }

    /// All amenities in insertion order
    pub fn list_amenities(&self) -> Vec<Amenity> {
        amenity_ops::list_amenities(&self.store)
    }

    /// Full-replace update of an amenity's mutable fields
    ///
    /// # Errors
    /// * `AmenityNotFound`, `InvalidField`
    pub fn update_amenity(&mut self, amenity_id: &str, payload: AmenityUpdate) -> Result<Amenity> {
        amenity_ops::update_amenity(&mut self.store, amenity_id, payload)
    }

    // ===== Places =====

    /// Create a place after resolving its owner and amenity references
    ///
    /// # Errors
    /// * `UserNotFound`, `AmenityNotFound`, `DuplicateAmenityRef`, `InvalidField`
    pub fn create_place(&mut self, payload: NewPlace) -> Result<Place> {
        place_ops::create_place(&mut self.store, payload)
    }

    /// Read a place by id
    ///
    /// # Errors
    /// * `PlaceNotFound`
    pub fn get_place(&self, place_id: &str) -> Result<Place> {
        place_ops::get_place(&self.store, place_id)
    }

    /// All places in insertion order
    pub fn list_places(&self) -> Vec<Place> {
        place_ops::list_places(&self.store)
    }

    /// Full-replace update of a place's mutable fields; owner is immutable
    ///
    /// # Errors
    /// * `PlaceNotFound`, `ImmutableField`, `AmenityNotFound`,
    ///   `DuplicateAmenityRef`, `InvalidField`
    pub fn update_place(&mut self, place_id: &str, payload: PlaceUpdate) -> Result<Place> {
        place_ops::update_place(&mut self.store, place_id, payload)
    }

    // ===== Reviews =====

    /// Create a review after resolving its user and place references
    ///
    /// # Errors
    /// * `UserNotFound`, `PlaceNotFound`, `InvalidField`
    pub fn create_review(&mut self, payload: NewReview) -> Result<Review> {
        review_ops::create_review(&mut self.store, payload)
    }

    /// Read a review by id
    ///
    /// # Errors
    /// * `ReviewNotFound`
    pub fn get_review(&self, review_id: &str) -> Result<Review> {
        review_ops::get_review(&self.store, review_id)
    }

    /// All reviews in insertion order
    pub fn list_reviews(&self) -> Vec<Review> {
        review_ops::list_reviews(&self.store)
    }

    /// All reviews referencing one place, in insertion order
    ///
    /// # Errors
    /// * `PlaceNotFound`
    pub fn list_reviews_by_place(&self, place_id: &str) -> Result<Vec<Review>> {
        review_ops::list_reviews_by_place(&self.store, place_id)
    }

    /// Full-replace update of a review's text and rating
    ///
    /// # Errors
    /// * `ReviewNotFound`, `InvalidField`
    pub fn update_review(&mut self, review_id: &str, payload: ReviewUpdate) -> Result<Review> {
        review_ops::update_review(&mut self.store, review_id, payload)
    }

    /// Delete a review; the only delete operation in the system
    ///
    /// # Errors
    /// * `ReviewNotFound`
    pub fn delete_review(&mut self, review_id: &str) -> Result<()> {
        review_ops::delete_review(&mut self.store, review_id)
    }

    // ===== Diagnostics =====

    /// Scan the whole store for referential integrity violations
    ///
    /// Empty means healthy; ops maintain these invariants, so anything here
    /// indicates a bug, not bad caller input.
    pub fn check_invariants(&self) -> Vec<Violation> {
        invariants::scan_store(&self.store)
    }
}
