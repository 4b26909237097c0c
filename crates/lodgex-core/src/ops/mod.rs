//! Business operations over the store
//!
//! One module per entity kind plus the store itself. Ops functions are the
//! only writers: they resolve cross-entity references, construct or mutate
//! self-validating models, and write through to the repositories. The
//! `Facade` delegates here and adds nothing else.

pub mod amenity_ops;
pub mod place_ops;
pub mod review_ops;
pub mod store;
pub mod user_ops;

pub use store::{Repository, Store};

use crate::errors::Result;
use crate::model::{Amenity, Entity, Place, Review, User};

// Resolve-or-fail helpers. Create and update paths share these so reference
// validation can never diverge between the two.

/// Resolve a user id to a live user
///
/// # Errors
/// * `UserNotFound` - no live user under this id
pub(crate) fn resolve_user<'a>(store: &'a Store, user_id: &str) -> Result<&'a User> {
    store.users.get(user_id).ok_or_else(|| User::not_found(user_id))
}

/// Resolve a place id to a live place
///
/// # Errors
/// * `PlaceNotFound` - no live place under this id
pub(crate) fn resolve_place<'a>(store: &'a Store, place_id: &str) -> Result<&'a Place> {
    store
        .places
        .get(place_id)
        .ok_or_else(|| Place::not_found(place_id))
}

/// Resolve an amenity id to a live amenity
///
/// # Errors
/// * `AmenityNotFound` - no live amenity under this id
pub(crate) fn resolve_amenity<'a>(store: &'a Store, amenity_id: &str) -> Result<&'a Amenity> {
    store
        .amenities
        .get(amenity_id)
        .ok_or_else(|| Amenity::not_found(amenity_id))
}

/// Resolve a review id to a live review
///
/// # Errors
/// * `ReviewNotFound` - no live review under this id
pub(crate) fn resolve_review<'a>(store: &'a Store, review_id: &str) -> Result<&'a Review> {
    store
        .reviews
        .get(review_id)
        .ok_or_else(|| Review::not_found(review_id))
}
