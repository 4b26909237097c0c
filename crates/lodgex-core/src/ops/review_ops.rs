use tracing::info;

use super::{resolve_place, resolve_review, resolve_user, store::Store};
use crate::errors::Result;
use crate::model::Review;
use crate::payloads::{NewReview, ReviewUpdate};

/// Create a new review
///
/// Both references must resolve before anything is constructed; whichever
/// is missing is named in the error. Field validation happens inside the
/// model constructor.
///
/// # Errors
/// * `UserNotFound` - the user id does not resolve
/// * `PlaceNotFound` - the place id does not resolve
/// * `InvalidField` - empty text or rating outside 1..=5
pub fn create_review(store: &mut Store, payload: NewReview) -> Result<Review> {
    resolve_user(store, &payload.user_id)?;
    resolve_place(store, &payload.place_id)?;

    let review = Review::new(
        payload.text,
        payload.rating,
        payload.user_id,
        payload.place_id,
    )?;
    store.reviews.add(review.clone())?;

    info!(review_id = %review.id(), place_id = %review.place_id(), "review created");
    Ok(review)
}

/// Read a review by id
///
/// # Errors
/// * `ReviewNotFound` - no live review under this id
pub fn get_review(store: &Store, review_id: &str) -> Result<Review> {
    resolve_review(store, review_id).cloned()
}

/// Snapshot of all reviews in insertion order
pub fn list_reviews(store: &Store) -> Vec<Review> {
    store.reviews.list()
}

/// All reviews referencing one place, in insertion order
///
/// # Errors
/// * `PlaceNotFound` - no live place under this id
pub fn list_reviews_by_place(store: &Store, place_id: &str) -> Result<Vec<Review>> {
    resolve_place(store, place_id)?;
    Ok(store
        .reviews
        .iter()
        .filter(|review| review.place_id() == place_id)
        .cloned()
        .collect())
}

/// Full-replace update of a review's mutable fields (text and rating)
///
/// The user and place references are immutable; the payload cannot carry
/// them.
///
/// # Errors
/// * `ReviewNotFound` - no live review under this id
/// * `InvalidField` - empty text or rating outside 1..=5
pub fn update_review(store: &mut Store, review_id: &str, payload: ReviewUpdate) -> Result<Review> {
    let updated = store.reviews.update(review_id, |review| {
        review.set_text(payload.text)?;
        review.set_rating(payload.rating)
    })?;

    info!(review_id = %updated.id(), "review updated");
    Ok(updated)
}

/// Delete a review
///
/// The only delete operation in the system; Users, Places, and Amenities
/// deliberately have none.
///
/// # Errors
/// * `ReviewNotFound` - no live review under this id
pub fn delete_review(store: &mut Store, review_id: &str) -> Result<()> {
    store.reviews.delete(review_id)?;

    info!(review_id, "review deleted");
    Ok(())
}
