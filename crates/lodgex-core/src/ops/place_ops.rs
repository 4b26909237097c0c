use tracing::info;

use super::{resolve_amenity, resolve_place, resolve_user, store::Store};
use crate::errors::{Error, Result};
use crate::model::Place;
use crate::payloads::{NewPlace, PlaceUpdate};

/// Create a new place
///
/// Reference resolution runs before any construction: the owner must be a
/// live user and every amenity id must resolve, with duplicates rejected.
/// Field validation happens inside the model constructor.
///
/// # Errors
/// * `UserNotFound` - the owner id does not resolve
/// * `AmenityNotFound` - an amenity id does not resolve (named in the error)
/// * `DuplicateAmenityRef` - the same amenity id appears twice
/// * `InvalidField` - a field failed validation
pub fn create_place(store: &mut Store, payload: NewPlace) -> Result<Place> {
    resolve_user(store, &payload.owner_id)?;
    check_amenity_refs(store, &payload.amenity_ids)?;

    let place = Place::new(
        payload.title,
        payload.description,
        payload.price,
        payload.latitude,
        payload.longitude,
        payload.owner_id,
        payload.amenity_ids,
    )?;
    store.places.add(place.clone())?;

    info!(place_id = %place.id(), owner_id = %place.owner_id(), "place created");
    Ok(place)
}

/// Read a place by id
///
/// # Errors
/// * `PlaceNotFound` - no live place under this id
pub fn get_place(store: &Store, place_id: &str) -> Result<Place> {
    resolve_place(store, place_id).cloned()
}

/// Snapshot of all places in insertion order
pub fn list_places(store: &Store) -> Vec<Place> {
    store.places.list()
}

/// Full-replace update of a place's mutable fields
///
/// The owner is immutable: a payload carrying an `owner_id` different from
/// the current one is rejected before anything else is looked at. Amenity
/// ids are re-resolved exactly as in create, and every check runs before
/// any mutation, so a failed update leaves the stored place untouched.
///
/// # Errors
/// * `PlaceNotFound` - no live place under this id
/// * `ImmutableField` - the payload tries to change the owner
/// * `AmenityNotFound` - an amenity id does not resolve (named in the error)
/// * `DuplicateAmenityRef` - the same amenity id appears twice
/// * `InvalidField` - a field failed validation
pub fn update_place(store: &mut Store, place_id: &str, payload: PlaceUpdate) -> Result<Place> {
    let current = resolve_place(store, place_id)?;

    if let Some(owner_id) = payload.owner_id.as_deref() {
        if owner_id != current.owner_id() {
            return Err(Error::ImmutableField { field: "owner_id" });
        }
    }
    check_amenity_refs(store, &payload.amenity_ids)?;

    let updated = store.places.update(place_id, |place| {
        place.set_title(payload.title)?;
        place.set_description(payload.description);
        place.set_price(payload.price)?;
        place.set_latitude(payload.latitude)?;
        place.set_longitude(payload.longitude)?;
        place.set_amenity_ids(payload.amenity_ids)?;
        Ok(())
    })?;

    info!(place_id = %updated.id(), "place updated");
    Ok(updated)
}

/// Check a full amenity reference list: every id resolves, no duplicates
///
/// Shared by the create and update paths so the two can never diverge.
///
/// # Errors
/// * `AmenityNotFound` - an id does not resolve (named in the error)
/// * `DuplicateAmenityRef` - the same id appears twice
fn check_amenity_refs(store: &Store, amenity_ids: &[String]) -> Result<()> {
    for (index, amenity_id) in amenity_ids.iter().enumerate() {
        resolve_amenity(store, amenity_id)?;
        if amenity_ids[..index].contains(amenity_id) {
            return Err(Error::DuplicateAmenityRef {
                amenity_id: amenity_id.clone(),
            });
        }
    }
    Ok(())
}
