use tracing::info;

use super::{resolve_amenity, store::Store};
use crate::errors::Result;
use crate::model::Amenity;
use crate::payloads::{AmenityUpdate, NewAmenity};

/// Create a new amenity
///
/// No cross-entity checks and no name uniqueness; two amenities may share
/// a name.
///
/// # Errors
/// * `InvalidField` - empty/whitespace-only or over-long name
pub fn create_amenity(store: &mut Store, payload: NewAmenity) -> Result<Amenity> {
    let amenity = Amenity::new(payload.name)?;
    store.amenities.add(amenity.clone())?;

    info!(amenity_id = %amenity.id(), "amenity created");
    Ok(amenity)
}

/// Read an amenity by id
///
/// # Errors
/// * `AmenityNotFound` - no live amenity under this id
pub fn get_amenity(store: &Store, amenity_id: &str) -> Result<Amenity> {
    resolve_amenity(store, amenity_id).cloned()
}

/// Snapshot of all amenities in insertion order
pub fn list_amenities(store: &Store) -> Vec<Amenity> {
    store.amenities.list()
}

/// Full-replace update of an amenity's mutable fields
///
/// # Errors
/// * `AmenityNotFound` - no live amenity under this id
/// * `InvalidField` - the new name failed validation
pub fn update_amenity(
    store: &mut Store,
    amenity_id: &str,
    payload: AmenityUpdate,
) -> Result<Amenity> {
    let updated = store
        .amenities
        .update(amenity_id, |amenity| amenity.set_name(payload.name))?;

    info!(amenity_id = %updated.id(), "amenity updated");
    Ok(updated)
}
