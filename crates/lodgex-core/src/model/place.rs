use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Error, Result};
use crate::rules::validation;

use super::Entity;

/// Place - a rental listing owned by exactly one user
///
/// The owner reference is set at construction and has no setter: it is
/// immutable for the lifetime of the place. Amenity references are held as
/// ids; their existence is the ops layer's concern, duplicate rejection is
/// handled here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Unique identifier (UUID v7, canonical string form)
    id: String,
    title: String,
    description: Option<String>,
    /// Price per night; finite and strictly positive
    price: f64,
    /// Latitude in decimal degrees, -90..=90
    latitude: f64,
    /// Longitude in decimal degrees, -180..=180
    longitude: f64,
    /// Id of the owning user; immutable after construction
    owner_id: String,
    /// Ids of attached amenities, insertion order, no duplicates
    amenity_ids: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Place {
    /// Maximum accepted title length
    pub const TITLE_MAX: usize = 100;

    /// Create a new place with a generated id and current timestamps
    ///
    /// # Errors
    /// * `InvalidField` - empty/over-long title, non-positive price, or
    ///   out-of-range coordinates
    /// * `DuplicateAmenityRef` - the same amenity id appears twice
    pub fn new(
        title: String,
        description: Option<String>,
        price: f64,
        latitude: f64,
        longitude: f64,
        owner_id: String,
        amenity_ids: Vec<String>,
    ) -> Result<Self> {
        validation::require_text("title", &title, Self::TITLE_MAX)?;
        validation::require_positive("price", price)?;
        validation::require_range("latitude", latitude, -90.0, 90.0)?;
        validation::require_range("longitude", longitude, -180.0, 180.0)?;
        Self::check_amenity_dupes(&amenity_ids)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::now_v7().to_string(),
            title,
            description,
            price,
            latitude,
            longitude,
            owner_id,
            amenity_ids,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn amenity_ids(&self) -> &[String] {
        &self.amenity_ids
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Set the title, re-running constructor validation
    ///
    /// # Errors
    /// * `InvalidField` - empty/whitespace-only or over `TITLE_MAX` characters
    pub fn set_title(&mut self, value: String) -> Result<()> {
        validation::require_text("title", &value, Self::TITLE_MAX)?;
        self.title = value;
        Ok(())
    }

    /// Set the optional description (unconstrained)
    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    /// Set the nightly price
    ///
    /// # Errors
    /// * `InvalidField` - non-finite, zero, or negative
    pub fn set_price(&mut self, value: f64) -> Result<()> {
        validation::require_positive("price", value)?;
        self.price = value;
        Ok(())
    }

    /// Set the latitude
    ///
    /// # Errors
    /// * `InvalidField` - non-finite or outside -90..=90
    pub fn set_latitude(&mut self, value: f64) -> Result<()> {
        validation::require_range("latitude", value, -90.0, 90.0)?;
        self.latitude = value;
        Ok(())
    }

    /// Set the longitude
    ///
    /// # Errors
    /// * `InvalidField` - non-finite or outside -180..=180
    pub fn set_longitude(&mut self, value: f64) -> Result<()> {
        validation::require_range("longitude", value, -180.0, 180.0)?;
        self.longitude = value;
        Ok(())
    }

    /// Replace the full amenity reference list
    ///
    /// Existence of each id is checked by the ops layer before this is
    /// called; the model only rejects duplicates.
    ///
    /// # Errors
    /// * `DuplicateAmenityRef` - the same amenity id appears twice
    pub fn set_amenity_ids(&mut self, ids: Vec<String>) -> Result<()> {
        Self::check_amenity_dupes(&ids)?;
        self.amenity_ids = ids;
        Ok(())
    }

    fn check_amenity_dupes(ids: &[String]) -> Result<()> {
        for (index, id) in ids.iter().enumerate() {
            if ids[..index].contains(id) {
                return Err(Error::DuplicateAmenityRef {
                    amenity_id: id.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Entity for Place {
    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn not_found(id: &str) -> Error {
        Error::PlaceNotFound {
            place_id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_place() -> Place {
        Place::new(
            "Beach House".to_string(),
            Some("Ocean view".to_string()),
            250.0,
            34.0522,
            -118.2437,
            "owner-1".to_string(),
            vec!["am-1".to_string(), "am-2".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_new_place_keeps_supplied_fields() {
        let place = valid_place();
        assert_eq!(place.title(), "Beach House");
        assert_eq!(place.description(), Some("Ocean view"));
        assert_eq!(place.price(), 250.0);
        assert_eq!(place.owner_id(), "owner-1");
        assert_eq!(place.amenity_ids().len(), 2);
    }

    #[test]
    fn test_new_place_rejects_non_positive_price() {
        for bad in [0.0, -1.0, f64::NAN] {
            let result = Place::new(
                "T".to_string(),
                None,
                bad,
                0.0,
                0.0,
                "owner-1".to_string(),
                Vec::new(),
            );
            assert!(matches!(
                result,
                Err(Error::InvalidField { field: "price", .. })
            ));
        }
    }

    #[test]
    fn test_new_place_rejects_out_of_range_coordinates() {
        let result = Place::new(
            "T".to_string(),
            None,
            10.0,
            90.5,
            0.0,
            "owner-1".to_string(),
            Vec::new(),
        );
        assert!(matches!(
            result,
            Err(Error::InvalidField { field: "latitude", .. })
        ));

        let result = Place::new(
            "T".to_string(),
            None,
            10.0,
            0.0,
            -180.5,
            "owner-1".to_string(),
            Vec::new(),
        );
        assert!(matches!(
            result,
            Err(Error::InvalidField { field: "longitude", .. })
        ));
    }

    #[test]
    fn test_new_place_rejects_duplicate_amenity_ids() {
        let result = Place::new(
            "T".to_string(),
            None,
            10.0,
            0.0,
            0.0,
            "owner-1".to_string(),
            vec!["am-1".to_string(), "am-1".to_string()],
        );
        assert!(matches!(result, Err(Error::DuplicateAmenityRef { .. })));
    }

    #[test]
    fn test_boundary_coordinates_accepted() {
        let place = Place::new(
            "Poles".to_string(),
            None,
            1.0,
            -90.0,
            180.0,
            "owner-1".to_string(),
            Vec::new(),
        );
        assert!(place.is_ok());
    }

    #[test]
    fn test_failed_setter_leaves_place_unchanged() {
        let mut place = valid_place();
        assert!(place.set_price(-5.0).is_err());
        assert_eq!(place.price(), 250.0);

        assert!(place
            .set_amenity_ids(vec!["a".to_string(), "a".to_string()])
            .is_err());
        assert_eq!(place.amenity_ids().len(), 2);
    }
}
