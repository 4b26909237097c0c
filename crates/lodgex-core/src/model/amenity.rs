use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Error, Result};
use crate::rules::validation;

use super::Entity;

/// Amenity - a standalone feature places can reference
///
/// Places hold amenity ids but do not own amenity lifecycle. Name
/// uniqueness is deliberately not required; two amenities may share a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    /// Unique identifier (UUID v7, canonical string form)
    id: String,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Amenity {
    /// Maximum accepted name length
    pub const NAME_MAX: usize = 50;

    /// Create a new amenity with a generated id and current timestamps
    ///
    /// # Errors
    /// * `InvalidField` - empty/whitespace-only or over-long name
    pub fn new(name: String) -> Result<Self> {
        validation::require_text("name", &name, Self::NAME_MAX)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::now_v7().to_string(),
            name,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Set the name, re-running constructor validation
    ///
    /// # Errors
    /// * `InvalidField` - empty/whitespace-only or over `NAME_MAX` characters
    pub fn set_name(&mut self, value: String) -> Result<()> {
        validation::require_text("name", &value, Self::NAME_MAX)?;
        self.name = value;
        Ok(())
    }
}

impl Entity for Amenity {
    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn not_found(id: &str) -> Error {
        Error::AmenityNotFound {
            amenity_id: id.to_string(),
        }
    }
}
