//! Domain models for the four entity kinds
//!
//! Each model owns its field-level validity: construction and every setter
//! run the validators in `rules::validation`, so an instance can never exist
//! in an invalid state. Cross-entity checks (does the owner exist?) are not
//! the models' concern; they live in `ops`.

pub mod amenity;
pub mod place;
pub mod review;
pub mod user;

pub use amenity::Amenity;
pub use place::Place;
pub use review::Review;
pub use user::User;

use crate::errors::Error;

/// Behavior every stored entity exposes to the generic repository
pub trait Entity {
    /// The entity's opaque, immutable identifier
    fn id(&self) -> &str;

    /// Refresh the update timestamp; called by the repository after a
    /// successful mutation
    fn touch(&mut self);

    /// The kind-specific not-found error for this entity
    fn not_found(id: &str) -> Error;
}
