//! LodgeX Core - business logic for a short-term rental listing backend
//!
//! This crate is the single source of truth for business invariants:
//! - User, Place, Amenity, and Review models with self-validation
//! - Generic keyed in-memory repositories with insertion-order listing
//! - A facade enforcing cross-entity referential integrity with atomic
//!   (all-or-nothing) create/read/update/delete semantics
//! - A typed error taxonomy the embedding layer maps to transport codes
//!
//! State lives only in process memory; restart clears all data. Real
//! persistence is deferred to a future storage backend implementing the
//! same repository contract.

pub mod errors;
pub mod facade;
pub mod logging;
pub mod model;
pub mod ops;
pub mod payloads;
pub mod rules;
pub mod seed;

// Re-export commonly used types
pub use errors::{Error, ErrorKind, Result};
pub use facade::{Facade, SharedFacade};
pub use model::{Amenity, Place, Review, User};
pub use ops::Store;
pub use payloads::{
    AmenityUpdate, NewAmenity, NewPlace, NewReview, NewUser, PlaceUpdate, ReviewUpdate, UserUpdate,
};
pub use seed::{seed_defaults, DEFAULT_ADMIN_EMAIL, DEFAULT_AMENITIES};

// Identity types live in lodgex-core-types so embedding layers can depend
// on them without pulling in the business core
pub use lodgex_core_types::{Caller, Identity};
