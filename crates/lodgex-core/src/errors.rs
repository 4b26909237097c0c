use thiserror::Error;

/// Result type alias using the LodgeX error taxonomy
pub type Result<T> = std::result::Result<T, Error>;

/// Canonical error kind taxonomy
///
/// Every error the facade can return classifies into exactly one of these
/// kinds. The embedding layer maps kinds to its own transport codes
/// (HTTP: `Validation` -> 400, `NotFound` -> 404, `Conflict` -> 409).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A field-level rule violation; recoverable with corrected input
    Validation,
    /// A referenced id does not resolve to a live entity
    NotFound,
    /// A uniqueness constraint was violated
    Conflict,
}

impl ErrorKind {
    /// Stable snake_case code for external reporting
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation => "validation_error",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
        }
    }
}

/// Typed errors for all business operations
///
/// Variants carry the offending field or id so the message stays actionable
/// without the caller parsing strings. No variant is fatal to the process;
/// every failure is reported per-call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A constrained field failed validation
    #[error("{field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// An immutable field was supplied with a value different from current
    #[error("{field} is immutable once set")]
    ImmutableField { field: &'static str },

    /// The same amenity id appears more than once in one payload
    #[error("duplicate amenity reference: {amenity_id}")]
    DuplicateAmenityRef { amenity_id: String },

    /// No live user under this id
    #[error("user not found: {user_id}")]
    UserNotFound { user_id: String },

    /// No live place under this id
    #[error("place not found: {place_id}")]
    PlaceNotFound { place_id: String },

    /// No live amenity under this id
    #[error("amenity not found: {amenity_id}")]
    AmenityNotFound { amenity_id: String },

    /// No live review under this id
    #[error("review not found: {review_id}")]
    ReviewNotFound { review_id: String },

    /// The email is already registered to a live user
    #[error("email already registered: {email}")]
    EmailTaken { email: String },

    /// An entity with this id is already stored (defensive; ids are generated)
    #[error("id already present in store: {id}")]
    DuplicateId { id: String },
}

impl Error {
    /// Classify this error into the canonical kind taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidField { .. }
            | Self::ImmutableField { .. }
            | Self::DuplicateAmenityRef { .. } => ErrorKind::Validation,
            Self::UserNotFound { .. }
            | Self::PlaceNotFound { .. }
            | Self::AmenityNotFound { .. }
            | Self::ReviewNotFound { .. } => ErrorKind::NotFound,
            Self::EmailTaken { .. } | Self::DuplicateId { .. } => ErrorKind::Conflict,
        }
    }

    /// Stable snake_case code of this error's kind
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}
