//! Store-wide referential integrity scans
//!
//! The ops layer maintains these invariants operation by operation; the
//! scans here detect violations after the fact. They are meant for tests
//! and diagnostics, not for per-operation use — a healthy store always
//! scans clean.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use crate::ops::Store;

/// One detected integrity violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A place's owner id does not resolve to a live user
    DanglingOwner { place_id: String, owner_id: String },
    /// A place references an amenity id that does not resolve
    DanglingAmenity { place_id: String, amenity_id: String },
    /// A review's user id does not resolve to a live user
    DanglingReviewUser { review_id: String, user_id: String },
    /// A review's place id does not resolve to a live place
    DanglingReviewPlace { review_id: String, place_id: String },
    /// More than one live user holds the same email
    DuplicateEmail { email: String, user_ids: Vec<String> },
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingOwner { place_id, owner_id } => {
                write!(f, "place {place_id} references missing owner {owner_id}")
            }
            Self::DanglingAmenity {
                place_id,
                amenity_id,
            } => {
                write!(f, "place {place_id} references missing amenity {amenity_id}")
            }
            Self::DanglingReviewUser { review_id, user_id } => {
                write!(f, "review {review_id} references missing user {user_id}")
            }
            Self::DanglingReviewPlace {
                review_id,
                place_id,
            } => {
                write!(f, "review {review_id} references missing place {place_id}")
            }
            Self::DuplicateEmail { email, user_ids } => {
                write!(f, "email {email} held by {} users", user_ids.len())
            }
        }
    }
}

/// Find places whose owner id does not resolve
pub fn find_dangling_owners(store: &Store) -> Vec<Violation> {
    store
        .places
        .iter()
        .filter(|place| store.users.get(place.owner_id()).is_none())
        .map(|place| Violation::DanglingOwner {
            place_id: place.id().to_string(),
            owner_id: place.owner_id().to_string(),
        })
        .collect()
}

/// Find place->amenity references that do not resolve
pub fn find_dangling_amenities(store: &Store) -> Vec<Violation> {
    let mut violations = Vec::new();
    for place in store.places.iter() {
        for amenity_id in place.amenity_ids() {
            if store.amenities.get(amenity_id).is_none() {
                violations.push(Violation::DanglingAmenity {
                    place_id: place.id().to_string(),
                    amenity_id: amenity_id.clone(),
                });
            }
        }
    }
    violations
}

/// Find reviews whose user or place reference does not resolve
pub fn find_dangling_review_refs(store: &Store) -> Vec<Violation> {
    let mut violations = Vec::new();
    for review in store.reviews.iter() {
        if store.users.get(review.user_id()).is_none() {
            violations.push(Violation::DanglingReviewUser {
                review_id: review.id().to_string(),
                user_id: review.user_id().to_string(),
            });
        }
        if store.places.get(review.place_id()).is_none() {
            violations.push(Violation::DanglingReviewPlace {
                review_id: review.id().to_string(),
                place_id: review.place_id().to_string(),
            });
        }
    }
    violations
}

/// Find emails held by more than one live user
pub fn find_duplicate_emails(store: &Store) -> Vec<Violation> {
    let mut by_email: HashMap<&str, Vec<String>> = HashMap::new();
    for user in store.users.iter() {
        by_email
            .entry(user.email())
            .or_default()
            .push(user.id().to_string());
    }

    let mut violations: Vec<Violation> = by_email
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|(email, user_ids)| Violation::DuplicateEmail {
            email: email.to_string(),
            user_ids,
        })
        .collect();
    // HashMap iteration order is unstable; keep output deterministic
    violations.sort_by(|a, b| format!("{a}").cmp(&format!("{b}")));
    violations
}

/// Run every scan and collect all violations
///
/// An empty result means the store satisfies every referential integrity
/// invariant.
pub fn scan_store(store: &Store) -> Vec<Violation> {
    let mut violations = find_dangling_owners(store);
    violations.extend(find_dangling_amenities(store));
    violations.extend(find_dangling_review_refs(store));
    violations.extend(find_duplicate_emails(store));
    violations
}
