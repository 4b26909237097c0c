//! External-representation round trips
//!
//! A created entity serialized to its external JSON record and fed back
//! through the same creation path (id and timestamps ignored by the payload
//! types) must yield an entity equal in all user-supplied fields.

mod common;

use common::{create_test_amenity, create_test_place, create_test_review, create_test_user, new_facade};
use lodgex_core::{NewAmenity, NewPlace, NewReview, NewUser};

#[test]
fn test_user_round_trip() {
    let mut facade = new_facade();
    let created = create_test_user(&mut facade, "alice@example.com");

    let json = serde_json::to_value(&created).unwrap();
    let payload: NewUser = serde_json::from_value(json).unwrap();

    // recreate in a fresh facade; the email is unique per store
    let mut other = new_facade();
    let recreated = other.create_user(payload).unwrap();

    assert_ne!(recreated.id(), created.id());
    assert_eq!(recreated.first_name(), created.first_name());
    assert_eq!(recreated.last_name(), created.last_name());
    assert_eq!(recreated.email(), created.email());
    assert_eq!(recreated.is_admin(), created.is_admin());
}

#[test]
fn test_amenity_round_trip() {
    let mut facade = new_facade();
    let created = create_test_amenity(&mut facade, "WiFi");

    let json = serde_json::to_value(&created).unwrap();
    let payload: NewAmenity = serde_json::from_value(json).unwrap();
    let recreated = facade.create_amenity(payload).unwrap();

    assert_ne!(recreated.id(), created.id());
    assert_eq!(recreated.name(), created.name());
}

#[test]
fn test_place_round_trip() {
    let mut facade = new_facade();
    let owner = create_test_user(&mut facade, "owner@example.com");
    let wifi = create_test_amenity(&mut facade, "WiFi");
    let created = create_test_place(&mut facade, owner.id(), &[wifi.id()]);

    let json = serde_json::to_value(&created).unwrap();
    let payload: NewPlace = serde_json::from_value(json).unwrap();
    let recreated = facade.create_place(payload).unwrap();

    assert_ne!(recreated.id(), created.id());
    assert_eq!(recreated.title(), created.title());
    assert_eq!(recreated.description(), created.description());
    assert_eq!(recreated.price(), created.price());
    assert_eq!(recreated.latitude(), created.latitude());
    assert_eq!(recreated.longitude(), created.longitude());
    assert_eq!(recreated.owner_id(), created.owner_id());
    assert_eq!(recreated.amenity_ids(), created.amenity_ids());
}

#[test]
fn test_review_round_trip() {
    let mut facade = new_facade();
    let owner = create_test_user(&mut facade, "owner@example.com");
    let guest = create_test_user(&mut facade, "guest@example.com");
    let place = create_test_place(&mut facade, owner.id(), &[]);
    let created = create_test_review(&mut facade, guest.id(), place.id());

    let json = serde_json::to_value(&created).unwrap();
    let payload: NewReview = serde_json::from_value(json).unwrap();
    let recreated = facade.create_review(payload).unwrap();

    assert_ne!(recreated.id(), created.id());
    assert_eq!(recreated.text(), created.text());
    assert_eq!(recreated.rating(), created.rating());
    assert_eq!(recreated.user_id(), created.user_id());
    assert_eq!(recreated.place_id(), created.place_id());
}
