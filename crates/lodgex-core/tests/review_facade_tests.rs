mod common;

use common::{create_test_place, create_test_review, create_test_user, new_facade};
use lodgex_core::{Error, ErrorKind, NewReview, ReviewUpdate};

fn review_payload(user_id: &str, place_id: &str, rating: u8) -> NewReview {
    NewReview {
        text: "Great stay".to_string(),
        rating,
        user_id: user_id.to_string(),
        place_id: place_id.to_string(),
    }
}

// ===== CREATE REVIEW TESTS =====

#[test]
fn test_create_review_with_valid_references() {
    let mut facade = new_facade();
    let owner = create_test_user(&mut facade, "owner@example.com");
    let guest = create_test_user(&mut facade, "guest@example.com");
    let place = create_test_place(&mut facade, owner.id(), &[]);

    let review = facade
        .create_review(review_payload(guest.id(), place.id(), 5))
        .unwrap();

    assert_eq!(review.text(), "Great stay");
    assert_eq!(review.rating(), 5);
    assert_eq!(review.user_id(), guest.id());
    assert_eq!(review.place_id(), place.id());
    assert_eq!(facade.get_review(review.id()).unwrap(), review);
}

#[test]
fn test_create_review_out_of_range_rating_stores_nothing() {
    let mut facade = new_facade();
    let owner = create_test_user(&mut facade, "owner@example.com");
    let guest = create_test_user(&mut facade, "guest@example.com");
    let place = create_test_place(&mut facade, owner.id(), &[]);

    for bad in [0, 6] {
        let result = facade.create_review(review_payload(guest.id(), place.id(), bad));
        match result {
            Err(err @ Error::InvalidField { field: "rating", .. }) => {
                assert_eq!(err.kind(), ErrorKind::Validation);
            }
            other => panic!("Expected rating validation error, got {other:?}"),
        }
    }
    assert!(facade.list_reviews().is_empty());
}

#[test]
fn test_create_review_missing_user_or_place() {
    let mut facade = new_facade();
    let owner = create_test_user(&mut facade, "owner@example.com");
    let guest = create_test_user(&mut facade, "guest@example.com");
    let place = create_test_place(&mut facade, owner.id(), &[]);

    let result = facade.create_review(review_payload("missing-user", place.id(), 4));
    assert!(matches!(result, Err(Error::UserNotFound { .. })));

    let result = facade.create_review(review_payload(guest.id(), "missing-place", 4));
    assert!(matches!(result, Err(Error::PlaceNotFound { .. })));

    assert!(facade.list_reviews().is_empty());
}

// ===== UPDATE REVIEW TESTS =====

#[test]
fn test_update_review_replaces_text_and_rating() {
    let mut facade = new_facade();
    let owner = create_test_user(&mut facade, "owner@example.com");
    let guest = create_test_user(&mut facade, "guest@example.com");
    let place = create_test_place(&mut facade, owner.id(), &[]);
    let review = create_test_review(&mut facade, guest.id(), place.id());

    let updated = facade
        .update_review(
            review.id(),
            ReviewUpdate {
                text: "Good, a bit pricey".to_string(),
                rating: 4,
            },
        )
        .unwrap();

    assert_eq!(updated.text(), "Good, a bit pricey");
    assert_eq!(updated.rating(), 4);
    // references never move
    assert_eq!(updated.user_id(), guest.id());
    assert_eq!(updated.place_id(), place.id());
    assert_eq!(facade.get_review(review.id()).unwrap(), updated);
}

#[test]
fn test_update_review_invalid_rating_leaves_review_unchanged() {
    let mut facade = new_facade();
    let owner = create_test_user(&mut facade, "owner@example.com");
    let guest = create_test_user(&mut facade, "guest@example.com");
    let place = create_test_place(&mut facade, owner.id(), &[]);
    let review = create_test_review(&mut facade, guest.id(), place.id());

    let result = facade.update_review(
        review.id(),
        ReviewUpdate {
            text: "Changed".to_string(),
            rating: 6,
        },
    );

    assert!(matches!(result, Err(Error::InvalidField { .. })));
    assert_eq!(facade.get_review(review.id()).unwrap(), review);
}

#[test]
fn test_update_review_fails_on_nonexistent() {
    let mut facade = new_facade();
    let result = facade.update_review(
        "nonexistent-id",
        ReviewUpdate {
            text: "X".to_string(),
            rating: 3,
        },
    );
    assert!(matches!(result, Err(Error::ReviewNotFound { .. })));
}

// ===== DELETE REVIEW TESTS =====

#[test]
fn test_delete_review_then_get_fails() {
    let mut facade = new_facade();
    let owner = create_test_user(&mut facade, "owner@example.com");
    let guest = create_test_user(&mut facade, "guest@example.com");
    let place = create_test_place(&mut facade, owner.id(), &[]);
    let review = create_test_review(&mut facade, guest.id(), place.id());

    facade.delete_review(review.id()).unwrap();

    assert!(matches!(
        facade.get_review(review.id()),
        Err(Error::ReviewNotFound { .. })
    ));
    assert!(facade.list_reviews().is_empty());
}

#[test]
fn test_delete_review_twice_fails_second_time() {
    let mut facade = new_facade();
    let owner = create_test_user(&mut facade, "owner@example.com");
    let guest = create_test_user(&mut facade, "guest@example.com");
    let place = create_test_place(&mut facade, owner.id(), &[]);
    let review = create_test_review(&mut facade, guest.id(), place.id());

    facade.delete_review(review.id()).unwrap();
    let result = facade.delete_review(review.id());

    assert!(matches!(result, Err(Error::ReviewNotFound { .. })));
}

#[test]
fn test_delete_review_fails_on_nonexistent() {
    let mut facade = new_facade();
    let result = facade.delete_review("nonexistent-id");
    assert!(matches!(result, Err(Error::ReviewNotFound { .. })));
}

// ===== LIST BY PLACE TESTS =====

#[test]
fn test_list_reviews_by_place_filters_and_orders() {
    let mut facade = new_facade();
    let owner = create_test_user(&mut facade, "owner@example.com");
    let guest = create_test_user(&mut facade, "guest@example.com");
    let reviewed = create_test_place(&mut facade, owner.id(), &[]);
    let other = create_test_place(&mut facade, owner.id(), &[]);

    let first = create_test_review(&mut facade, guest.id(), reviewed.id());
    create_test_review(&mut facade, guest.id(), other.id());
    let second = create_test_review(&mut facade, owner.id(), reviewed.id());

    let listed = facade.list_reviews_by_place(reviewed.id()).unwrap();
    let ids: Vec<_> = listed.iter().map(|r| r.id().to_string()).collect();
    assert_eq!(ids, [first.id(), second.id()]);
}

#[test]
fn test_list_reviews_by_place_fails_on_unknown_place() {
    let facade = new_facade();
    let result = facade.list_reviews_by_place("nonexistent-id");
    assert!(matches!(result, Err(Error::PlaceNotFound { .. })));
}

#[test]
fn test_deleted_review_disappears_from_place_listing() {
    let mut facade = new_facade();
    let owner = create_test_user(&mut facade, "owner@example.com");
    let guest = create_test_user(&mut facade, "guest@example.com");
    let place = create_test_place(&mut facade, owner.id(), &[]);
    let review = create_test_review(&mut facade, guest.id(), place.id());

    facade.delete_review(review.id()).unwrap();

    assert!(facade.list_reviews_by_place(place.id()).unwrap().is_empty());
}
