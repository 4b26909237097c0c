use lodgex_core::{Amenity, Facade, NewAmenity, NewPlace, NewReview, NewUser, Place, Review, User};

/// Create a fresh isolated facade for testing
#[allow(dead_code)]
pub fn new_facade() -> Facade {
    Facade::new()
}

/// Payload for a valid user with the given email
#[allow(dead_code)]
pub fn user_payload(email: &str) -> NewUser {
    NewUser {
        first_name: "Alice".to_string(),
        last_name: "Smith".to_string(),
        email: email.to_string(),
        is_admin: false,
    }
}

/// Payload for a valid place owned by `owner_id`
#[allow(dead_code)]
pub fn place_payload(owner_id: &str) -> NewPlace {
    NewPlace {
        title: "Beach House".to_string(),
        description: Some("Ocean view".to_string()),
        price: 250.0,
        latitude: 34.0522,
        longitude: -118.2437,
        owner_id: owner_id.to_string(),
        amenity_ids: Vec::new(),
    }
}

/// Create a user through the facade
#[allow(dead_code)]
pub fn create_test_user(facade: &mut Facade, email: &str) -> User {
    facade.create_user(user_payload(email)).unwrap()
}

/// Create an amenity through the facade
#[allow(dead_code)]
pub fn create_test_amenity(facade: &mut Facade, name: &str) -> Amenity {
    facade
        .create_amenity(NewAmenity {
            name: name.to_string(),
        })
        .unwrap()
}

/// Create a place through the facade, attached to the given amenities
#[allow(dead_code)]
pub fn create_test_place(facade: &mut Facade, owner_id: &str, amenity_ids: &[&str]) -> Place {
    let mut payload = place_payload(owner_id);
    payload.amenity_ids = amenity_ids.iter().map(|id| (*id).to_string()).collect();
    facade.create_place(payload).unwrap()
}

/// Create a five-star review through the facade
#[allow(dead_code)]
pub fn create_test_review(facade: &mut Facade, user_id: &str, place_id: &str) -> Review {
    facade
        .create_review(NewReview {
            text: "Great stay".to_string(),
            rating: 5,
            user_id: user_id.to_string(),
            place_id: place_id.to_string(),
        })
        .unwrap()
}
