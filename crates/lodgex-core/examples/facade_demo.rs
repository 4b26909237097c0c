//! Facade API Demonstration
//!
//! An end-to-end walkthrough of the LodgeX business core:
//! 1. Seeding default data
//! 2. Creating users, amenities, places, and reviews
//! 3. Cross-entity reference validation
//! 4. Atomic failure (nothing stored on error)
//! 5. Review update and deletion

use lodgex_core::{
    logging, seed_defaults, Caller, Facade, NewPlace, NewReview, NewUser, ReviewUpdate,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(logging::Profile::Development);

    println!("=== LodgeX Facade Demo ===\n");

    let mut facade = Facade::new();

    // ===== Part 1: Seed defaults =====
    let admin = seed_defaults(&mut facade)?;
    println!("Seeded default data (admin user {})", admin.user_id());
    println!("Stock amenities: {}", facade.list_amenities().len());

    // the embedding layer would hand this to request handlers
    let caller = Caller::Authenticated(admin.clone());
    println!(
        "Caller {} is admin: {}\n",
        caller.user_id().unwrap_or("<anonymous>"),
        caller.is_admin()
    );

    // ===== Part 2: Users and a place =====
    let owner = facade.create_user(NewUser {
        first_name: "Alice".to_string(),
        last_name: "Smith".to_string(),
        email: "alice@example.com".to_string(),
        is_admin: false,
    })?;
    let guest = facade.create_user(NewUser {
        first_name: "Bob".to_string(),
        last_name: "Jones".to_string(),
        email: "bob@example.com".to_string(),
        is_admin: false,
    })?;
    println!("Created users {} and {}", owner.first_name(), guest.first_name());

    let amenity_ids: Vec<String> = facade
        .list_amenities()
        .iter()
        .map(|a| a.id().to_string())
        .collect();

    let place = facade.create_place(NewPlace {
        title: "Luxury Beach House".to_string(),
        description: Some("Beautiful beach house with ocean view".to_string()),
        price: 250.0,
        latitude: 34.0522,
        longitude: -118.2437,
        owner_id: owner.id().to_string(),
        amenity_ids,
    })?;
    println!(
        "Created place '{}' with {} amenities\n",
        place.title(),
        place.amenity_ids().len()
    );

    // ===== Part 3: Reference validation =====
    let bad = facade.create_place(NewPlace {
        title: "Phantom Flat".to_string(),
        description: None,
        price: 90.0,
        latitude: 48.8566,
        longitude: 2.3522,
        owner_id: "no-such-user".to_string(),
        amenity_ids: Vec::new(),
    });
    println!(
        "Creating a place for a missing owner fails: {} (kind {})",
        bad.as_ref().unwrap_err(),
        bad.as_ref().unwrap_err().code()
    );
    println!("Store still holds {} place(s)\n", facade.list_places().len());

    // ===== Part 4: Reviews =====
    let review = facade.create_review(NewReview {
        text: "Absolutely amazing! The view was breathtaking.".to_string(),
        rating: 5,
        user_id: guest.id().to_string(),
        place_id: place.id().to_string(),
    })?;
    println!("Created a {}-star review", review.rating());

    let updated = facade.update_review(
        review.id(),
        ReviewUpdate {
            text: "Great place, but a bit pricey.".to_string(),
            rating: 4,
        },
    )?;
    println!("Updated review to {} stars", updated.rating());

    facade.delete_review(updated.id())?;
    println!(
        "Deleted the review; place now has {} review(s)",
        facade.list_reviews_by_place(place.id())?.len()
    );

    // ===== Part 5: Integrity =====
    let violations = facade.check_invariants();
    println!("\nIntegrity violations: {}", violations.len());

    Ok(())
}
