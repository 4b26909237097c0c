//! Default data seeding
//!
//! Creates the stock records a fresh deployment expects: one administrator
//! account and the standard amenity set. Idempotent — safe to run on every
//! startup against a store that may already hold the defaults.

use lodgex_core_types::Identity;
use tracing::info;

use crate::errors::Result;
use crate::facade::Facade;
use crate::payloads::{NewAmenity, NewUser, UserUpdate};

/// Email of the default administrator account
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@lodgex.local";

/// Amenities every fresh deployment starts with
pub const DEFAULT_AMENITIES: [&str; 3] = ["WiFi", "Swimming Pool", "Air Conditioning"];

/// Seed the default administrator and amenity set
///
/// Existing records are left alone, except that an administrator account
/// which lost its admin flag is promoted back. Returns the administrator's
/// verified identity for the embedding application.
///
/// # Errors
/// Propagates facade errors; none occur against a store whose invariants
/// hold.
pub fn seed_defaults(facade: &mut Facade) -> Result<Identity> {
    let admin = match facade.get_user_by_email(DEFAULT_ADMIN_EMAIL) {
        Some(user) if user.is_admin() => user,
        Some(user) => {
            // Promote a demoted admin account back
            let promoted = facade.update_user(
                user.id(),
                UserUpdate {
                    first_name: user.first_name().to_string(),
                    last_name: user.last_name().to_string(),
                    email: user.email().to_string(),
                    is_admin: true,
                },
            )?;
            info!(user_id = %promoted.id(), "admin account promoted");
            promoted
        }
        None => {
            let created = facade.create_user(NewUser {
                first_name: "Admin".to_string(),
                last_name: "User".to_string(),
                email: DEFAULT_ADMIN_EMAIL.to_string(),
                is_admin: true,
            })?;
            info!(user_id = %created.id(), "admin account created");
            created
        }
    };

    for name in DEFAULT_AMENITIES {
        let present = facade
            .list_amenities()
            .iter()
            .any(|amenity| amenity.name() == name);
        if !present {
            facade.create_amenity(NewAmenity {
                name: name.to_string(),
            })?;
        }
    }

    Ok(Identity::new(admin.id().to_string(), admin.is_admin()))
}
