use tracing::info;

use super::{resolve_user, store::Store};
use crate::errors::{Error, Result};
use crate::model::User;
use crate::payloads::{NewUser, UserUpdate};

/// Create a new user
///
/// The email uniqueness check runs first, against the full live user set;
/// field validation happens inside the model constructor.
///
/// # Arguments
/// * `store` - Mutable reference to the store
/// * `payload` - The complete set of user fields
///
/// # Errors
/// * `EmailTaken` - the email belongs to a live user
/// * `InvalidField` - a field failed validation
pub fn create_user(store: &mut Store, payload: NewUser) -> Result<User> {
    if get_user_by_email(store, &payload.email).is_some() {
        return Err(Error::EmailTaken {
            email: payload.email,
        });
    }

    let user = User::new(
        payload.first_name,
        payload.last_name,
        payload.email,
        payload.is_admin,
    )?;
    store.users.add(user.clone())?;

    info!(user_id = %user.id(), "user created");
    Ok(user)
}

/// Read a user by id
///
/// # Errors
/// * `UserNotFound` - no live user under this id
pub fn get_user(store: &Store, user_id: &str) -> Result<User> {
    resolve_user(store, user_id).cloned()
}

/// Look a user up by email; absence is a normal result
///
/// Supports the uniqueness check and whatever login flow the embedding
/// layer runs. Scans in insertion order.
pub fn get_user_by_email(store: &Store, email: &str) -> Option<User> {
    store.users.iter().find(|u| u.email() == email).cloned()
}

/// Snapshot of all users in insertion order
pub fn list_users(store: &Store) -> Vec<User> {
    store.users.list()
}

/// Full-replace update of a user's mutable fields
///
/// Email uniqueness is re-checked against every other live user before any
/// mutation, keeping the uniqueness invariant true at all times.
///
/// # Errors
/// * `UserNotFound` - no live user under this id
/// * `EmailTaken` - the new email belongs to a different live user
/// * `InvalidField` - a field failed validation
pub fn update_user(store: &mut Store, user_id: &str, payload: UserUpdate) -> Result<User> {
    resolve_user(store, user_id)?;

    if let Some(existing) = get_user_by_email(store, &payload.email) {
        if existing.id() != user_id {
            return Err(Error::EmailTaken {
                email: payload.email,
            });
        }
    }

    let updated = store.users.update(user_id, |user| {
        user.set_first_name(payload.first_name)?;
        user.set_last_name(payload.last_name)?;
        user.set_email(payload.email)?;
        user.set_is_admin(payload.is_admin);
        Ok(())
    })?;

    info!(user_id = %updated.id(), "user updated");
    Ok(updated)
}
