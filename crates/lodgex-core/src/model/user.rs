use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Error, Result};
use crate::rules::validation;

use super::Entity;

/// User - an account that can own places and write reviews
///
/// Fields are private; all mutation funnels through validated setters so a
/// stored user is always field-valid. Email uniqueness is a store-wide
/// property and is enforced in `ops`, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (UUID v7, canonical string form)
    id: String,
    first_name: String,
    last_name: String,
    email: String,
    is_admin: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Maximum accepted length for first and last names
    pub const NAME_MAX: usize = 50;

    /// Create a new user with a generated id and current timestamps
    ///
    /// # Errors
    /// * `InvalidField` - empty/over-long name, or malformed email
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        is_admin: bool,
    ) -> Result<Self> {
        validation::require_text("first_name", &first_name, Self::NAME_MAX)?;
        validation::require_text("last_name", &last_name, Self::NAME_MAX)?;
        validation::require_email(&email)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::now_v7().to_string(),
            first_name,
            last_name,
            email,
            is_admin,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Set the first name, re-running constructor validation
    ///
    /// # Errors
    /// * `InvalidField` - empty/whitespace-only or over `NAME_MAX` characters
    pub fn set_first_name(&mut self, value: String) -> Result<()> {
        validation::require_text("first_name", &value, Self::NAME_MAX)?;
        self.first_name = value;
        Ok(())
    }

    /// Set the last name, re-running constructor validation
    ///
    /// # Errors
    /// * `InvalidField` - empty/whitespace-only or over `NAME_MAX` characters
    pub fn set_last_name(&mut self, value: String) -> Result<()> {
        validation::require_text("last_name", &value, Self::NAME_MAX)?;
        self.last_name = value;
        Ok(())
    }

    /// Set the email, re-running constructor validation
    ///
    /// # Errors
    /// * `InvalidField` - the value is not `local@domain` shaped
    pub fn set_email(&mut self, value: String) -> Result<()> {
        validation::require_email(&value)?;
        self.email = value;
        Ok(())
    }

    /// Set the administrator flag (unconstrained boolean)
    pub fn set_is_admin(&mut self, value: bool) {
        self.is_admin = value;
    }
}

impl Entity for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn not_found(id: &str) -> Error {
        Error::UserNotFound {
            user_id: id.to_string(),
        }
    }
}
