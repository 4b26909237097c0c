//! Verified caller identity types
//!
//! The business core never inspects request-layer constructs (headers,
//! cookies, tokens). Whatever authentication the embedding layer performs,
//! the result arrives here as a plain value: either nothing, or a verified
//! user id plus the admin flag that was current when the identity was issued.

use serde::{Deserialize, Serialize};

/// A verified caller identity
///
/// Produced by the embedding layer after it has authenticated a caller.
/// The core treats it as opaque, already-trusted data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    user_id: String,
    is_admin: bool,
}

impl Identity {
    /// Create an identity from a verified user id and admin flag
    pub fn new(user_id: String, is_admin: bool) -> Self {
        Self { user_id, is_admin }
    }

    /// The verified user id
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Whether the caller held administrator privileges at verification time
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}

/// The caller of a business operation: anonymous, or a verified identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Caller {
    /// No verified identity accompanies the call
    Anonymous,
    /// A verified identity accompanies the call
    Authenticated(Identity),
}

impl Caller {
    /// The verified user id, if any
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(identity) => Some(identity.user_id()),
        }
    }

    /// Whether the caller is a verified administrator
    pub fn is_admin(&self) -> bool {
        match self {
            Self::Anonymous => false,
            Self::Authenticated(identity) => identity.is_admin(),
        }
    }

    /// Whether no verified identity accompanies the call
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_accessors() {
        let identity = Identity::new("user-1".to_string(), true);
        assert_eq!(identity.user_id(), "user-1");
        assert!(identity.is_admin());
    }

    #[test]
    fn test_anonymous_caller() {
        let caller = Caller::Anonymous;
        assert!(caller.is_anonymous());
        assert!(!caller.is_admin());
        assert_eq!(caller.user_id(), None);
    }

    #[test]
    fn test_authenticated_caller() {
        let caller = Caller::Authenticated(Identity::new("user-2".to_string(), false));
        assert!(!caller.is_anonymous());
        assert!(!caller.is_admin());
        assert_eq!(caller.user_id(), Some("user-2"));
    }

    #[test]
    fn test_identity_serde_round_trip() {
        let identity = Identity::new("user-3".to_string(), true);
        let json = serde_json::to_string(&identity).unwrap();
        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(identity, back);
    }
}
