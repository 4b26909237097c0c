//! Structured logging facility
//!
//! Single initialization point over `tracing-subscriber`. Ops emit events
//! on successful mutations; models stay silent. Embeddings pick a profile
//! once at startup; repeated calls are no-ops.

use std::sync::Once;

use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// No installed subscriber; tests assert on results, not on log output
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at application startup. `RUST_LOG` overrides the profile's
/// default filter when set.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("lodgex=debug")),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("lodgex=info")),
                )
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        // Multiple calls should not panic
        init(Profile::Test);
        init(Profile::Test);
        init(Profile::Test);
    }

    #[test]
    fn test_profile_equality() {
        assert_eq!(Profile::Development, Profile::Development);
        assert_ne!(Profile::Development, Profile::Production);
    }
}
