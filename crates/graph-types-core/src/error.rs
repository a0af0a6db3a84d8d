//! Error types for registry configuration.

use thiserror::Error;

/// Errors that occur while populating a registry.
///
/// These signal a configuration mistake by the caller and are expected to
/// abort startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    /// A mapping for this host type already exists.
    #[error("duplicate registration: {type_name} is already mapped to {existing}")]
    DuplicateRegistration {
        /// The host type that was registered twice.
        type_name: String,
        /// The descriptor it is already mapped to.
        existing: String,
    },
}
