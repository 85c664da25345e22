//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Instruction string matched neither the standard nor the legacy grammar
    #[error("Malformed instructions: {0}")]
    MalformedInstruction(String),

    /// A captured instruction field is outside its enum or numeric range
    #[error("Invalid {field}: '{value}' (allowed: {allowed})")]
    InvalidField {
        field: &'static str,
        value: String,
        allowed: String,
    },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an invalid-field error
    pub fn invalid_field(
        field: &'static str,
        value: impl Into<String>,
        allowed: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
            allowed: allowed.into(),
        }
    }
}
