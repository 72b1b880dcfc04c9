use thiserror::Error;

/// Ways a partial update can be rejected, at decode time or after the
/// patched record is reconstructed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatchError {
    /// The payload names the record's identity field, which is immutable.
    #[error("field '{0}' is the record identity and cannot be patched")]
    IdentityFieldNotAllowed(&'static str),
    /// The payload names a field the record type does not declare.
    #[error("unknown field '{0}'")]
    UnknownField(String),
    /// The payload value does not fit the declared field type.
    #[error("invalid value for field '{field}': expected {expected}")]
    InvalidValue {
        field: &'static str,
        expected: &'static str,
    },
    /// The reconstructed record violates a field constraint.
    #[error("validation failed for field '{field}': {reason}")]
    ValidationFailed {
        field: &'static str,
        reason: String,
    },
}
