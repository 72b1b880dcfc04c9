use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::patch::PatchError;

/// Errors that can occur during employee operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EmployeeError {
    #[error("Employee not found: {0}")]
    NotFound(String),
    #[error("Employee request rejected: {0}")]
    Patch(#[from] PatchError),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<FrameworkError> for EmployeeError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => EmployeeError::NotFound(id),
            FrameworkError::Patch(e) => EmployeeError::Patch(e),
            other => EmployeeError::ActorCommunication(other.to_string()),
        }
    }
}
