use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::patch::PatchError;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("User request rejected: {0}")]
    Patch(#[from] PatchError),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<FrameworkError> for UserError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::Patch(e) => UserError::Patch(e),
            other => UserError::ActorCommunication(other.to_string()),
        }
    }
}
