use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::patch::PatchError;

/// Errors that can occur during book operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookError {
    #[error("Book not found: {0}")]
    NotFound(String),
    #[error("Book request rejected: {0}")]
    Patch(#[from] PatchError),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<FrameworkError> for BookError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => BookError::NotFound(id),
            FrameworkError::Patch(e) => BookError::Patch(e),
            other => BookError::ActorCommunication(other.to_string()),
        }
    }
}
