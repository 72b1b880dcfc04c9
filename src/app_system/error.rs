use thiserror::Error;

/// System-level startup/shutdown failures.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SystemError {
    #[error("actor task failed: {0}")]
    ActorTaskFailed(String),
}
