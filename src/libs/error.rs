//! Error taxonomy shared by the store, the service and the GraphQL layer.

use crate::libs::messages::Message;

pub type TaskResult<T> = Result<T, TaskError>;

/// Failure of a task operation.
///
/// The variants map one-to-one onto what a client may see:
/// validation problems and missing tasks are reported verbatim, while
/// storage and internal failures are logged and replaced by a generic
/// message before leaving the process.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// Input was rejected before touching storage.
    #[error("{0}")]
    Validation(String),
    /// The referenced task id does not exist.
    #[error("{}", Message::TaskNotFound(.0.clone()))]
    NotFound(String),
    /// A row with the same primary key already exists.
    #[error("{}", Message::TaskAlreadyExists(.0.clone()))]
    ConstraintViolation(String),
    /// Query or connection failure reported by SQLite.
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
    /// Anything else that went wrong while serving a request.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaskError {
    pub fn validation(message: Message) -> Self {
        TaskError::Validation(message.to_string())
    }

    /// Whether the error carries details that must not reach a client.
    pub fn is_internal(&self) -> bool {
        matches!(self, TaskError::Storage(_) | TaskError::Internal(_))
    }
}
