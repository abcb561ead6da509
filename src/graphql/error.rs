//! Translation of service failures into GraphQL errors.

use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::msg_error;
use async_graphql::{Context, Error, ErrorExtensions};

pub const CODE_BAD_USER_INPUT: &str = "BAD_USER_INPUT";
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const CODE_CONFLICT: &str = "CONFLICT";
pub const CODE_INTERNAL: &str = "INTERNAL_SERVER_ERROR";

impl ErrorExtensions for TaskError {
    fn extend(&self) -> Error {
        let (message, code) = match self {
            TaskError::Validation(_) => (self.to_string(), CODE_BAD_USER_INPUT),
            TaskError::NotFound(_) => (self.to_string(), CODE_NOT_FOUND),
            TaskError::ConstraintViolation(_) => (self.to_string(), CODE_CONFLICT),
            TaskError::Storage(_) | TaskError::Internal(_) => (Message::InternalServerError.to_string(), CODE_INTERNAL),
        };
        Error::new(message).extend_with(|_, e| e.set("code", code))
    }
}

/// Converts a service error for the client, logging the details that are
/// withheld from it.
pub fn to_graphql_error(err: TaskError) -> Error {
    if err.is_internal() {
        msg_error!(Message::StorageFailure(err.to_string()));
    }
    err.extend()
}

/// Runs a service call on tokio's blocking pool.
///
/// SQLite calls block, so they stay off the async workers. A panic inside
/// `f` comes back as a `JoinError` and is reported as an internal error
/// instead of tearing down the request.
pub async fn run_blocking<T, F>(ctx: &Context<'_>, f: F) -> async_graphql::Result<T>
where
    F: FnOnce(&TaskService) -> Result<T, TaskError> + Send + 'static,
    T: Send + 'static,
{
    let service = ctx.data::<TaskService>()?.clone();
    tokio::task::spawn_blocking(move || f(&service))
        .await
        .map_err(|err| to_graphql_error(TaskError::Internal(Message::BackgroundTaskFailed(err.to_string()).to_string())))?
        .map_err(to_graphql_error)
}
