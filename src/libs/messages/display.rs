//! Display implementation for taskql messages.
//!
//! Every user-facing or log-facing sentence in the service is produced here,
//! so wording stays consistent between GraphQL error payloads, log lines and
//! command-line output.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    /// Converts a `Message` variant into human-readable text.
    ///
    /// Parameters are interpolated as-is. Messages that end up in GraphQL
    /// responses never include storage internals; those only appear in
    /// variants used for logging (`StorageFailure`, `MigrationFailed`).
    fn fmt(&self, f: &mut Formatter) -> Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task '{}' created", id),
            Message::TaskUpdated(id) => format!("Task '{}' updated", id),
            Message::TaskDeleted(id) => format!("Task '{}' deleted", id),
            Message::TaskDeleteMissing(id) => format!("Task '{}' was already absent, nothing deleted", id),
            Message::TaskToggled(id, completed) => {
                format!("Task '{}' marked as {}", id, if *completed { "completed" } else { "pending" })
            }
            Message::TaskNotFound(id) => format!("Task with ID '{}' not found", id),
            Message::TaskAlreadyExists(id) => format!("Task with ID '{}' already exists", id),
            Message::TaskTitleRequired => "Task title must not be empty".to_string(),
            Message::UnknownPriority(value) => {
                format!("Unknown priority '{}', expected one of LOW, MEDIUM, HIGH", value)
            }

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Database opened at {}", path),
            Message::StorageFailure(err) => format!("Storage operation failed: {}", err),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, err) => format!("Migration v{} failed: {}", version, err),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigDeleted(path) => format!("Configuration removed from {}", path),
            Message::ConfigNotFound(path) => format!("No configuration file at {}", path),
            Message::ConfigParseError(err) => format!("Failed to parse configuration: {}", err),
            Message::ConfigInvalidPort(value) => format!("Invalid port '{}' in environment", value),

            // === SERVER MESSAGES ===
            Message::ServerStarting(address) => format!("GraphQL endpoint listening on http://{}/query", address),
            Message::ServerStopped => "Server stopped".to_string(),
            Message::ShutdownSignalFailed(err) => format!("Failed to listen for shutdown signal: {}", err),

            // === GENERIC ERRORS ===
            Message::InternalServerError => "Internal server error".to_string(),
            Message::BackgroundTaskFailed(err) => format!("Background task failed: {}", err),
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_error_text_is_generic() {
        assert_eq!(Message::InternalServerError.to_string(), "Internal server error");
    }

    #[test]
    fn toggled_message_names_the_new_state() {
        assert_eq!(Message::TaskToggled("a".into(), true).to_string(), "Task 'a' marked as completed");
        assert_eq!(Message::TaskToggled("a".into(), false).to_string(), "Task 'a' marked as pending");
    }
}
