#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskDeleteMissing(String),
    TaskToggled(String, bool),
    TaskNotFound(String),
    TaskAlreadyExists(String),
    TaskTitleRequired,
    UnknownPriority(String),

    // === DATABASE MESSAGES ===
    DatabaseOpened(String),
    StorageFailure(String),
    MigrationsFound(usize),
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),
    MigrationFailed(u32, String), // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String), // path
    ConfigDeleted(String),
    ConfigNotFound(String),
    ConfigParseError(String),
    ConfigInvalidPort(String),

    // === SERVER MESSAGES ===
    ServerStarting(String), // address
    ServerStopped,
    ShutdownSignalFailed(String),

    // === GENERIC ERRORS ===
    InternalServerError,
    BackgroundTaskFailed(String),
}
