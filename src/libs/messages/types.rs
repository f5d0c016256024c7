#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === TODO MESSAGES ===
    TodoAdded(i64, String), // id, title
    TodoMarkedDone(i64),
    TodoMarkedUndone(i64),
    TodoDeleted(i64),
    TodoUpdated(i64),
    NoTodosFound,
    PendingTodosHeader,
    AllTodosHeader,
    CompletedTodosHeader,

    // === CLEAR MESSAGES ===
    NoTodosToClear,
    NoCompletedTodosToClear,
    AllTodosCleared(usize),
    CompletedTodosCleared(usize),

    // === CONFIRMATION PROMPTS ===
    ConfirmDeleteTodo(i64, String), // id, title
    ConfirmClearAll(usize),
    ConfirmClearCompleted(usize),
    OperationCancelled,

    // === VALIDATION MESSAGES ===
    EmptyTitle,
    InvalidPriority(String),
    InvalidDateFormat(String),
    NothingToUpdate,

    // === DATABASE MESSAGES ===
    DatabaseOpened(String), // path
    DatabaseUpToDate,
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String), // path
    ConfigParseError(String),
    ConfigDatabasePath(String),
    PromptDatabasePath,
}
