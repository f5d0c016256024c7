//! Display implementation for application messages.
//!
//! All user-facing text lives here so commands, errors and prompts share a
//! single wording. Messages carry their parameters as typed fields and are
//! rendered without a status prefix; the `msg_*!` macros add the prefix.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TODO MESSAGES ===
            Message::TodoAdded(id, title) => format!("Added todo #{}: {}", id, title),
            Message::TodoMarkedDone(id) => format!("Marked todo #{} as done", id),
            Message::TodoMarkedUndone(id) => format!("Marked todo #{} as not done", id),
            Message::TodoDeleted(id) => format!("Deleted todo #{}", id),
            Message::TodoUpdated(id) => format!("Updated todo #{}", id),
            Message::NoTodosFound => "No todos found".to_string(),
            Message::PendingTodosHeader => "Pending Todos:".to_string(),
            Message::AllTodosHeader => "All Todos:".to_string(),
            Message::CompletedTodosHeader => "Completed Todos:".to_string(),

            // === CLEAR MESSAGES ===
            Message::NoTodosToClear => "No todos to clear".to_string(),
            Message::NoCompletedTodosToClear => "No completed todos to clear".to_string(),
            Message::AllTodosCleared(count) => format!("Cleared all {} todos", count),
            Message::CompletedTodosCleared(count) => format!("Cleared {} completed todos", count),

            // === CONFIRMATION PROMPTS ===
            Message::ConfirmDeleteTodo(id, title) => format!("Delete todo #{}: \"{}\"?", id, title),
            Message::ConfirmClearAll(count) => format!("Delete ALL {} todos? This cannot be undone.", count),
            Message::ConfirmClearCompleted(count) => format!("Delete {} completed todos?", count),
            Message::OperationCancelled => "Cancelled".to_string(),

            // === VALIDATION MESSAGES ===
            Message::EmptyTitle => "title can not be empty".to_string(),
            Message::InvalidPriority(value) => format!("invalid priority '{}' (use low, medium or high)", value),
            Message::InvalidDateFormat(value) => format!("invalid date format '{}' (use YYYY-MM-DD)", value),
            Message::NothingToUpdate => "nothing to update. Use --title, --priority, --category or --due".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Opened database at {}", path),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigParseError(path) => format!("Failed to parse configuration file {}", path),
            Message::ConfigDatabasePath(path) => format!("Todos will be stored in {}", path),
            Message::PromptDatabasePath => "Database file path".to_string(),
        };

        write!(f, "{}", text)
    }
}
