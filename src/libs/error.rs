use crate::libs::messages::Message;
use thiserror::Error;

/// Failures of the todo domain and its persistence layer.
///
/// Validation problems are detected before the store is touched, so a
/// `Validation` error never leaves a partially applied change behind.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("{0}")]
    Validation(Message),

    #[error("todo #{0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Store(#[from] rusqlite::Error),
}

impl TodoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TodoError::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, TodoError::Validation(_))
    }
}
