//! # todo-cli
//!
//! A single-user command-line task tracker backed by a local SQLite database.
//!
//! ## Features
//!
//! - **Todos**: add, list, complete, edit, show, delete and bulk-clear tasks
//! - **Priorities and categories**: closed `low`/`medium`/`high` priorities, free-text categories
//! - **Due dates**: `YYYY-MM-DD` dates colored by urgency
//! - **Filtering**: pending, completed or all todos, narrowed by priority and category
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_cli::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
