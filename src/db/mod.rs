//! Persistence layer built on SQLite.
//!
//! ## Usage
//!
//! ```rust
//! use todo_cli::db::{db::Db, todos::Todos};
//! use todo_cli::libs::todo::{Priority, TodoFilter};
//!
//! let mut todos = Todos::new(Db::in_memory()?);
//! let id = todos.insert("Buy groceries", Priority::Low, "shopping", None)?;
//! assert_eq!(todos.get_by_id(id)?.title, "Buy groceries");
//! assert_eq!(todos.fetch(&TodoFilter::default())?.len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection ownership and database path resolution.
pub mod db;

/// Versioned schema migrations applied on every open.
pub mod migrations;

/// Queries and row mapping for the `todos` table.
pub mod todos;
