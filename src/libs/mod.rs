//! Core library modules for todo-cli.
//!
//! ## Features
//!
//! - **Domain**: todo model, priority validation, error taxonomy
//! - **Presentation**: colors, due-date formatting, table rendering, views
//! - **Infrastructure**: configuration, data storage, logging, messaging, prompts
//!
//! ## Usage
//!
//! ```rust
//! use todo_cli::libs::table::Table;
//!
//! let mut table = Table::new(["ID", "Title"]);
//! table.add_row(["1", "Buy groceries"]);
//! assert_eq!(table.widths(), &[2, 13]);
//! ```

pub mod color;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod prompt;
pub mod table;
pub mod todo;
pub mod view;
