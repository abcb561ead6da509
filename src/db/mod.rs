//! Database layer for taskql.
//!
//! SQLite persistence through `rusqlite`: one shared connection (`db`), a
//! versioned migration system (`migrations`) and the task store (`tasks`).
//!
//! ## Usage
//!
//! ```rust
//! use taskql::db::{db::Db, tasks::Tasks};
//! use taskql::libs::task::{Priority, Task, TaskFilter};
//!
//! let tasks = Tasks::new(Db::in_memory()?)?;
//! tasks.insert(&Task::new("Review code".to_string(), None, Priority::High))?;
//! assert_eq!(tasks.list_all(TaskFilter::All)?.len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Conventions
//!
//! - Every statement binds its parameters; nothing user-supplied is
//!   formatted into SQL text.
//! - Listings are ordered by `created_at` descending, ties by insertion order.
//! - Read-modify-write sequences go through `Tasks::modify`, which runs them
//!   in a single immediate transaction.

/// Connection management and initialization.
pub mod db;

/// Versioned schema changes and their bookkeeping.
pub mod migrations;

/// CRUD, filtering, search and aggregate counts over the `tasks` table.
pub mod tasks;
