//! Core library modules for taskql.
//!
//! - **Domain**: the `Task` entity, its value types and the error taxonomy
//! - **Service**: validation and orchestration over the store
//! - **Infrastructure**: configuration, data directory, message catalogue
//!
//! ## Usage
//!
//! ```rust
//! use taskql::db::db::Db;
//! use taskql::libs::service::TaskService;
//! use taskql::libs::task::{NewTask, Priority};
//!
//! let service = TaskService::new(Db::in_memory()?)?;
//! let mut input = NewTask::new("Review code");
//! input.priority = Some(Priority::High);
//! service.create(input)?;
//! assert_eq!(service.stats()?.high_priority, 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod service;
pub mod task;
