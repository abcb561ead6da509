//! GraphQL API layer.
//!
//! Declares the schema with `async-graphql` and binds every field to a
//! `TaskService` call. No business logic lives here: resolvers only coerce
//! arguments into typed inputs, hand the call to the service on the blocking
//! pool and translate errors.
//!
//! ## Usage
//!
//! ```rust
//! use taskql::db::db::Db;
//! use taskql::graphql::build_schema;
//! use taskql::libs::service::TaskService;
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let schema = build_schema(TaskService::new(Db::in_memory().unwrap()).unwrap());
//! let response = runtime.block_on(schema.execute("{ taskStats { total } }"));
//! assert!(response.errors.is_empty());
//! ```

pub mod error;
pub mod mutation;
pub mod query;
pub mod types;

pub use error::run_blocking;
pub use mutation::MutationRoot;
pub use query::QueryRoot;

use crate::libs::service::TaskService;
use async_graphql::extensions::Tracing;
use async_graphql::{EmptySubscription, Schema, SchemaBuilder};

pub type TaskSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

fn schema_builder() -> SchemaBuilder<QueryRoot, MutationRoot, EmptySubscription> {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription).extension(Tracing)
}

/// Builds the executable schema with `service` available to every resolver.
pub fn build_schema(service: TaskService) -> TaskSchema {
    schema_builder().data(service).finish()
}

/// The schema in SDL form.
pub fn schema_sdl() -> String {
    schema_builder().finish().sdl()
}
