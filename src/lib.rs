//! # taskql - Task management over GraphQL
//!
//! A small service storing tasks in SQLite and exposing them through a
//! GraphQL API.
//!
//! ## Layers
//!
//! - [`db`]: SQLite store for tasks, with versioned migrations
//! - [`libs::service`]: validation and business rules over the store
//! - [`graphql`]: schema, resolvers and error translation
//! - [`server`]: axum router hosting `POST /query` and `GET /health`
//! - [`commands`]: the `taskql` command line (`serve`, `schema`, `init`)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskql::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod graphql;
pub mod libs;
pub mod server;
