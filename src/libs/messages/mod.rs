//! Centralised message catalogue.
//!
//! All text emitted by taskql, whether logged, printed or returned in a
//! GraphQL error, is a `Message` variant rendered through its `Display`
//! implementation.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
