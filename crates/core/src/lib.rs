//! Core domain logic for the todos backend.
//!
//! Owns the [`todo::Todo`] entity, its request payloads and validation,
//! the in-memory [`store::TodoStore`], and the [`error::CoreError`] type
//! shared with the API layer. Everything in this crate is synchronous,
//! in-memory calculation -- no I/O, no locking, no suspension points.

pub mod error;
pub mod store;
pub mod todo;
pub mod types;
