//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the relational filter and errors live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod join;

pub use entities::{Collection, Comment, Company, Keyed, Post, PostId, User, UserId};
pub use errors::DomainError;
pub use join::{ChildRecord, join_on_parent};
