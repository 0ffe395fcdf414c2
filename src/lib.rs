//! ph-browse: users, posts and comments of a JSONPlaceholder-style API.
//! Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
