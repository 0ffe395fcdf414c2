//! Infrastructure adapters. Implement ports.
//!
//! HTTP, in-memory fixtures, terminal UI. Map errors to DomainError.

pub mod fixture;
pub mod http;
pub mod ui;
