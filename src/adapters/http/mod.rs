//! HTTP adapter. Implements CollectionGateway against the REST API.

pub mod placeholder_client;

pub use placeholder_client::PlaceholderClient;
