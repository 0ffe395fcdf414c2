//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Comment, DomainError, Post, User};

/// Remote collection source. Each call downloads one whole collection.
///
/// There is no fetch-by-id: child screens receive their parent record from
/// the previous screen and filter the full child collection locally.
#[async_trait::async_trait]
pub trait CollectionGateway: Send + Sync {
    /// `GET /users`, with `?q=<query>` when a non-empty query is given.
    async fn fetch_users(&self, query: Option<&str>) -> Result<Vec<User>, DomainError>;

    /// `GET /posts`. Unfiltered.
    async fn fetch_posts(&self) -> Result<Vec<Post>, DomainError>;

    /// `GET /comments`. Unfiltered.
    async fn fetch_comments(&self) -> Result<Vec<Comment>, DomainError>;
}
