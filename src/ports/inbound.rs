//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI drives the screens.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Main menu. Returns when the user exits.
    async fn run(&self) -> Result<(), DomainError>;

    /// Users -> posts of user -> comments of post.
    async fn run_drill_down(&self) -> Result<(), DomainError>;

    /// Flat user search, refetched on every query change.
    async fn run_search(&self) -> Result<(), DomainError>;
}
