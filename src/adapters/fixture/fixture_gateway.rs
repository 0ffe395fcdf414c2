//! In-memory gateway for offline use and tests.
//!
//! Serves fixed collections without network access. Latency is simulated per
//! call, and can be overridden per search query to reproduce overlapping
//! requests resolving out of order.

use crate::domain::{Comment, Company, DomainError, Post, User};
use crate::ports::CollectionGateway;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

/// Failure to inject for a given users query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectedFailure {
    Network,
    Malformed,
}

/// Fixture gateway. Mirrors the remote API's filtering for `q`.
#[derive(Default)]
pub struct FixtureGateway {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    delay_ms: u64,
    query_delays: HashMap<String, u64>,
    query_failures: HashMap<String, InjectedFailure>,
    collection_failure: Option<InjectedFailure>,
    calls: AtomicUsize,
}

impl FixtureGateway {
    pub fn new(users: Vec<User>, posts: Vec<Post>, comments: Vec<Comment>) -> Self {
        Self {
            users,
            posts,
            comments,
            ..Default::default()
        }
    }

    /// Small built-in dataset for offline browsing.
    pub fn seeded() -> Self {
        let users = vec![
            fixture_user(1, "Leanne Graham", "Bret", "Sincere@april.biz", "Romaguera-Crona"),
            fixture_user(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv", "Deckow-Crist"),
            fixture_user(
                3,
                "Clementine Bauch",
                "Samantha",
                "Nathan@yesenia.net",
                "Romaguera-Jacobson",
            ),
            fixture_user(
                4,
                "Patricia Lebsack",
                "Karianne",
                "Julianne.OConner@kory.org",
                "Robel-Corkery",
            ),
        ];
        let posts = vec![
            fixture_post(1, 1, "sunt aut facere", "quia et suscipit\nsuscipit recusandae"),
            fixture_post(2, 1, "qui est esse", "est rerum tempore vitae\nsequi sint nihil"),
            fixture_post(3, 2, "ea molestias quasi", "et iusto sed quo iure\nvoluptatem"),
            fixture_post(4, 3, "eum et est occaecati", "ullam et saepe reiciendis"),
            fixture_post(5, 1, "nesciunt quas odio", "repudiandae veniam quaerat\nsunt sed"),
        ];
        let comments = vec![
            fixture_comment(1, 1, "id labore ex et quam", "Eliseo@gardner.biz", "laudantium"),
            fixture_comment(2, 1, "quo vero reiciendis", "Jayne_Kuhic@sydney.com", "est natus"),
            fixture_comment(3, 2, "odio adipisci rerum", "Nikita@garfield.biz", "quia molestiae"),
            fixture_comment(4, 3, "alias odio sit", "Lew@alysha.tv", "non et atque"),
            fixture_comment(5, 1, "vero eaque aliquid", "Hayden@althea.biz", "harum non quasi"),
        ];
        Self::new(users, posts, comments)
    }

    /// Latency applied to every call.
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Latency applied to `fetch_users(Some(query))` only.
    pub fn with_query_delay(mut self, query: &str, delay_ms: u64) -> Self {
        self.query_delays.insert(query.to_string(), delay_ms);
        self
    }

    pub fn with_query_failure(mut self, query: &str, failure: InjectedFailure) -> Self {
        self.query_failures.insert(query.to_string(), failure);
        self
    }

    /// Fail every posts/comments fetch.
    pub fn with_collection_failure(mut self, failure: InjectedFailure) -> Self {
        self.collection_failure = Some(failure);
        self
    }

    /// Number of fetches served (including failed ones).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn simulate_latency(&self, delay_ms: u64) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
    }
}

fn failure_error(failure: InjectedFailure) -> DomainError {
    match failure {
        InjectedFailure::Network => {
            DomainError::Network("[FIXTURE] connection refused".into())
        }
        InjectedFailure::Malformed => {
            DomainError::Parse("[FIXTURE] expected value at line 1".into())
        }
    }
}

/// Case-insensitive match over every text field, like the remote full-text `q`.
fn user_matches(user: &User, query: &str) -> bool {
    let needle = query.to_lowercase();
    [&user.name, &user.username, &user.email, &user.company.name]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[async_trait::async_trait]
impl CollectionGateway for FixtureGateway {
    async fn fetch_users(&self, query: Option<&str>) -> Result<Vec<User>, DomainError> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let delay = query
            .and_then(|q| self.query_delays.get(q).copied())
            .unwrap_or(self.delay_ms);
        self.simulate_latency(delay).await;
        info!(query = ?query, "[FIXTURE] serving users");

        if let Some(failure) = query.and_then(|q| self.query_failures.get(q)) {
            return Err(failure_error(*failure));
        }

        Ok(match query {
            Some(q) => self
                .users
                .iter()
                .filter(|u| user_matches(u, q))
                .cloned()
                .collect(),
            None => self.users.clone(),
        })
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.simulate_latency(self.delay_ms).await;
        if let Some(failure) = self.collection_failure {
            return Err(failure_error(failure));
        }
        Ok(self.posts.clone())
    }

    async fn fetch_comments(&self) -> Result<Vec<Comment>, DomainError> {
        self.simulate_latency(self.delay_ms).await;
        if let Some(failure) = self.collection_failure {
            return Err(failure_error(failure));
        }
        Ok(self.comments.clone())
    }
}

pub fn fixture_user(id: i64, name: &str, username: &str, email: &str, company: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        company: Company {
            name: company.to_string(),
        },
    }
}

pub fn fixture_post(id: i64, user_id: i64, title: &str, body: &str) -> Post {
    Post {
        id,
        user_id,
        title: title.to_string(),
        body: body.to_string(),
    }
}

pub fn fixture_comment(id: i64, post_id: i64, name: &str, email: &str, body: &str) -> Comment {
    Comment {
        id,
        post_id,
        name: name.to_string(),
        email: email.to_string(),
        body: body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_users_filtered_by_query() {
        let gateway = FixtureGateway::seeded();
        let all = gateway.fetch_users(None).await.unwrap();
        assert_eq!(all.len(), 4);

        let found = gateway.fetch_users(Some("ERVIN")).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].username, "Antonette");

        let blank = gateway.fetch_users(Some("  ")).await.unwrap();
        assert_eq!(blank.len(), 4);
        assert_eq!(gateway.calls(), 3);
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let gateway = FixtureGateway::seeded()
            .with_query_failure("boom", InjectedFailure::Malformed)
            .with_collection_failure(InjectedFailure::Network);

        assert!(matches!(
            gateway.fetch_users(Some("boom")).await,
            Err(DomainError::Parse(_))
        ));
        assert!(matches!(
            gateway.fetch_posts().await,
            Err(DomainError::Network(_))
        ));
        assert!(gateway.fetch_users(None).await.is_ok());
    }
}
