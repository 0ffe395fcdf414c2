//! Search screen: users list refetched on every query change.
//!
//! Every published query spawns its own fetch. Under `SearchPolicy::Race`
//! nothing is sequenced, so whichever response resolves last is displayed,
//! even if it answers an older query. `SearchPolicy::CancelPrevious` aborts
//! in-flight fetches before issuing the new one.
//!
//! Failures are logged and leave the previous list on screen. The loading
//! flag stays set while any issued fetch is unsettled, aborted ones included.

use crate::domain::User;
use crate::ports::CollectionGateway;
use crate::usecases::screen_state::ScreenState;
use std::sync::Arc;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPolicy {
    /// Overlapping fetches all complete; last resolved wins.
    #[default]
    Race,
    /// A new query aborts every fetch still in flight.
    CancelPrevious,
}

impl SearchPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "race" => Some(SearchPolicy::Race),
            "cancel-previous" | "cancel" => Some(SearchPolicy::CancelPrevious),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchPolicy::Race => "race",
            SearchPolicy::CancelPrevious => "cancel-previous",
        }
    }
}

pub struct SearchScreen {
    gateway: Arc<dyn CollectionGateway>,
    policy: SearchPolicy,
    state: Arc<watch::Sender<ScreenState<User>>>,
    in_flight: Mutex<Vec<JoinHandle<()>>>,
}

impl SearchScreen {
    pub fn new(gateway: Arc<dyn CollectionGateway>, policy: SearchPolicy) -> Self {
        let (state, _) = watch::channel(ScreenState::default());
        Self {
            gateway,
            policy,
            state: Arc::new(state),
            in_flight: Mutex::new(Vec::new()),
        }
    }

    pub fn policy(&self) -> SearchPolicy {
        self.policy
    }

    /// Observe every state change (items, loading, query).
    pub fn subscribe(&self) -> watch::Receiver<ScreenState<User>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ScreenState<User> {
        self.state.borrow().clone()
    }

    /// Initial fetch on screen entry: no query, all users.
    pub async fn mount(&self) {
        self.set_query("").await;
    }

    /// Publish a new query value and issue its fetch.
    ///
    /// Returns as soon as the fetch is spawned; call `settle` to wait for it.
    pub async fn set_query(&self, query: &str) {
        let query = query.to_string();
        let mut in_flight = self.in_flight.lock().await;
        in_flight.retain(|h| !h.is_finished());

        if self.policy == SearchPolicy::CancelPrevious {
            // Aborted handles stay listed so `settle` waits for their guards.
            for handle in in_flight.iter() {
                handle.abort();
            }
        }

        self.state.send_modify(|s| {
            s.query = Some(query.clone()).filter(|q| !q.trim().is_empty());
            s.begin_fetch();
        });
        debug!(query = %query, overlapping = in_flight.len(), "search fetch issued");

        let gateway = Arc::clone(&self.gateway);
        let state = Arc::clone(&self.state);
        in_flight.push(tokio::spawn(async move {
            let mut pending = PendingFetch::new(state);
            let term = Some(query.as_str()).filter(|q| !q.trim().is_empty());
            match gateway.fetch_users(term).await {
                Ok(users) => {
                    info!(query = %query, count = users.len(), "search results received");
                    pending.finish(users);
                }
                Err(e) => {
                    warn!(query = %query, error = %e, "user search failed; keeping previous list");
                }
            }
        }));
    }

    /// Publish one query per keystroke that turns the current query into `text`.
    ///
    /// Characters typed after the current query each issue a fetch; any other
    /// edit publishes `text` once. An unchanged value issues nothing.
    pub async fn type_text(&self, text: &str) {
        let previous = self.state.borrow().query.clone().unwrap_or_default();
        for step in edit_steps(&previous, text) {
            self.set_query(step).await;
        }
    }

    /// Wait for every fetch issued so far. Aborted fetches count as settled.
    pub async fn settle(&self) {
        let handles: Vec<JoinHandle<()>> = self.in_flight.lock().await.drain(..).collect();
        for handle in handles {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    warn!(error = %e, "search fetch task failed");
                }
            }
        }
    }
}

/// One settlement owed to the screen state. Dropping it unsettled (failure,
/// or the task being aborted) abandons the fetch.
struct PendingFetch {
    state: Arc<watch::Sender<ScreenState<User>>>,
    settled: bool,
}

impl PendingFetch {
    fn new(state: Arc<watch::Sender<ScreenState<User>>>) -> Self {
        Self {
            state,
            settled: false,
        }
    }

    fn finish(&mut self, users: Vec<User>) {
        self.settled = true;
        self.state.send_modify(|s| s.finish(users));
    }
}

impl Drop for PendingFetch {
    fn drop(&mut self) {
        if !self.settled {
            self.state.send_modify(|s| s.abandon());
        }
    }
}

/// Query values a text field publishes while its value goes from `previous` to `text`.
///
/// Appended characters yield one prefix each. Deletions and mid-string edits
/// yield `text` alone.
pub fn edit_steps<'a>(previous: &str, text: &'a str) -> Vec<&'a str> {
    if previous == text {
        return Vec::new();
    }
    match text.strip_prefix(previous) {
        Some(typed) => {
            let start = previous.len();
            typed
                .char_indices()
                .map(|(i, c)| &text[..start + i + c.len_utf8()])
                .collect()
        }
        None => vec![text],
    }
}
