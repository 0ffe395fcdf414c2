//! Per-screen state record and the shared fetch-then-settle step.

use crate::domain::DomainError;
use std::future::Future;
use tokio::sync::watch;

/// What a list screen should show right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Empty,
    Items,
}

/// State owned by exactly one screen for its visible lifetime.
///
/// `loading` stays set while any fetch issued for this screen is unsettled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    /// Latest issued query. Search screen only.
    pub query: Option<String>,
    /// Fetches issued and not yet settled.
    pub pending: usize,
}

impl<T> Default for ScreenState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            query: None,
            pending: 0,
        }
    }
}

impl<T> ScreenState<T> {
    pub fn begin_fetch(&mut self) {
        self.pending += 1;
        self.loading = true;
    }

    /// Successful settlement: the whole list is replaced.
    pub fn finish(&mut self, items: Vec<T>) {
        self.items = items;
        self.end_fetch();
    }

    /// Failed or cancelled settlement: the previous list stays.
    pub fn abandon(&mut self) {
        self.end_fetch();
    }

    fn end_fetch(&mut self) {
        self.pending = self.pending.saturating_sub(1);
        self.loading = self.pending > 0;
    }

    pub fn view(&self) -> ListView {
        if self.loading {
            ListView::Loading
        } else if self.items.is_empty() {
            ListView::Empty
        } else {
            ListView::Items
        }
    }
}

/// Collection fetcher: flag loading, await the single round trip, settle.
///
/// Every transition is published on `state`, so subscribers see the flag
/// while the request is in flight. The loading flag is cleared on both
/// outcomes. The error is returned untouched; callers decide whether to
/// propagate or log it.
pub async fn fetch_into<T, F>(
    state: &watch::Sender<ScreenState<T>>,
    fetch: F,
) -> Result<(), DomainError>
where
    F: Future<Output = Result<Vec<T>, DomainError>>,
{
    state.send_modify(|s| s.begin_fetch());
    match fetch.await {
        Ok(items) => {
            state.send_modify(|s| s.finish(items));
            Ok(())
        }
        Err(e) => {
            state.send_modify(|s| s.abandon());
            Err(e)
        }
    }
}
