//! Foreground state for a run of searches.
//!
//! Each submitted search gets the next generation number and runs on
//! its own tokio task. Finished searches come back over a channel and
//! only the one matching the latest generation is applied, so a slow
//! older search can never overwrite the results of a newer one.
use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use super::adapter::{BookAdapter, EmptyState};
use super::connectivity::Connectivity;
use super::viewer::UrlViewer;
use crate::books::{BooksClient, SearchOutcome};
use crate::core::FetchError;

pub type Generation = u64;

/// Handed back from a search task when it finishes.
#[derive(Debug)]
pub struct Completion {
    pub generation: Generation,
    pub query: String,
    pub outcome: SearchOutcome,
}

pub struct SearchSession {
    client: Arc<BooksClient>,
    connectivity: Arc<dyn Connectivity>,
    viewer: Box<dyn UrlViewer>,
    adapter: BookAdapter,
    empty_state: EmptyState,
    latest: Generation,
    applied: Generation,
    last_failure: Option<FetchError>,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
}

impl SearchSession {
    pub fn new(
        client: BooksClient,
        connectivity: Arc<dyn Connectivity>,
        viewer: Box<dyn UrlViewer>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client: Arc::new(client),
            connectivity,
            viewer,
            adapter: BookAdapter::new(),
            empty_state: EmptyState::Idle,
            latest: 0,
            applied: 0,
            last_failure: None,
            tx,
            rx,
        }
    }

    /// Start a search for `query`, superseding any search still in
    /// flight. Returns `None` without searching when offline.
    pub async fn submit(&mut self, query: &str) -> Option<Generation> {
        if !self.connectivity.is_online().await {
            self.empty_state = EmptyState::NoInternet;
            return None;
        }

        self.latest += 1;
        let generation = self.latest;
        self.empty_state = EmptyState::Loading;

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let query = query.to_string();
        tokio::spawn(async move {
            let outcome = client.fetch_books(&query).await;
            // The session may be gone by the time the search finishes
            let _ = tx.send(Completion {
                generation,
                query,
                outcome,
            });
        });

        Some(generation)
    }

    /// Apply a finished search. Stale completions are dropped and
    /// leave the current results untouched.
    pub fn apply(&mut self, completion: Completion) -> bool {
        let Completion {
            generation,
            query,
            outcome,
        } = completion;

        if generation != self.latest {
            tracing::debug!(
                generation,
                latest = self.latest,
                query = %query,
                "Dropping stale search results"
            );
            return false;
        }

        self.last_failure = outcome.error().cloned();
        self.adapter.replace_all(outcome.into_books());
        self.empty_state = EmptyState::NoDataFound;
        self.applied = generation;
        true
    }

    /// Wait until the latest submitted search has been applied. Returns
    /// false if the channel closed first.
    pub async fn wait_latest(&mut self) -> bool {
        while self.applied < self.latest {
            match self.rx.recv().await {
                Some(completion) => {
                    self.apply(completion);
                }
                None => return false,
            }
        }
        true
    }

    /// Open the detail page of the book at `position`.
    pub fn open(&self, position: usize) -> bool {
        self.adapter.select(position, self.viewer.as_ref())
    }

    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        self.adapter.render(out, self.empty_state)
    }

    pub fn adapter(&self) -> &BookAdapter {
        &self.adapter
    }

    pub fn empty_state(&self) -> EmptyState {
        self.empty_state
    }

    pub fn latest_generation(&self) -> Generation {
        self.latest
    }

    /// Decode failure behind the current results, if any. Rendering
    /// doesn't distinguish it from an empty result.
    pub fn last_failure(&self) -> Option<&FetchError> {
        self.last_failure.as_ref()
    }

    /// Drop the current results, e.g. when the view goes away.
    pub fn reset(&mut self) {
        self.adapter.clear();
        self.last_failure = None;
        self.empty_state = EmptyState::Idle;
    }
}
