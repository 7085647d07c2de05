use std::sync::Arc;

use crossbeam::channel::{Receiver, Sender, unbounded};
use tokio::runtime::Handle;

use crate::{error::FetchError, model::WeatherSnapshot, provider::WeatherProvider};

/// Lifecycle of one search, as seen by the view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    /// Nothing searched yet.
    #[default]
    Idle,
    Loading,
    Loaded(WeatherSnapshot),
    Failed(String),
}

/// Condition icon bytes, keyed by the URL they were fetched from so the
/// view can discard icons belonging to a superseded snapshot.
#[derive(Debug, Clone)]
pub struct IconImage {
    pub url: String,
    pub bytes: Vec<u8>,
}

enum SearchEvent {
    Settled(Result<WeatherSnapshot, FetchError>),
    Icon(IconImage),
}

/// Holder of the latest search outcome.
///
/// `submit` flips the state to `Loading` synchronously and spawns the fetch
/// on the runtime; `pump`, called from the UI thread, applies completions in
/// arrival order. A new search does not cancel an outstanding one: both may
/// settle, and whichever arrives last wins. That race is inherited behavior,
/// kept as-is.
pub struct Searcher {
    provider: Arc<dyn WeatherProvider>,
    handle: Handle,
    tx: Sender<SearchEvent>,
    rx: Receiver<SearchEvent>,
    state: SearchState,
}

impl Searcher {
    pub fn new(provider: Arc<dyn WeatherProvider>, handle: Handle) -> Self {
        let (tx, rx) = unbounded();
        Self { provider, handle, tx, rx, state: SearchState::default() }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SearchState::Loading)
    }

    /// Start a search, overwriting whatever state the previous one left.
    pub fn submit(&mut self, query: &str) {
        self.state = SearchState::Loading;

        if query.is_empty() {
            // Settles immediately, no network involved.
            self.state = SearchState::Failed(FetchError::EmptyQuery.to_string());
            return;
        }

        tracing::info!(%query, "searching");

        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let query = query.to_owned();

        self.handle.spawn(async move {
            let result = provider.current(&query).await;
            let icon_url = result.as_ref().ok().map(WeatherSnapshot::icon_url);

            if tx.send(SearchEvent::Settled(result)).is_err() {
                return;
            }

            // The icon is best-effort; a miss leaves the text-only view intact.
            if let Some(url) = icon_url {
                match provider.icon(&url).await {
                    Ok(bytes) => {
                        let _ = tx.send(SearchEvent::Icon(IconImage { url, bytes }));
                    }
                    Err(err) => tracing::debug!(%url, "condition icon fetch failed: {err}"),
                }
            }
        });
    }

    /// Drain completion events, updating the state. Returns any icon payloads
    /// for the caller to decode.
    pub fn pump(&mut self) -> Vec<IconImage> {
        let mut icons = Vec::new();

        for event in self.rx.try_iter() {
            match event {
                SearchEvent::Settled(Ok(snapshot)) => {
                    self.state = SearchState::Loaded(snapshot);
                }
                SearchEvent::Settled(Err(err)) => {
                    tracing::warn!("search failed: {err}");
                    self.state = SearchState::Failed(err.to_string());
                }
                SearchEvent::Icon(icon) => icons.push(icon),
            }
        }

        icons
    }
}
