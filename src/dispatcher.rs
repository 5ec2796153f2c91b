//! Turns a search term into search signals.
//!
//! `Start` always reaches the store before the request is issued. The
//! terminal signal (`Success` or `Failure`) arrives later through a channel.
//! Submissions are not sequenced: when two requests overlap, whichever
//! resolves last decides the final state.

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::registry::SearchBackend;
use crate::ui::search::SearchSignal;
use crate::ui::store::Store;

pub type SignalSender = mpsc::UnboundedSender<SearchSignal>;
pub type SignalReceiver = mpsc::UnboundedReceiver<SearchSignal>;

/// Run one search and map its outcome to a terminal signal.
///
/// Every error is converted to `Failure`; nothing propagates further.
pub async fn resolve<B: SearchBackend>(backend: &B, term: &str) -> SearchSignal {
    match backend.search(term).await {
        Ok(names) => {
            tracing::info!(term, results = names.len(), "Search succeeded");
            SearchSignal::Success { names }
        }
        Err(err) => {
            tracing::warn!(term, error = %err, "Search failed");
            SearchSignal::Failure {
                message: err.to_string(),
            }
        }
    }
}

/// Full signal sequence for one search: `Start` followed by the outcome.
pub async fn search_signals<B: SearchBackend>(backend: &B, term: &str) -> Vec<SearchSignal> {
    let mut signals = vec![SearchSignal::Start];
    signals.push(resolve(backend, term).await);
    signals
}

/// Dispatches searches against a backend on the current Tokio runtime.
pub struct SearchDispatcher<B> {
    backend: Arc<B>,
    tx: SignalSender,
}

impl<B> Clone for SearchDispatcher<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            tx: self.tx.clone(),
        }
    }
}

impl<B: SearchBackend> SearchDispatcher<B> {
    /// Create a dispatcher and the receiver its terminal signals arrive on.
    pub fn new(backend: Arc<B>) -> (Self, SignalReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { backend, tx }, rx)
    }

    /// Dispatch `Start` into the store, then spawn the request.
    ///
    /// The returned handle completes once the terminal signal has been
    /// queued. Dropping it does not cancel the request.
    pub fn dispatch_search(&self, store: &mut Store, term: impl Into<String>) -> JoinHandle<()> {
        let term = term.into();
        tracing::debug!(term = %term, "Dispatching search");
        store.dispatch(SearchSignal::Start);

        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let signal = resolve(backend.as_ref(), &term).await;
            if tx.send(signal).is_err() {
                tracing::debug!(term = %term, "Signal receiver dropped, discarding result");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SearchError;

    struct FixedBackend(Result<Vec<String>, &'static str>);

    impl SearchBackend for FixedBackend {
        async fn search(&self, _term: &str) -> Result<Vec<String>, SearchError> {
            match &self.0 {
                Ok(names) => Ok(names.clone()),
                Err(message) => Err(SearchError::Network {
                    message: message.to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn signals_start_then_success() {
        let backend = FixedBackend(Ok(vec!["a".into(), "b".into()]));
        let signals = search_signals(&backend, "q").await;
        assert_eq!(
            signals,
            vec![
                SearchSignal::Start,
                SearchSignal::Success {
                    names: vec!["a".into(), "b".into()]
                }
            ]
        );
    }

    #[tokio::test]
    async fn errors_become_failure_signals() {
        let backend = FixedBackend(Err("Network Error"));
        let signal = resolve(&backend, "q").await;
        assert_eq!(
            signal,
            SearchSignal::Failure {
                message: "Network Error".into()
            }
        );
    }

    #[tokio::test]
    async fn dispatch_marks_loading_before_request_settles() {
        let (dispatcher, mut rx) = SearchDispatcher::new(Arc::new(FixedBackend(Ok(vec![]))));
        let mut store = Store::new();

        let handle = dispatcher.dispatch_search(&mut store, "");
        assert!(store.state().loading);

        handle.await.unwrap();
        let signal = rx.recv().await.unwrap();
        assert!(signal.is_terminal());
        store.dispatch(signal);
        assert!(!store.state().loading);
    }
}
