//! Signals and store actions for the search screen.

use crate::ui::mvi::Intent;

/// Signals emitted by the search dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchSignal {
    /// A request is about to be sent.
    Start,

    /// The registry answered with a list of package names.
    Success {
        /// Package names in registry order.
        names: Vec<String>,
    },

    /// The request failed for any reason.
    Failure {
        /// Lowest-level error description available.
        message: String,
    },
}

impl SearchSignal {
    /// True for `Success` and `Failure`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Start)
    }
}

/// Root action accepted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Dispatched once when a store is created.
    Init,

    /// A search lifecycle signal.
    Search(SearchSignal),
}

impl From<SearchSignal> for Action {
    fn from(signal: SearchSignal) -> Self {
        Action::Search(signal)
    }
}

impl Intent for Action {}
