//! State for the package search screen.

use crate::ui::mvi::UiState;

/// What the search screen knows about the latest request.
///
/// Exactly one regime is meaningful at a time: loading, failed (`error`
/// set) or settled with results in `data`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    /// True between `Start` and the signal that resolves it.
    pub loading: bool,
    /// Message of the last failed request.
    pub error: Option<String>,
    /// Package names from the last successful request, in registry order.
    pub data: Vec<String>,
}

impl UiState for SearchState {}

impl SearchState {
    /// State while a request is in flight.
    pub fn loading() -> Self {
        Self {
            loading: true,
            error: None,
            data: Vec::new(),
        }
    }

    /// Settled state holding the given results.
    pub fn with_results(data: Vec<String>) -> Self {
        Self {
            loading: false,
            error: None,
            data,
        }
    }

    /// Settled state holding an error message.
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            loading: false,
            error: Some(message.into()),
            data: Vec::new(),
        }
    }

    /// Settled with nothing to show: before any search, or after an empty result.
    pub fn is_idle(&self) -> bool {
        !self.loading && self.error.is_none() && self.data.is_empty()
    }
}
