//! Base trait for intents (signals) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (submitting a search term)
/// - System events (registry responses, store bootstrap)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
