//! Package registry access.

mod client;
mod error;
mod types;

pub use client::{RegistryClient, SearchBackend};
pub use error::{innermost_message, SearchError};
pub use types::{PackageSummary, SearchObject, SearchResponse};
