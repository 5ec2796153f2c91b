//! Wire types for the registry search endpoint.

use serde::Deserialize;

/// Body of `GET /-/v1/search`.
///
/// Only the fields the app reads are declared; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub objects: Vec<SearchObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchObject {
    pub package: PackageSummary,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackageSummary {
    pub name: String,
}

impl SearchResponse {
    /// Package names in response order.
    pub fn into_names(self) -> Vec<String> {
        self.objects
            .into_iter()
            .map(|object| object.package.name)
            .collect()
    }
}
