use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde_json::Value;

use crate::data_source::{CatalogRequest, CatalogSource, FetchFuture, SourceError};

/// In-memory source answering each operation with a canned document.
///
/// Used for deterministic tests. Every request is recorded
/// so callers can assert how often the upstream was hit.
#[derive(Debug, Default)]
pub struct FixtureCatalogSource {
    replies: HashMap<&'static str, Result<Value, SourceError>>,
    requests: Mutex<Vec<CatalogRequest>>,
}

impl FixtureCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `operation` (e.g. `get_home`) with `document`.
    pub fn with_document(mut self, operation: &'static str, document: Value) -> Self {
        self.replies.insert(operation, Ok(document));
        self
    }

    /// Fails `operation` with `error`.
    pub fn with_failure(mut self, operation: &'static str, error: SourceError) -> Self {
        self.replies.insert(operation, Err(error));
        self
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<CatalogRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests received for `operation`.
    pub fn calls(&self, operation: &str) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|request| request.operation() == operation)
            .count()
    }
}

impl CatalogSource for FixtureCatalogSource {
    fn name(&self) -> &'static str {
        "fixture"
    }

    fn fetch<'a>(&'a self, request: CatalogRequest) -> FetchFuture<'a> {
        Box::pin(async move {
            let operation = request.operation();
            self.requests
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(request);

            self.replies.get(operation).cloned().unwrap_or_else(|| {
                Err(SourceError::unavailable(format!(
                    "no fixture registered for {operation}"
                )))
            })
        })
    }
}
