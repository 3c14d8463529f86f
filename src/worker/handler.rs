//! Fetch worker implementation.
//!
//! [`FetchWorker`] owns the transport and the list cache and turns each
//! [`WorkerMessage`] into exactly one [`WorkerResponse`]. It is plain
//! synchronous code; [`crate::worker::WorkerThread`] runs it off the main
//! thread.

use crate::domain::error::{DexError, Result};
use crate::domain::DetailKey;
use crate::source::graphql::{parse_collection, parse_detail, GraphqlRequest};
use crate::source::{CollectionCache, Transport};
use crate::worker::{WorkerMessage, WorkerResponse};

pub struct FetchWorker<T: Transport> {
    transport: T,
    cache: CollectionCache,
}

impl<T: Transport> FetchWorker<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cache: CollectionCache::new(),
        }
    }

    #[must_use]
    pub const fn cache(&self) -> &CollectionCache {
        &self.cache
    }

    /// Helper for handling transport results with consistent logging.
    fn handle_transport_result<V, S, F>(
        operation: &str,
        result: Result<V>,
        on_success: S,
        on_failure: F,
    ) -> WorkerResponse
    where
        S: FnOnce(V) -> WorkerResponse,
        F: FnOnce(DexError) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation, "fetch successful");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation, error = %e, "fetch failed");
                on_failure(e)
            }
        }
    }

    /// Handles `FetchCollection`, answering from the cache unless `refresh`.
    fn handle_fetch_collection(&mut self, request_id: u64, first: u32, refresh: bool) -> WorkerResponse {
        if !refresh {
            if let Some(items) = self.cache.get(first) {
                tracing::debug!(
                    first,
                    item_count = items.len(),
                    fetched_at = ?self.cache.fetched_at(first),
                    "collection served from cache"
                );
                return WorkerResponse::CollectionLoaded {
                    request_id,
                    first,
                    items: items.to_vec(),
                };
            }
        }

        let result = self
            .transport
            .execute(&GraphqlRequest::collection(first))
            .and_then(parse_collection);

        let cache = &mut self.cache;
        Self::handle_transport_result(
            "fetch collection",
            result,
            |items| WorkerResponse::CollectionLoaded {
                request_id,
                first,
                items: cache.merge(first, items),
            },
            |e| WorkerResponse::CollectionFailed {
                request_id,
                first,
                message: e.to_string(),
            },
        )
    }

    fn handle_fetch_detail(&self, request_id: u64, key: DetailKey) -> WorkerResponse {
        let result = self
            .transport
            .execute(&GraphqlRequest::detail(&key))
            .and_then(|data| parse_detail(data, &key));

        let failed_key = key.clone();
        Self::handle_transport_result(
            "fetch detail",
            result,
            |record| WorkerResponse::DetailLoaded {
                request_id,
                key,
                record,
            },
            |e| {
                if e.is_not_found() {
                    WorkerResponse::DetailNotFound {
                        request_id,
                        key: failed_key,
                    }
                } else {
                    WorkerResponse::DetailFailed {
                        request_id,
                        key: failed_key,
                        message: e.to_string(),
                    }
                }
            },
        )
    }

    /// Processes a worker message and returns the response for it.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::FetchCollection {
                request_id,
                first,
                refresh,
            } => self.handle_fetch_collection(request_id, first, refresh),

            WorkerMessage::FetchDetail { request_id, key } => self.handle_fetch_detail(request_id, key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    struct Scripted {
        answer: fn(&GraphqlRequest, usize) -> Result<serde_json::Value>,
        calls: Cell<usize>,
    }

    impl Transport for Scripted {
        fn execute(&self, request: &GraphqlRequest) -> Result<serde_json::Value> {
            let n = self.calls.get();
            self.calls.set(n + 1);
            (self.answer)(request, n)
        }
    }

    fn worker(answer: fn(&GraphqlRequest, usize) -> Result<serde_json::Value>) -> FetchWorker<Scripted> {
        FetchWorker::new(Scripted {
            answer,
            calls: Cell::new(0),
        })
    }

    #[test]
    fn collection_is_cached_until_refresh() {
        let mut w = worker(|_, call| {
            Ok(json!({ "pokemons": [
                { "id": format!("id{call}"), "name": format!("p{call}"), "number": "1" }
            ]}))
        });
        let fetch = |refresh| WorkerMessage::FetchCollection {
            request_id: 1,
            first: 1,
            refresh,
        };

        let first = w.handle_message(fetch(false));
        let cached = w.handle_message(fetch(false));
        assert_eq!(first, cached);
        assert_eq!(w.transport.calls.get(), 1);

        match w.handle_message(fetch(true)) {
            WorkerResponse::CollectionLoaded { items, .. } => assert_eq!(items.len(), 2),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn transport_errors_become_failed_responses() {
        let mut w = worker(|_, _| Err(DexError::Transport("HTTP 503".into())));
        let resp = w.handle_message(WorkerMessage::FetchCollection {
            request_id: 9,
            first: 10,
            refresh: false,
        });
        assert!(matches!(resp, WorkerResponse::CollectionFailed { request_id: 9, ref message, .. }
            if message.contains("HTTP 503")));
        assert!(w.cache().is_empty());
    }

    #[test]
    fn null_detail_becomes_not_found() {
        let mut w = worker(|_, _| Ok(json!({ "pokemon": null })));
        let key = DetailKey::Name("Missingno".into());
        let resp = w.handle_message(WorkerMessage::FetchDetail {
            request_id: 2,
            key: key.clone(),
        });
        assert_eq!(resp, WorkerResponse::DetailNotFound { request_id: 2, key });
    }

    #[test]
    fn detail_request_passes_the_key_variable() {
        let mut w = worker(|req, _| {
            assert_eq!(req.variables["name"], "Pikachu");
            Ok(json!({ "pokemon": { "id": "x", "name": "Pikachu", "number": "025" } }))
        });
        let resp = w.handle_message(WorkerMessage::FetchDetail {
            request_id: 4,
            key: DetailKey::Name("Pikachu".into()),
        });
        assert!(matches!(resp, WorkerResponse::DetailLoaded { ref record, .. } if record.name == "Pikachu"));
    }
}
