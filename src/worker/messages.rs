//! Worker thread message types for cross-thread communication.
//!
//! Every request carries the request id issued by the store that asked for it,
//! and every response echoes that id (and the detail key, where relevant) so
//! the main thread can drop answers that are no longer wanted.

use crate::domain::{CollectionItem, DetailKey, DetailRecord};
use crate::source::{PendingCollection, PendingDetail};
use serde::{Deserialize, Serialize};

/// Messages sent from the main thread to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Fetch the first `first` list items.
    FetchCollection {
        request_id: u64,
        first: u32,

        /// Bypass a cached entry for `first` and merge a fresh response into it.
        refresh: bool,
    },

    /// Fetch one detail record.
    FetchDetail { request_id: u64, key: DetailKey },
}

impl WorkerMessage {
    #[must_use]
    pub fn fetch_collection(pending: &PendingCollection, refresh: bool) -> Self {
        Self::FetchCollection {
            request_id: pending.request_id,
            first: pending.first,
            refresh,
        }
    }

    #[must_use]
    pub fn fetch_detail(pending: &PendingDetail) -> Self {
        Self::FetchDetail {
            request_id: pending.request_id,
            key: pending.key.clone(),
        }
    }
}

/// Responses sent from the worker thread back to the main thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    CollectionLoaded {
        request_id: u64,
        first: u32,
        items: Vec<CollectionItem>,
    },

    CollectionFailed {
        request_id: u64,
        first: u32,
        /// Human-readable error message.
        message: String,
    },

    DetailLoaded {
        request_id: u64,
        key: DetailKey,
        record: DetailRecord,
    },

    /// The lookup succeeded but `key` matched nothing.
    DetailNotFound { request_id: u64, key: DetailKey },

    DetailFailed {
        request_id: u64,
        key: DetailKey,
        /// Human-readable error message.
        message: String,
    },
}

impl WorkerResponse {
    /// The id of the request this response answers.
    #[must_use]
    pub const fn request_id(&self) -> u64 {
        match self {
            Self::CollectionLoaded { request_id, .. }
            | Self::CollectionFailed { request_id, .. }
            | Self::DetailLoaded { request_id, .. }
            | Self::DetailNotFound { request_id, .. }
            | Self::DetailFailed { request_id, .. } => *request_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_copy_pending_request() {
        let pending = PendingDetail {
            request_id: 7,
            key: DetailKey::Name("Eevee".into()),
        };
        assert_eq!(
            WorkerMessage::fetch_detail(&pending),
            WorkerMessage::FetchDetail {
                request_id: 7,
                key: DetailKey::Name("Eevee".into())
            }
        );
    }

    #[test]
    fn messages_serialize_for_logging() {
        let msg = WorkerMessage::fetch_collection(&PendingCollection { request_id: 1, first: 1000 }, false);
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"first\":1000"));
        let back: WorkerMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn request_id_is_exposed_for_every_variant() {
        let resp = WorkerResponse::DetailNotFound {
            request_id: 3,
            key: DetailKey::Name("Missingno".into()),
        };
        assert_eq!(resp.request_id(), 3);
    }
}
