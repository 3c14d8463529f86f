//! Data sources: the GraphQL API and the client-side state built from it.
//!
//! # Modules
//!
//! - `graphql`: Query documents and response decoding
//! - `transport`: [`Transport`] trait and the HTTP implementation
//! - `cache`: List responses keyed by request size
//! - `collection`: `{items, loading, error}` for the list
//! - `detail`: Keyed detail lookup with a staleness guard

pub mod cache;
pub mod collection;
pub mod detail;
pub mod graphql;
pub mod transport;

pub use cache::CollectionCache;
pub use collection::{CollectionStore, PendingCollection};
pub use detail::{DetailLookup, DetailOutcome, DetailStatus, PendingDetail};
pub use graphql::{parse_collection, parse_detail, GraphqlRequest};
pub use transport::{HttpTransport, Transport};
