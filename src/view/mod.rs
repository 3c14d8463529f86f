//! URL-backed view state.
//!
//! The type filter, sort key and display mode are persisted in the location's
//! query string so that a location fully reproduces the list view. This module
//! owns the typed [`ViewState`], the query codec and in-app [`Location`]s.
//!
//! # Organization
//!
//! - [`state`]: Closed enums for each view field
//! - [`codec`]: Total decoding and key-preserving encoding
//! - [`route`]: List and detail locations
//! - [`history`]: Push/replace session history

pub mod codec;
pub mod history;
pub mod route;
pub mod state;

pub use codec::{decode, encode, QueryParams, ViewChange};
pub use history::History;
pub use route::Location;
pub use state::{PokemonType, SortKey, TypeFilter, ViewMode, ViewState};
