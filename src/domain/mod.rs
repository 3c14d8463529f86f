//! Domain layer for dexview.
//!
//! This module contains the record types shared by every other layer and the
//! crate error type, independent of transport, rendering or routing concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: List summary record
//! - [`detail`]: Full per-item record shown in the overlay
//!
//! # Examples
//!
//! ```
//! use dexview::domain::{CollectionItem, Result};
//!
//! fn starter() -> Result<CollectionItem> {
//!     Ok(CollectionItem::new("UG9rZW1vbjowMDE=", "Bulbasaur", "001", &["Grass", "Poison"]))
//! }
//! ```

pub mod detail;
pub mod error;
pub mod item;

pub use detail::{DetailKey, DetailRecord, Dimension};
pub use error::{DexError, Result};
pub use item::CollectionItem;

use serde::{Deserialize, Deserializer};

/// Deserializes an explicit JSON `null` as the type's default value.
///
/// The public API returns `null` for absent lists and nested objects rather
/// than omitting the field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
