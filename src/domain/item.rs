//! Collection item domain model.
//!
//! A [`CollectionItem`] is the lightweight summary record for one Pokémon as
//! returned by the list query. Items are immutable snapshots: the collection
//! source replaces the whole vector on refetch and nothing downstream mutates
//! them.

use super::null_as_default;
use serde::{Deserialize, Serialize};

/// Width the display number is zero-padded to (`#001`).
const NUMBER_DISPLAY_WIDTH: usize = 3;

/// Summary record for one catalog entry shown in the list.
///
/// # Fields
///
/// - `id`: opaque stable identifier assigned by the API
/// - `name`: display name; matched case-insensitively by search
/// - `number`: ordinal designation kept as the API's string (e.g. `"001"`)
/// - `image`: URI of the sprite
/// - `types`: category tags in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionItem {
    pub id: String,
    pub name: String,
    pub number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub types: Vec<String>,
}

impl CollectionItem {
    /// Creates an item with no image.
    ///
    /// # Examples
    ///
    /// ```
    /// use dexview::domain::CollectionItem;
    ///
    /// let item = CollectionItem::new("UG9rZW1vbjowMDQ=", "Charmander", "004", &["Fire"]);
    /// assert!(item.has_type("Fire"));
    /// assert!(!item.has_type("fire"));
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        number: impl Into<String>,
        types: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number: number.into(),
            image: String::new(),
            types: types.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    /// Returns the numeric value of `number`, or `None` when it does not parse.
    ///
    /// Surrounding whitespace is ignored and a blank number counts as zero.
    /// Non-finite spellings (`"inf"`, `"NaN"`) are treated as unparsable.
    ///
    /// ```
    /// use dexview::domain::CollectionItem;
    ///
    /// let mut item = CollectionItem::new("x", "Mew", " 151 ", &[]);
    /// assert_eq!(item.numeric_number(), Some(151.0));
    /// item.number = "??".into();
    /// assert_eq!(item.numeric_number(), None);
    /// ```
    #[must_use]
    pub fn numeric_number(&self) -> Option<f64> {
        let trimmed = self.number.trim();
        if trimmed.is_empty() {
            return Some(0.0);
        }
        trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
    }

    /// Returns whether `tag` is one of this item's types (exact match).
    #[must_use]
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }

    /// Returns the number formatted for cards, e.g. `#025`.
    #[must_use]
    pub fn display_number(&self) -> String {
        format!("#{:0>width$}", self.number, width = NUMBER_DISPLAY_WIDTH)
    }
}
