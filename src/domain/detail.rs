//! Detail record domain model.
//!
//! A [`DetailRecord`] is the full record for one Pokémon, fetched on demand
//! when the detail overlay opens. It carries every [`CollectionItem`] field plus
//! combat and physical attributes that are only shown in the overlay.

use super::null_as_default;
use super::CollectionItem;
use serde::{Deserialize, Serialize};

/// Lookup key for a detail record.
///
/// The API resolves either a stable id or a display name. Blank keys mean
/// "nothing selected" and are never constructed; see [`DetailKey::name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetailKey {
    Id(String),
    Name(String),
}

impl DetailKey {
    /// Builds a name key, or `None` when the name is blank.
    ///
    /// ```
    /// use dexview::domain::DetailKey;
    ///
    /// assert!(DetailKey::name("  ").is_none());
    /// assert_eq!(DetailKey::name("Eevee").unwrap().as_str(), "Eevee");
    /// ```
    #[must_use]
    pub fn name(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        (!name.trim().is_empty()).then_some(Self::Name(name))
    }

    /// Builds an id key, or `None` when the id is blank.
    #[must_use]
    pub fn id(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        (!id.trim().is_empty()).then_some(Self::Id(id))
    }

    /// Returns the raw key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Id(value) | Self::Name(value) => value,
        }
    }
}

impl std::fmt::Display for DetailKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `{minimum, maximum}` pair of display strings with units, e.g. `"0.61m"`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dimension {
    #[serde(default, deserialize_with = "null_as_default")]
    pub minimum: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub maximum: String,
}

impl Dimension {
    /// Formats the range as `min – max`.
    #[must_use]
    pub fn range(&self) -> String {
        format!("{} – {}", self.minimum, self.maximum)
    }
}

/// Full record for one catalog entry.
///
/// Field names follow the GraphQL schema (`maxHP`, `maxCP`, `fleeRate`) on the
/// wire and snake case in Rust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRecord {
    pub id: String,
    pub name: String,
    pub number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub types: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub classification: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resistant: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weaknesses: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub height: Dimension,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight: Dimension,
    #[serde(rename = "maxHP", default)]
    pub max_hp: Option<i64>,
    #[serde(rename = "maxCP", default)]
    pub max_cp: Option<i64>,
    #[serde(default)]
    pub flee_rate: Option<f64>,
}

impl DetailRecord {
    /// Projects the summary fields shared with the list view.
    #[must_use]
    pub fn summary(&self) -> CollectionItem {
        CollectionItem {
            id: self.id.clone(),
            name: self.name.clone(),
            number: self.number.clone(),
            image: self.image.clone(),
            types: self.types.clone(),
        }
    }

    /// Returns whether this record answers a lookup for `key`.
    ///
    /// Names compare case-insensitively because the server resolves them that
    /// way.
    #[must_use]
    pub fn answers(&self, key: &DetailKey) -> bool {
        match key {
            DetailKey::Id(id) => &self.id == id,
            DetailKey::Name(name) => self.name.to_lowercase() == name.to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU: &str = r#"{
        "id": "UG9rZW1vbjowMjU=",
        "number": "025",
        "name": "Pikachu",
        "weight": { "minimum": "5.25kg", "maximum": "6.75kg" },
        "height": { "minimum": "0.35m", "maximum": "0.45m" },
        "classification": "Mouse Pokémon",
        "types": ["Electric"],
        "resistant": ["Electric", "Flying", "Steel"],
        "weaknesses": ["Ground"],
        "fleeRate": 0.1,
        "maxCP": 777,
        "maxHP": 887,
        "image": "https://img.pokemondb.net/artwork/pikachu.jpg"
    }"#;

    #[test]
    fn deserializes_graphql_field_names() {
        let record: DetailRecord = serde_json::from_str(PIKACHU).unwrap();
        assert_eq!(record.max_hp, Some(887));
        assert_eq!(record.max_cp, Some(777));
        assert_eq!(record.flee_rate, Some(0.1));
        assert_eq!(record.height.range(), "0.35m – 0.45m");
        assert_eq!(record.weaknesses, vec!["Ground"]);
    }

    #[test]
    fn null_nested_fields_are_tolerated() {
        let json = r#"{"id":"x","name":"Ditto","number":"132","height":null,
            "resistant":null,"maxHP":null}"#;
        let record: DetailRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.height, Dimension::default());
        assert!(record.resistant.is_empty());
        assert_eq!(record.max_hp, None);
    }

    #[test]
    fn answers_by_id_or_name() {
        let record: DetailRecord = serde_json::from_str(PIKACHU).unwrap();
        assert!(record.answers(&DetailKey::Id("UG9rZW1vbjowMjU=".into())));
        assert!(record.answers(&DetailKey::Name("pikachu".into())));
        assert!(!record.answers(&DetailKey::Name("Eevee".into())));
        assert!(!record.answers(&DetailKey::Id("Pikachu".into())));
        assert_eq!(record.summary().types, vec!["Electric"]);
    }
}
