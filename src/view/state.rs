//! View-state types: type filter, sort key and display mode.
//!
//! Every field is a closed enumeration. Parsing a raw URL value either yields a
//! member or `None`; callers fall back to the field default on `None`, which is
//! what makes decoding total.

use serde::{Deserialize, Serialize};

/// Sentinel URL value meaning "no type filter".
pub const ALL_TYPES_SENTINEL: &str = "All";

/// The closed set of Pokémon type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PokemonType {
    Normal,
    Grass,
    Fire,
    Water,
    Electric,
    Bug,
    Poison,
    Flying,
    Ground,
    Rock,
    Psychic,
    Ice,
    Dragon,
    Ghost,
    Dark,
    Steel,
    Fairy,
    Fighting,
}

impl PokemonType {
    /// Every tag, in nav display order.
    pub const ALL: [Self; 18] = [
        Self::Normal,
        Self::Grass,
        Self::Fire,
        Self::Water,
        Self::Electric,
        Self::Bug,
        Self::Poison,
        Self::Flying,
        Self::Ground,
        Self::Rock,
        Self::Psychic,
        Self::Ice,
        Self::Dragon,
        Self::Ghost,
        Self::Dark,
        Self::Steel,
        Self::Fairy,
        Self::Fighting,
    ];

    /// Returns the tag exactly as the API stores it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Grass => "Grass",
            Self::Fire => "Fire",
            Self::Water => "Water",
            Self::Electric => "Electric",
            Self::Bug => "Bug",
            Self::Poison => "Poison",
            Self::Flying => "Flying",
            Self::Ground => "Ground",
            Self::Rock => "Rock",
            Self::Psychic => "Psychic",
            Self::Ice => "Ice",
            Self::Dragon => "Dragon",
            Self::Ghost => "Ghost",
            Self::Dark => "Dark",
            Self::Steel => "Steel",
            Self::Fairy => "Fairy",
            Self::Fighting => "Fighting",
        }
    }

    /// Parses a tag; matching is exact and case-sensitive.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }
}

/// Selected category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TypeFilter {
    #[default]
    All,
    Only(PokemonType),
}

impl TypeFilter {
    /// Returns the URL value (`"All"` or the tag).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => ALL_TYPES_SENTINEL,
            Self::Only(t) => t.as_str(),
        }
    }

    /// Parses a URL value; unknown tags yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        if value == ALL_TYPES_SENTINEL {
            return Some(Self::All);
        }
        PokemonType::from_tag(value).map(Self::Only)
    }

    /// `All` followed by every tag, as shown in the nav filter pills.
    #[must_use]
    pub fn choices() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(PokemonType::ALL.into_iter().map(Self::Only))
            .collect()
    }
}

/// Ordering applied to the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    NumberAsc,
    NumberDesc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::NumberAsc, Self::NumberDesc, Self::NameAsc, Self::NameDesc];

    /// Returns the URL value, e.g. `"numberAsc"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NumberAsc => "numberAsc",
            Self::NumberDesc => "numberDesc",
            Self::NameAsc => "nameAsc",
            Self::NameDesc => "nameDesc",
        }
    }

    /// Parses a URL value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == value)
    }

    /// Short pill label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NumberAsc => "# ↑",
            Self::NumberDesc => "# ↓",
            Self::NameAsc => "A–Z",
            Self::NameDesc => "Z–A",
        }
    }
}

/// Display density. Carried alongside the data state but does not affect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub const ALL: [Self; 2] = [Self::Grid, Self::List];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::List => "List",
        }
    }
}

/// The URL-persisted part of the view: filter, sort and display mode.
///
/// The free-text search query is intentionally not a field here; it lives in
/// application state only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub type_filter: TypeFilter,
    pub sort: SortKey,
    pub mode: ViewMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_url_defaults() {
        let state = ViewState::default();
        assert_eq!(state.type_filter.as_str(), "All");
        assert_eq!(state.sort.as_str(), "numberAsc");
        assert_eq!(state.mode.as_str(), "grid");
    }

    #[test]
    fn type_parsing_is_case_sensitive() {
        assert_eq!(TypeFilter::parse("Fire"), Some(TypeFilter::Only(PokemonType::Fire)));
        assert_eq!(TypeFilter::parse("fire"), None);
        assert_eq!(TypeFilter::parse("All"), Some(TypeFilter::All));
    }

    #[test]
    fn every_tag_round_trips_through_its_text() {
        for tag in PokemonType::ALL {
            assert_eq!(PokemonType::from_tag(tag.as_str()), Some(tag));
        }
        assert_eq!(TypeFilter::choices().len(), 19);
    }

    #[test]
    fn unknown_sort_and_view_values_are_rejected() {
        assert_eq!(SortKey::parse("nameAsc"), Some(SortKey::NameAsc));
        assert_eq!(SortKey::parse("NAMEASC"), None);
        assert_eq!(ViewMode::parse("list"), Some(ViewMode::List));
        assert_eq!(ViewMode::parse("table"), None);
    }
}
