//! In-app locations.
//!
//! A [`Location`] is the path plus query string the viewer is currently
//! showing. `/pokemon` is the list; `/pokemon/<name>` additionally opens the
//! detail overlay for `<name>`, and `/pokemon/id/<id>` opens it by record id.

use std::fmt;

use super::codec::{decode, ViewChange};
use super::state::ViewState;
use crate::domain::DetailKey;

/// Path segment under which the list and detail routes live.
pub const LIST_SEGMENT: &str = "pokemon";

/// Segment after [`LIST_SEGMENT`] marking an id route.
const ID_SEGMENT: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path component, always starting with `/`.
    pub path: String,
    /// Query string without the leading `?`.
    pub query: String,
}

impl Default for Location {
    fn default() -> Self {
        Self::list("")
    }
}

impl Location {
    /// Parses `path?query#fragment`; the fragment is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use dexview::view::Location;
    ///
    /// let loc = Location::parse("/pokemon/Mr.%20Mime?type=Psychic");
    /// assert_eq!(loc.detail_key().unwrap().as_str(), "Mr. Mime");
    /// assert_eq!(loc.query, "type=Psychic");
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.split_once('#').map_or(raw, |(before, _)| before);
        let (path, query) = raw.split_once('?').unwrap_or((raw, ""));
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        Self {
            path,
            query: query.to_string(),
        }
    }

    /// The list route carrying `query`.
    #[must_use]
    pub fn list(query: &str) -> Self {
        Self {
            path: format!("/{LIST_SEGMENT}"),
            query: query.trim_start_matches('?').to_string(),
        }
    }

    /// The detail route for `name`, keeping the current query so the list
    /// behind the overlay keeps its filter and sort.
    #[must_use]
    pub fn item(&self, name: &str) -> Self {
        Self {
            path: format!("/{LIST_SEGMENT}/{}", urlencoding::encode(name)),
            query: self.query.clone(),
        }
    }

    /// The list route reached by closing the overlay.
    #[must_use]
    pub fn closed(&self) -> Self {
        Self::list(&self.query)
    }

    /// Decodes the view state carried by the query.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        decode(&self.query)
    }

    /// Returns this location with `change` written into its query.
    #[must_use]
    pub fn with_change(&self, change: ViewChange) -> Self {
        Self {
            path: self.path.clone(),
            query: change.apply(&self.query),
        }
    }

    /// Returns the detail key named by the path, if any.
    ///
    /// Only `/pokemon/<name>` and `/pokemon/id/<id>` yield a key; a blank or
    /// undecodable segment means nothing is selected.
    ///
    /// ```
    /// use dexview::domain::DetailKey;
    /// use dexview::view::Location;
    ///
    /// let loc = Location::parse("/pokemon/id/UG9rZW1vbjowMjU%3D");
    /// assert_eq!(loc.detail_key(), DetailKey::id("UG9rZW1vbjowMjU="));
    /// ```
    #[must_use]
    pub fn detail_key(&self) -> Option<DetailKey> {
        let mut segments = self.path.split('/').filter(|s| !s.is_empty());
        if segments.next() != Some(LIST_SEGMENT) {
            return None;
        }
        let raw = segments.next()?;
        match segments.next() {
            Some(id) if raw == ID_SEGMENT => {
                DetailKey::id(urlencoding::decode(id).ok()?.into_owned())
            }
            _ => DetailKey::name(urlencoding::decode(raw).ok()?.into_owned()),
        }
    }

    /// Returns whether this location shows the list (with or without overlay).
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.path.split('/').find(|s| !s.is_empty()) == Some(LIST_SEGMENT)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            f.write_str(&self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{SortKey, ViewMode};

    #[test]
    fn list_route_has_no_detail_key() {
        assert!(Location::parse("/pokemon").detail_key().is_none());
        assert!(Location::parse("/pokemon/").detail_key().is_none());
        assert!(Location::parse("/pokemon/%20").detail_key().is_none());
        assert!(Location::parse("/").detail_key().is_none());
    }

    #[test]
    fn detail_key_ignores_other_prefixes() {
        assert!(Location::parse("/items/Pikachu").detail_key().is_none());
        assert_eq!(
            Location::parse("pokemon/Pikachu").detail_key(),
            DetailKey::name("Pikachu")
        );
    }

    #[test]
    fn id_route_selects_by_id() {
        let loc = Location::parse("/pokemon/id/UG9rZW1vbjoxMzM%3D?view=list");
        assert_eq!(loc.detail_key(), Some(DetailKey::Id("UG9rZW1vbjoxMzM=".into())));
        assert!(Location::parse("/pokemon/id/%20").detail_key().is_none());
        assert_eq!(loc.closed(), Location::parse("/pokemon?view=list"));
    }

    #[test]
    fn item_and_closed_preserve_query() {
        let loc = Location::parse("/pokemon?type=Fire&sort=nameAsc");
        let open = loc.item("Farfetch'd");
        assert_eq!(open.detail_key(), DetailKey::name("Farfetch'd"));
        assert_eq!(open.query, loc.query);
        assert_eq!(open.closed(), loc);
    }

    #[test]
    fn with_change_keeps_path() {
        let loc = Location::parse("/pokemon/Eevee?view=list");
        let next = loc.with_change(ViewChange::Sort(SortKey::NameDesc));
        assert_eq!(next.path, "/pokemon/Eevee");
        assert_eq!(next.view_state().sort, SortKey::NameDesc);
        assert_eq!(next.view_state().mode, ViewMode::List);
    }

    #[test]
    fn display_omits_empty_query() {
        assert_eq!(Location::list("").to_string(), "/pokemon");
        assert_eq!(Location::parse("/pokemon?view=list#top").to_string(), "/pokemon?view=list");
    }
}
