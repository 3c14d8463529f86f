//! Query-string codec for [`ViewState`].
//!
//! Decoding is total: missing, empty or unrecognized values resolve to the field
//! default. Encoding edits one key of an existing query string and leaves every
//! other key in place, so parameters owned by other features survive.

use super::state::{SortKey, TypeFilter, ViewMode, ViewState, ALL_TYPES_SENTINEL};

pub const TYPE_PARAM: &str = "type";
pub const SORT_PARAM: &str = "sort";
pub const VIEW_PARAM: &str = "view";

/// An ordered list of decoded query pairs.
///
/// Behaves like the browser's `URLSearchParams`: `get` returns the first value
/// for a key, `set` replaces the first occurrence and drops later duplicates
/// (or appends when absent) and `remove` drops all occurrences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parses a query string, with or without its leading `?`.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((key, value)) => (decode_component(key), decode_component(value)),
                None => (decode_component(segment), String::new()),
            })
            .collect();
        Self { pairs }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, key: &str, value: &str) {
        let mut seen = false;
        self.pairs.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            *v = value.to_string();
            true
        });
        if !seen {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serializes back to `k=v&k=v` form without a leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Decodes one form-encoded component. Invalid UTF-8 escapes leave the text
/// as-is rather than failing.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).map(|text| text.into_owned());
    decoded.unwrap_or(spaced)
}

/// Reads a [`ViewState`] from a query string.
///
/// # Examples
///
/// ```
/// use dexview::view::{decode, SortKey, TypeFilter, ViewMode};
///
/// let state = decode("?type=Fire&sort=bogus");
/// assert_eq!(state.type_filter.as_str(), "Fire");
/// assert_eq!(state.sort, SortKey::NumberAsc);
/// assert_eq!(state.mode, ViewMode::Grid);
/// assert_eq!(decode("").type_filter, TypeFilter::All);
/// ```
#[must_use]
pub fn decode(query: &str) -> ViewState {
    let params = QueryParams::parse(query);
    ViewState {
        type_filter: params
            .get(TYPE_PARAM)
            .and_then(TypeFilter::parse)
            .unwrap_or_default(),
        sort: params
            .get(SORT_PARAM)
            .and_then(SortKey::parse)
            .unwrap_or_default(),
        mode: params
            .get(VIEW_PARAM)
            .and_then(ViewMode::parse)
            .unwrap_or_default(),
    }
}

/// Writes `key=value` into `existing`, returning the new query string.
///
/// An empty value or the `All` sentinel removes the key instead. Keys other
/// than `key` are preserved in their original order.
///
/// # Examples
///
/// ```
/// use dexview::view::encode;
///
/// assert_eq!(encode("?foo=1&type=Fire", "type", "All"), "foo=1");
/// assert_eq!(encode("foo=1", "sort", "nameDesc"), "foo=1&sort=nameDesc");
/// ```
#[must_use]
pub fn encode(existing: &str, key: &str, value: &str) -> String {
    let mut params = QueryParams::parse(existing);
    if value.is_empty() || value == ALL_TYPES_SENTINEL {
        params.remove(key);
    } else {
        params.set(key, value);
    }
    params.to_query_string()
}

/// A single user edit to the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewChange {
    Type(TypeFilter),
    Sort(SortKey),
    Mode(ViewMode),
}

impl ViewChange {
    #[must_use]
    pub const fn param(self) -> &'static str {
        match self {
            Self::Type(_) => TYPE_PARAM,
            Self::Sort(_) => SORT_PARAM,
            Self::Mode(_) => VIEW_PARAM,
        }
    }

    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Type(filter) => filter.as_str(),
            Self::Sort(sort) => sort.as_str(),
            Self::Mode(mode) => mode.as_str(),
        }
    }

    /// Applies this change to `existing` via [`encode`].
    #[must_use]
    pub fn apply(self, existing: &str) -> String {
        encode(existing, self.param(), self.value())
    }
}
