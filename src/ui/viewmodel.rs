//! View model types representing renderable UI state.
//!
//! View models are computed from state snapshots by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready data.

use crate::view::ViewMode;

pub const LOADING_TEXT: &str = "Loading…";
pub const COLLECTION_ERROR_TEXT: &str = "Couldn’t load Pokémon.";
pub const DETAIL_ERROR_TEXT: &str = "Couldn’t load details.";
pub const NOT_FOUND_TEXT: &str = "No Pokémon found.";
pub const SEARCH_PLACEHOLDER: &str = "Search by name or number…";

/// Complete view model for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub nav: NavInfo,
    pub search_bar: SearchBarInfo,
    pub list: ListBody,

    /// Overlay shown above the list when the location names an item.
    pub detail: Option<DetailPanel>,

    pub footer: FooterInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,

    /// Current location, shown like an address bar.
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavInfo {
    /// When collapsed only the active choices are shown.
    pub collapsed: bool,
    pub type_pills: Vec<Pill>,
    pub sort_pills: Vec<Pill>,
    pub view_pills: Vec<Pill>,
}

/// One selectable choice in the nav.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pill {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    pub placeholder: String,
}

/// Main content region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    Loading,
    Failed,
    Empty(EmptyState),
    Cards { mode: ViewMode, items: Vec<DisplayItem> },
}

/// One card in the grid or one row in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// 1-based position, used by `open <n>`.
    pub index: usize,
    pub name: String,

    /// Padded number, e.g. `#025`.
    pub number: String,
    pub types: Vec<String>,
    pub image: String,

    /// Character ranges of `name` matching the search query (exclusive end).
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    /// The record's name once loaded, otherwise the requested key.
    pub title: String,
    pub body: DetailBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailBody {
    Loading,
    Failed,
    NotFound,
    Record { image: String, rows: Vec<DetailRow> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: DetailValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailValue {
    Text(String),
    Chips(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}
