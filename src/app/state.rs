//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything the viewer shows: the
//! current location (and the view state decoded from it), the transient search
//! query, the collection and detail stores, the UI state cells and the
//! derived list of visible items.
//!
//! # Derived State
//!
//! `visible` is recomputed by [`AppState::refresh_visible`] whenever the
//! collection, the query or the view state changes. Nothing else writes it.

use crate::app::{NavCell, ThemeCell, ThemeMode};
use crate::domain::CollectionItem;
use crate::pipeline::{self, normalize_query};
use crate::source::{CollectionStore, DetailLookup, DetailStatus, PendingDetail};
use crate::ui::helpers::match_ranges;
use crate::ui::theme::{Theme, Themes};
use crate::ui::viewmodel::{
    DetailBody, DetailPanel, DetailRow, DetailValue, DisplayItem, EmptyState, FooterInfo,
    HeaderInfo, ListBody, NavInfo, Pill, SearchBarInfo, UIViewModel, NOT_FOUND_TEXT,
    SEARCH_PLACEHOLDER,
};
use crate::view::{Location, SortKey, TypeFilter, ViewMode, ViewState};

const TITLE: &str = "Pokédex";
const KEYBINDINGS: &str = "search <text> · type <Tag> · sort <key> · view grid|list · open <n|name> · close · more · reload · nav · theme · quit";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current location; its query string is the persisted view state.
    pub location: Location,

    /// View state decoded from `location`.
    pub view_state: ViewState,

    /// Free-text search. Lives only here, never in the location.
    pub query: String,

    pub collection: CollectionStore,
    pub detail: DetailLookup,

    /// Output of the filter-sort pipeline over `collection`.
    pub visible: Vec<CollectionItem>,

    pub nav: NavCell,
    pub theme: ThemeCell,
    pub themes: Themes,

    /// How much `first` grows per "load more".
    pub load_more_step: u32,
}

impl AppState {
    /// Creates a state showing `location` with nothing fetched yet.
    ///
    /// # Example
    ///
    /// ```
    /// use dexview::app::{AppState, ThemeMode};
    /// use dexview::ui::Themes;
    /// use dexview::view::Location;
    ///
    /// let state = AppState::new(Location::parse("/pokemon?view=list"), 1000, 100, ThemeMode::Dark, Themes::default());
    /// assert!(state.visible.is_empty());
    /// assert_eq!(state.view_state.mode.as_str(), "list");
    /// ```
    #[must_use]
    pub fn new(
        location: Location,
        page_size: u32,
        load_more_step: u32,
        theme_mode: ThemeMode,
        themes: Themes,
    ) -> Self {
        Self {
            view_state: location.view_state(),
            location,
            query: String::new(),
            collection: CollectionStore::new(page_size),
            detail: DetailLookup::new(),
            visible: Vec::new(),
            nav: NavCell::default(),
            theme: ThemeCell::new(theme_mode),
            themes,
            load_more_step,
        }
    }

    /// Moves to `location`, re-deriving the view state and the detail key.
    ///
    /// Returns the detail request to issue when the selected key changed.
    pub fn navigate(&mut self, location: Location) -> Option<PendingDetail> {
        tracing::debug!(from = %self.location, to = %location, "navigating");
        self.location = location;
        let view_state = self.location.view_state();
        if view_state != self.view_state {
            self.view_state = view_state;
            self.refresh_visible();
        }
        self.detail.select(self.location.detail_key())
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.refresh_visible();
    }

    /// Recomputes `visible` from the collection, query and view state.
    pub fn refresh_visible(&mut self) {
        self.visible = pipeline::project(self.collection.items(), &self.query, &self.view_state);
    }

    /// Returns the visible item at 1-based `index`.
    #[must_use]
    pub fn item_at(&self, index: usize) -> Option<&CollectionItem> {
        index.checked_sub(1).and_then(|i| self.visible.get(i))
    }

    #[must_use]
    pub fn active_theme(&self) -> &Theme {
        self.themes.get(self.theme.mode())
    }

    /// Transforms state into a renderable view model.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        UIViewModel {
            header: HeaderInfo {
                title: TITLE.to_string(),
                address: self.location.to_string(),
            },
            nav: self.compute_nav(),
            search_bar: SearchBarInfo {
                query: self.query.clone(),
                placeholder: SEARCH_PLACEHOLDER.to_string(),
            },
            list: self.compute_list(),
            detail: self.compute_detail(),
            footer: FooterInfo {
                keybindings: KEYBINDINGS.to_string(),
            },
        }
    }

    fn compute_nav(&self) -> NavInfo {
        let vs = self.view_state;
        NavInfo {
            collapsed: self.nav.is_collapsed(),
            type_pills: TypeFilter::choices()
                .into_iter()
                .map(|t| Pill {
                    label: t.as_str().to_string(),
                    active: t == vs.type_filter,
                })
                .collect(),
            sort_pills: SortKey::ALL
                .into_iter()
                .map(|k| Pill {
                    label: k.label().to_string(),
                    active: k == vs.sort,
                })
                .collect(),
            view_pills: ViewMode::ALL
                .into_iter()
                .map(|m| Pill {
                    label: m.label().to_string(),
                    active: m == vs.mode,
                })
                .collect(),
        }
    }

    fn compute_list(&self) -> ListBody {
        if self.collection.is_loading() {
            return ListBody::Loading;
        }
        if self.collection.error().is_some() {
            return ListBody::Failed;
        }
        if self.visible.is_empty() {
            return ListBody::Empty(EmptyState {
                message: NOT_FOUND_TEXT.to_string(),
            });
        }

        let needle = normalize_query(&self.query);
        let items = self
            .visible
            .iter()
            .enumerate()
            .map(|(idx, item)| DisplayItem {
                index: idx + 1,
                name: item.name.clone(),
                number: item.display_number(),
                types: item.types.clone(),
                image: item.image.clone(),
                highlight_ranges: match_ranges(&item.name, &needle),
            })
            .collect();

        ListBody::Cards {
            mode: self.view_state.mode,
            items,
        }
    }

    fn compute_detail(&self) -> Option<DetailPanel> {
        let key = self.detail.key()?;
        let body = match self.detail.status() {
            DetailStatus::Idle | DetailStatus::Loading => DetailBody::Loading,
            DetailStatus::Failed(_) => DetailBody::Failed,
            DetailStatus::NotFound => DetailBody::NotFound,
            DetailStatus::Loaded(_) => match self.detail.data() {
                Some(record) => {
                    return Some(DetailPanel {
                        title: record.name.clone(),
                        body: DetailBody::Record {
                            image: record.image.clone(),
                            rows: detail_rows(record),
                        },
                    })
                }
                None => DetailBody::NotFound,
            },
        };
        Some(DetailPanel {
            title: key.to_string(),
            body,
        })
    }
}

fn detail_rows(record: &crate::domain::DetailRecord) -> Vec<DetailRow> {
    let text = |label, value: String| DetailRow {
        label,
        value: DetailValue::Text(value),
    };
    let chips = |label, values: &[String]| DetailRow {
        label,
        value: DetailValue::Chips(values.to_vec()),
    };
    let stat = |value: Option<i64>| value.map_or_else(|| "–".to_string(), |v| v.to_string());

    vec![
        text("Number", record.summary().display_number()),
        text("Classification", record.classification.clone()),
        chips("Types", &record.types),
        chips("Resistant", &record.resistant),
        chips("Weaknesses", &record.weaknesses),
        text("Height", record.height.range()),
        text("Weight", record.weight.range()),
        text("Max HP / CP", format!("{} / {}", stat(record.max_hp), stat(record.max_cp))),
        text(
            "Flee rate",
            record
                .flee_rate
                .map_or_else(|| "–".to_string(), |rate| format!("{:.0}%", rate * 100.0)),
        ),
    ]
}
