//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place `AppState` changes in response to the
//! outside world. It returns whether a re-render is needed plus the side
//! effects for the shell to run.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Start`, `Quit`
//! - **Navigation**: `Navigate`, `OpenItem`, `OpenIndex`, `CloseDetail`
//! - **View state**: `ChangeView`, `SetQuery`, `ToggleNav`, `ToggleTheme`
//! - **Fetching**: `LoadMore`, `Reload`
//! - **Worker**: `WorkerResponse` with typed message variants
//!
//! # Example
//!
//! ```
//! use dexview::app::{handle_event, Action, AppState, Event, ThemeMode};
//! use dexview::ui::Themes;
//! use dexview::view::Location;
//!
//! let mut state = AppState::new(Location::default(), 1000, 100, ThemeMode::Dark, Themes::default());
//! let (render, actions) = handle_event(&mut state, &Event::Start)?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::PostToWorker(_)));
//! # Ok::<(), dexview::domain::DexError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::Result;
use crate::source::DetailOutcome;
use crate::view::{Location, ViewChange};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user commands, history moves or worker responses.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Issues the initial collection fetch and resolves the starting location.
    Start,

    /// The shell moved to `location` (typed address, history back/forward).
    Navigate(Location),

    /// Replaces the free-text search query.
    SetQuery(String),

    /// Edits one view-state parameter, replacing the current history entry.
    ChangeView(ViewChange),

    /// Opens the detail overlay for an item by name.
    OpenItem(String),

    /// Opens the detail overlay for the visible item at a 1-based index.
    OpenIndex(usize),

    CloseDetail,

    /// Grows the requested page by the configured step.
    LoadMore,

    /// Refetches the collection (bypassing the cache) and the open detail.
    Reload,

    ToggleNav,
    ToggleTheme,
    Quit,

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the state changed in a way that needs a
/// re-render.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for handlers
/// that may fail.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Start => {
            let pending = state.collection.begin(state.collection.first());
            let mut actions = vec![Action::PostToWorker(WorkerMessage::fetch_collection(&pending, false))];
            if let Some(detail) = state.detail.select(state.location.detail_key()) {
                actions.push(Action::PostToWorker(WorkerMessage::fetch_detail(&detail)));
            }
            Ok((true, actions))
        }
        Event::Navigate(location) => {
            let actions = navigate_actions(state, location.clone());
            Ok((true, actions))
        }
        Event::SetQuery(query) => {
            if &state.query == query {
                return Ok((false, vec![]));
            }
            tracing::trace!(query = %query, "search query updated");
            state.set_query(query);
            Ok((true, vec![]))
        }
        Event::ChangeView(change) => {
            let location = state.location.with_change(*change);
            if location == state.location {
                tracing::debug!(?change, "view state unchanged");
                return Ok((false, vec![]));
            }
            Ok((true, push_location(state, location, true)))
        }
        Event::OpenItem(name) => {
            let name = name.trim();
            if name.is_empty() {
                return Ok((false, vec![]));
            }
            let location = state.location.item(name);
            Ok((true, push_location(state, location, false)))
        }
        Event::OpenIndex(index) => {
            let Some(item) = state.item_at(*index) else {
                tracing::debug!(index, visible = state.visible.len(), "no item at index");
                return Ok((false, vec![]));
            };
            let location = state.location.item(&item.name);
            Ok((true, push_location(state, location, false)))
        }
        Event::CloseDetail => {
            if state.location.detail_key().is_none() {
                return Ok((false, vec![]));
            }
            let location = state.location.closed();
            let mut actions = vec![Action::Return {
                location: location.clone(),
            }];
            actions.extend(navigate_actions(state, location));
            Ok((true, actions))
        }
        Event::LoadMore => {
            let first = state.collection.first().saturating_add(state.load_more_step);
            tracing::debug!(first, "loading more");
            let pending = state.collection.begin(first);
            state.refresh_visible();
            Ok((true, vec![Action::PostToWorker(WorkerMessage::fetch_collection(&pending, false))]))
        }
        Event::Reload => {
            let pending = state.collection.begin(state.collection.first());
            state.refresh_visible();
            let mut actions = vec![Action::PostToWorker(WorkerMessage::fetch_collection(&pending, true))];
            if let Some(detail) = state.detail.reload() {
                actions.push(Action::PostToWorker(WorkerMessage::fetch_detail(&detail)));
            }
            Ok((true, actions))
        }
        Event::ToggleNav => {
            state.nav.toggle();
            Ok((true, vec![]))
        }
        Event::ToggleTheme => {
            state.theme.toggle();
            tracing::debug!(mode = state.theme.mode().as_str(), "theme toggled");
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Exit])),
        Event::WorkerResponse(response) => Ok((apply_response(state, response), vec![])),
    }
}

/// Moves to `location` and records it in the shell's history.
fn push_location(state: &mut AppState, location: Location, replace: bool) -> Vec<Action> {
    let mut actions = vec![Action::Navigate {
        location: location.clone(),
        replace,
    }];
    actions.extend(navigate_actions(state, location));
    actions
}

fn navigate_actions(state: &mut AppState, location: Location) -> Vec<Action> {
    state
        .navigate(location)
        .map(|pending| Action::PostToWorker(WorkerMessage::fetch_detail(&pending)))
        .into_iter()
        .collect()
}

/// Applies a worker response. Returns whether anything visible changed.
fn apply_response(state: &mut AppState, response: &WorkerResponse) -> bool {
    match response {
        WorkerResponse::CollectionLoaded { request_id, items, .. } => {
            let applied = state.collection.apply_loaded(*request_id, items.clone());
            if applied {
                tracing::debug!(count = items.len(), "collection loaded");
                state.refresh_visible();
            }
            applied
        }
        WorkerResponse::CollectionFailed { request_id, message, .. } => {
            let applied = state.collection.apply_failed(*request_id, message.clone());
            if applied {
                tracing::warn!(error = %message, "collection fetch failed");
                state.refresh_visible();
            }
            applied
        }
        WorkerResponse::DetailLoaded { request_id, key, record } => {
            state
                .detail
                .apply(*request_id, key, DetailOutcome::Loaded(record.clone()))
        }
        WorkerResponse::DetailNotFound { request_id, key } => {
            state.detail.apply(*request_id, key, DetailOutcome::NotFound)
        }
        WorkerResponse::DetailFailed { request_id, key, message } => {
            let applied = state
                .detail
                .apply(*request_id, key, DetailOutcome::Failed(message.clone()));
            if applied {
                tracing::warn!(key = %key, error = %message, "detail fetch failed");
            }
            applied
        }
    }
}
