//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the interactive shell (main.rs) and the
//! view/pipeline/source/worker layers.
//!
//! # Architecture
//!
//! ```text
//! Commands → Events → Event Handler → State Mutations → Actions → Side Effects
//!                          ↑                                   ↓
//!                          └──────── Worker Responses ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`cells`]: Nav-collapse and theme-mode state cells
//! - [`handler`]: Event processing and state transitions
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod cells;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use cells::{NavCell, ThemeCell, ThemeMode};
pub use handler::{handle_event, Event};
pub use state::AppState;
