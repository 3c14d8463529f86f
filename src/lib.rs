//! Dexview: a terminal Pokédex viewer over a public GraphQL API.
//!
//! Dexview provides:
//! - A catalog list with type filter, sort order and grid/list layout, all
//!   persisted in the location's query string
//! - Free-text search over name, number and id
//! - A detail overlay routed by `/pokemon/<name>`
//! - Background fetching on a worker thread with stale-response protection

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Interactive shell (main.rs)                        │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ View/Pipeline │   │ Worker Layer  │
//! │ (ui/)         │   │ (view/,       │   │ (worker/)     │
//! │ - Rendering   │   │  pipeline/)   │   │ - Fetch thread│
//! │ - Theming     │   │ - URL codec   │   │ - IPC bridge  │
//! │ - Components  │   │ - Filter/sort │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                   │
//! ┌─────────────────────────────────────────────────────┐
//! │  Source (source/): GraphQL, transport, cache,       │
//! │  collection store, detail lookup                    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, infrastructure, observability              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Record types and errors
//! - [`view`]: View state, query-string codec and locations
//! - [`pipeline`]: Filter-sort projection of the collection
//! - [`source`]: GraphQL transport and the collection/detail stores
//! - [`worker`]: Background fetch thread
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Logging to a rotating file
//! - [`infrastructure`]: Platform paths
//!
//! # Configuration
//!
//! ```toml
//! # ~/.config/dexview/config.toml
//! endpoint = "https://graphql-pokemon2.vercel.app/"
//! page_size = 1000
//! load_more_step = 100
//! request_timeout_secs = 30
//! theme = "dark"
//! theme_file = "~/.config/dexview/midnight.toml"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```
//! use dexview::{handle_event, initialize, Action, Config, Event};
//! use dexview::view::Location;
//!
//! let mut state = initialize(&Config::default(), Location::parse("/pokemon?type=Fire"));
//! let (_, actions) = handle_event(&mut state, &Event::Start)?;
//! assert!(matches!(actions[0], Action::PostToWorker(_)));
//! # Ok::<(), dexview::DexError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod pipeline;
pub mod source;
pub mod ui;
pub mod view;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, ThemeMode};
pub use domain::{CollectionItem, DetailKey, DetailRecord, DexError, Result};
pub use ui::{Theme, Themes};

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::view::Location;

pub const DEFAULT_ENDPOINT: &str = "https://graphql-pokemon2.vercel.app/";
pub const DEFAULT_PAGE_SIZE: u32 = 1000;
pub const DEFAULT_LOAD_MORE_STEP: u32 = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding [`Config::endpoint`].
pub const ENDPOINT_ENV: &str = "DEXVIEW_GRAPHQL_ENDPOINT";

const LOG_FILE_NAME: &str = "dexview.log";

/// Viewer configuration.
///
/// Every field has a default, so a config file only lists what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GraphQL endpoint URL.
    pub endpoint: String,

    /// Initial `first` argument of the list query.
    pub page_size: u32,

    /// How much `first` grows per "load more".
    pub load_more_step: u32,

    pub request_timeout_secs: u64,

    /// Starting theme mode: `dark` or `light`.
    pub theme: String,

    /// Path to a custom TOML theme that replaces the palette for `theme`.
    ///
    /// See [`ui::theme`] for the format. `~` is expanded.
    pub theme_file: Option<String>,

    /// Tracing filter directive. `RUST_LOG` takes precedence.
    pub trace_level: String,

    /// Log file path. Defaults to `dexview.log` in the data directory.
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            load_more_step: DEFAULT_LOAD_MORE_STEP,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            theme: ThemeMode::Dark.as_str().to_string(),
            theme_file: None,
            trace_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Replaces values the viewer cannot run with by their defaults.
    ///
    /// Zero numbers fall back to their defaults; blank strings count as unset.
    ///
    /// ```
    /// use dexview::Config;
    ///
    /// let config = Config { page_size: 0, endpoint: " ".into(), ..Config::default() }.normalized();
    /// assert_eq!(config, Config::default());
    /// ```
    #[must_use]
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        let text = |value: String, fallback: String| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                fallback
            } else {
                trimmed.to_string()
            }
        };
        let optional = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let positive = |value: u32, fallback: u32| if value == 0 { fallback } else { value };

        Self {
            endpoint: text(self.endpoint, defaults.endpoint),
            page_size: positive(self.page_size, defaults.page_size),
            load_more_step: positive(self.load_more_step, defaults.load_more_step),
            request_timeout_secs: if self.request_timeout_secs == 0 {
                defaults.request_timeout_secs
            } else {
                self.request_timeout_secs
            },
            theme: text(self.theme, defaults.theme),
            theme_file: optional(self.theme_file),
            trace_level: text(self.trace_level, defaults.trace_level),
            log_file: optional(self.log_file),
        }
    }

    /// Loads a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Config`] if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DexError::Config(format!("Failed to read {}: {e}", path.display())))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| DexError::Config(format!("Failed to parse {}: {e}", path.display())))?;
        Ok(config.normalized())
    }

    /// Applies environment overrides ([`ENDPOINT_ENV`]).
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                self.endpoint = endpoint.trim().to_string();
            }
        }
        self
    }

    /// Starting theme mode; unknown names fall back to dark.
    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        ThemeMode::parse(&self.theme).unwrap_or_default()
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn log_file_path(&self) -> PathBuf {
        self.log_file.as_deref().map_or_else(
            || infrastructure::get_data_dir().join(LOG_FILE_NAME),
            |path| PathBuf::from(infrastructure::expand_tilde(path)),
        )
    }
}

/// Builds the initial application state for `location`.
///
/// A custom theme that fails to load is logged and the built-in palette is
/// kept.
#[must_use]
pub fn initialize(config: &Config, location: Location) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, %location, "initializing dexview");

    let mode = config.theme_mode();
    let themes = config.theme_file.as_ref().map_or_else(Themes::default, |theme_file| {
        match Theme::from_file(infrastructure::expand_tilde(theme_file)) {
            Ok(theme) => Themes::default().with_custom(mode, theme),
            Err(e) => {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using built-in");
                Themes::default()
            }
        }
    });

    AppState::new(location, config.page_size, config.load_more_step, mode, themes)
}
