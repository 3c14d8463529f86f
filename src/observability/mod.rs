//! Structured logging to a rotating file.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RollingFile (10 MB × 3 backups)
//! ```
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the config file
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```no_run
//! use dexview::observability::init_tracing;
//! use dexview::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("viewer initialized");
//! ```
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `file_writer`: rotating file writer

mod file_writer;
mod init;

pub use file_writer::{RollingFile, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
pub use init::init_tracing;
