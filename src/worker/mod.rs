//! Background worker for network fetches.
//!
//! All GraphQL traffic runs on a worker thread so the interactive loop never
//! waits on the network.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol tagged with request ids
//! - `handler`: Worker implementation and message processing logic
//! - `thread`: Thread and channel plumbing

pub mod handler;
pub mod messages;
pub mod thread;

pub use handler::FetchWorker;
pub use messages::{WorkerMessage, WorkerResponse};
pub use thread::WorkerThread;
