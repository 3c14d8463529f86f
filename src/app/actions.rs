//! Actions representing side effects to be executed by the shell.
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The shell executes
//! them in order.

use crate::view::Location;
use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Stops the interactive loop.
    Exit,

    /// Posts a message to the background fetch thread.
    PostToWorker(WorkerMessage),

    /// Records a new address in the history.
    ///
    /// `replace` is set for view-state edits, which overwrite the current
    /// entry instead of growing the history.
    Navigate { location: Location, replace: bool },

    /// Leaves the detail overlay for `location`.
    ///
    /// The shell steps back when the previous history entry is `location`,
    /// so closing undoes the open; otherwise it pushes `location`.
    Return { location: Location },
}
