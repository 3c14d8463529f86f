//! Background thread running a [`FetchWorker`].
//!
//! Requests go in over one channel and responses come back over another. The
//! main thread never blocks on the network; it polls for responses between
//! input events.

use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::domain::{DexError, Result};
use crate::source::Transport;
use crate::worker::{FetchWorker, WorkerMessage, WorkerResponse};

/// A background fetch thread.
///
/// ## Example
///
/// ```no_run
/// use std::time::Duration;
/// use dexview::source::HttpTransport;
/// use dexview::worker::{WorkerMessage, WorkerThread};
///
/// let transport = HttpTransport::new("https://graphql-pokemon2.vercel.app/", Duration::from_secs(30))?;
/// let worker = WorkerThread::spawn(transport)?;
/// worker.post(WorkerMessage::FetchCollection { request_id: 1, first: 151, refresh: false })?;
/// let response = worker.recv_timeout(Duration::from_secs(30));
/// worker.stop()?;
/// # Ok::<(), dexview::domain::DexError>(())
/// ```
pub struct WorkerThread {
    tx: Option<Sender<WorkerMessage>>,
    rx: Receiver<WorkerResponse>,
    handle: Option<JoinHandle<()>>,
}

impl WorkerThread {
    /// Spawns the worker thread around `transport`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Io`] if the OS refuses to spawn the thread.
    pub fn spawn<T: Transport + 'static>(transport: T) -> Result<Self> {
        let (tx, request_rx) = channel::<WorkerMessage>();
        let (response_tx, rx) = channel::<WorkerResponse>();

        let handle = thread::Builder::new()
            .name("dexview-fetch".to_string())
            .spawn(move || {
                let mut worker = FetchWorker::new(transport);
                for message in request_rx {
                    let response = worker.handle_message(message);
                    if response_tx.send(response).is_err() {
                        tracing::debug!("response channel closed, stopping worker");
                        break;
                    }
                }
            })?;

        Ok(Self {
            tx: Some(tx),
            rx,
            handle: Some(handle),
        })
    }

    /// Queues `message` for the worker.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Worker`] if the worker has stopped.
    pub fn post(&self, message: WorkerMessage) -> Result<()> {
        let tx = self
            .tx
            .as_ref()
            .ok_or_else(|| DexError::Worker("worker already stopped".to_string()))?;
        tx.send(message)
            .map_err(|e| DexError::Worker(format!("failed to post message: {e}")))
    }

    /// Returns a ready response without blocking.
    #[must_use]
    pub fn try_recv(&self) -> Option<WorkerResponse> {
        match self.rx.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Waits up to `timeout` for a response.
    #[must_use]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<WorkerResponse> {
        match self.rx.recv_timeout(timeout) {
            Ok(response) => Some(response),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Closes the request channel and waits for the thread to finish its
    /// current request.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Worker`] if the thread panicked.
    pub fn stop(mut self) -> Result<()> {
        self.tx.take();
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| DexError::Worker("fetch thread panicked".to_string())),
            None => Ok(()),
        }
    }
}

impl Drop for WorkerThread {
    fn drop(&mut self) {
        // Closing the channel ends the loop; don't join on drop.
        self.tx.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::GraphqlRequest;
    use serde_json::json;

    struct Echo;

    impl Transport for Echo {
        fn execute(&self, request: &GraphqlRequest) -> Result<serde_json::Value> {
            let first = request.variables["first"].as_u64().unwrap_or(0);
            let items: Vec<_> = (1..=first)
                .map(|n| json!({ "id": n.to_string(), "name": format!("p{n}"), "number": n.to_string() }))
                .collect();
            Ok(json!({ "pokemons": items }))
        }
    }

    #[test]
    fn round_trips_a_request_through_the_thread() {
        let worker = WorkerThread::spawn(Echo).unwrap();
        worker
            .post(WorkerMessage::FetchCollection {
                request_id: 5,
                first: 3,
                refresh: false,
            })
            .unwrap();
        let response = worker.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(response.request_id(), 5);
        assert!(matches!(response, WorkerResponse::CollectionLoaded { ref items, .. } if items.len() == 3));
        worker.stop().unwrap();
    }

    #[test]
    fn try_recv_is_empty_without_requests() {
        let worker = WorkerThread::spawn(Echo).unwrap();
        assert!(worker.try_recv().is_none());
    }
}
