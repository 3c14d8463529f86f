//! Transport abstraction over the GraphQL endpoint.
//!
//! The [`Transport`] trait is the seam between the fetch worker and the
//! network. [`HttpTransport`] posts JSON with a blocking `reqwest` client;
//! tests substitute an in-memory implementation.

use std::fmt;
use std::time::Duration;

use super::graphql::{GraphqlEnvelope, GraphqlRequest};
use crate::domain::{DexError, Result};

/// Executes GraphQL requests and returns their `data` payload.
pub trait Transport: Send {
    /// Sends `request` and returns the response `data`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Transport`] when the request cannot be sent, the
    /// server answers with a non-success status or GraphQL `errors`, and
    /// [`DexError::Response`] when the body is not JSON.
    fn execute(&self, request: &GraphqlRequest) -> Result<serde_json::Value>;
}

pub struct HttpTransport {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Builds a client for `endpoint` with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Transport`] if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("dexview/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|err| DexError::Transport(format!("failed to initialize HTTP client: {err}")))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &GraphqlRequest) -> Result<serde_json::Value> {
        let _span = tracing::debug_span!("graphql_execute", endpoint = %self.endpoint).entered();

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|err| DexError::Transport(format!("failed to call GraphQL API: {err}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|err| DexError::Transport(format!("failed to read GraphQL response: {err}")))?;

        if !status.is_success() {
            tracing::warn!(%status, "GraphQL API returned an error status");
            return Err(DexError::Transport(format!(
                "GraphQL API returned HTTP {status}: {}",
                truncate_for_error(&body)
            )));
        }

        let envelope: GraphqlEnvelope = serde_json::from_str(&body)
            .map_err(|err| DexError::Response(format!("failed to parse GraphQL response JSON: {err}")))?;
        envelope.into_data()
    }
}

fn truncate_for_error(body: &str) -> String {
    const MAX_LEN: usize = 200;
    if body.chars().count() <= MAX_LEN {
        body.to_owned()
    } else {
        format!("{}...", body.chars().take(MAX_LEN).collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(500);
        let short = truncate_for_error(&body);
        assert_eq!(short.chars().count(), 203);
        assert!(short.ends_with("..."));
        assert_eq!(truncate_for_error("short"), "short");
    }

    #[test]
    fn debug_output_names_the_endpoint() {
        let transport = HttpTransport::new("http://127.0.0.1:9/", Duration::from_secs(1)).unwrap();
        assert_eq!(transport.endpoint(), "http://127.0.0.1:9/");
        assert!(format!("{transport:?}").contains("127.0.0.1:9"));
    }
}
