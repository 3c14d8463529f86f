//! Detail lookup state.
//!
//! One key is active at a time. Selecting a new key issues a new request id;
//! a response is applied only when both its request id and its key match the
//! request currently in flight, so a late answer for an abandoned key is never
//! shown under the new one.

use crate::domain::{DetailKey, DetailRecord, DexError};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailStatus {
    #[default]
    Idle,
    Loading,
    Loaded(DetailRecord),
    NotFound,
    Failed(String),
}

/// Result of one detail fetch as seen by the lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    Loaded(DetailRecord),
    NotFound,
    Failed(String),
}

impl From<Result<DetailRecord, DexError>> for DetailOutcome {
    fn from(result: Result<DetailRecord, DexError>) -> Self {
        match result {
            Ok(record) => Self::Loaded(record),
            Err(err) if err.is_not_found() => Self::NotFound,
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDetail {
    pub request_id: u64,
    pub key: DetailKey,
}

#[derive(Debug, Clone, Default)]
pub struct DetailLookup {
    key: Option<DetailKey>,
    status: DetailStatus,
    pending: Option<PendingDetail>,
    next_request_id: u64,
}

impl DetailLookup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `key` the active key.
    ///
    /// Returns the request to issue when the key changed to a new non-empty
    /// value. `None` clears the lookup and abandons any in-flight request.
    pub fn select(&mut self, key: Option<DetailKey>) -> Option<PendingDetail> {
        if key == self.key {
            return None;
        }
        self.key = key;
        self.pending = None;
        match self.key.clone() {
            Some(key) => Some(self.issue(key)),
            None => {
                self.status = DetailStatus::Idle;
                None
            }
        }
    }

    /// Re-issues the request for the active key, if any.
    pub fn reload(&mut self) -> Option<PendingDetail> {
        let key = self.key.clone()?;
        Some(self.issue(key))
    }

    fn issue(&mut self, key: DetailKey) -> PendingDetail {
        self.next_request_id += 1;
        self.status = DetailStatus::Loading;
        let pending = PendingDetail {
            request_id: self.next_request_id,
            key,
        };
        tracing::debug!(request_id = pending.request_id, key = %pending.key, "detail fetch started");
        self.pending = Some(pending.clone());
        pending
    }

    /// Applies a fetch outcome. Returns `false` when the response is stale.
    pub fn apply(
        &mut self,
        request_id: u64,
        key: &DetailKey,
        outcome: impl Into<DetailOutcome>,
    ) -> bool {
        let current = self
            .pending
            .as_ref()
            .is_some_and(|p| p.request_id == request_id && &p.key == key);
        if !current {
            tracing::debug!(request_id, key = %key, "dropping stale detail response");
            return false;
        }
        self.pending = None;
        self.status = match outcome.into() {
            DetailOutcome::Loaded(record) => DetailStatus::Loaded(record),
            DetailOutcome::NotFound => DetailStatus::NotFound,
            DetailOutcome::Failed(message) => DetailStatus::Failed(message),
        };
        true
    }

    #[must_use]
    pub const fn key(&self) -> Option<&DetailKey> {
        self.key.as_ref()
    }

    #[must_use]
    pub const fn status(&self) -> &DetailStatus {
        &self.status
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, DetailStatus::Loading)
    }

    /// Returns the record to render, if it is settled and answers the active
    /// key.
    #[must_use]
    pub fn data(&self) -> Option<&DetailRecord> {
        match (&self.status, &self.key) {
            (DetailStatus::Loaded(record), Some(key)) if record.answers(key) => Some(record),
            _ => None,
        }
    }

    /// Returns the user-facing error category, if the last fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            DetailStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> DetailRecord {
        serde_json::from_value(serde_json::json!({
            "id": format!("id-{name}"), "name": name, "number": "025"
        }))
        .unwrap()
    }

    fn name(n: &str) -> DetailKey {
        DetailKey::Name(n.to_string())
    }

    #[test]
    fn stale_response_is_never_shown_under_new_key() {
        let mut lookup = DetailLookup::new();
        let pikachu = lookup.select(Some(name("Pikachu"))).unwrap();
        let eevee = lookup.select(Some(name("Eevee"))).unwrap();

        assert!(!lookup.apply(pikachu.request_id, &pikachu.key, DetailOutcome::Loaded(record("Pikachu"))));
        assert!(lookup.is_loading());
        assert!(lookup.data().is_none());

        assert!(lookup.apply(eevee.request_id, &eevee.key, DetailOutcome::Loaded(record("Eevee"))));
        assert_eq!(lookup.data().unwrap().name, "Eevee");
    }

    #[test]
    fn clearing_the_key_ignores_late_responses() {
        let mut lookup = DetailLookup::new();
        let req = lookup.select(Some(name("Pikachu"))).unwrap();
        assert!(lookup.select(None).is_none());
        assert!(!lookup.apply(req.request_id, &req.key, DetailOutcome::Loaded(record("Pikachu"))));
        assert_eq!(lookup.status(), &DetailStatus::Idle);
    }

    #[test]
    fn reselecting_the_same_key_does_not_refetch() {
        let mut lookup = DetailLookup::new();
        assert!(lookup.select(Some(name("Mew"))).is_some());
        assert!(lookup.select(Some(name("Mew"))).is_none());
        assert!(lookup.reload().is_some());
    }

    #[test]
    fn not_found_and_failure_are_distinct() {
        let mut lookup = DetailLookup::new();
        let req = lookup.select(Some(name("Missingno"))).unwrap();
        lookup.apply(req.request_id, &req.key, Err::<DetailRecord, _>(DexError::NotFound("Missingno".into())));
        assert_eq!(lookup.status(), &DetailStatus::NotFound);
        assert!(lookup.error().is_none());

        let req = lookup.reload().unwrap();
        lookup.apply(req.request_id, &req.key, Err::<DetailRecord, _>(DexError::Transport("HTTP 500".into())));
        assert!(lookup.error().unwrap().contains("HTTP 500"));
        assert!(lookup.data().is_none());

        let req = lookup.reload().unwrap();
        lookup.apply(req.request_id, &req.key, DetailOutcome::Failed("offline".into()));
        assert_eq!(lookup.error(), Some("offline"));
    }

    #[test]
    fn fetch_results_convert_into_outcomes() {
        let ok: Result<DetailRecord, DexError> = Ok(record("Mew"));
        assert!(matches!(DetailOutcome::from(ok), DetailOutcome::Loaded(_)));
        let missing: Result<DetailRecord, DexError> = Err(DexError::NotFound("x".into()));
        assert_eq!(DetailOutcome::from(missing), DetailOutcome::NotFound);
    }

    #[test]
    fn mismatched_record_is_not_rendered() {
        let mut lookup = DetailLookup::new();
        let req = lookup.select(Some(name("Pikachu"))).unwrap();
        assert!(lookup.apply(req.request_id, &req.key, DetailOutcome::Loaded(record("Raichu"))));
        assert!(lookup.data().is_none());
    }
}
