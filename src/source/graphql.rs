//! GraphQL documents and response decoding.
//!
//! The API exposes two queries: `pokemons(first)` for the list and
//! `pokemon(id, name)` for a single record. This module builds the request
//! bodies and turns the `data` payload into domain records.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{CollectionItem, DetailKey, DetailRecord, DexError, Result};

pub const COLLECTION_QUERY: &str = r#"
query pokemons($first: Int!) {
  pokemons(first: $first) {
    id
    name
    number
    image
    types
  }
}
"#;

pub const DETAIL_QUERY: &str = r#"
query pokemon($id: String, $name: String) {
  pokemon(id: $id, name: $name) {
    id
    number
    name
    weight { minimum maximum }
    height { minimum maximum }
    classification
    types
    resistant
    weaknesses
    fleeRate
    maxCP
    maxHP
    image
  }
}
"#;

/// A query document plus its variables, serialized as the POST body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphqlRequest {
    pub query: String,
    pub variables: serde_json::Value,
}

impl GraphqlRequest {
    pub fn new(query: impl Into<String>, variables: serde_json::Value) -> Self {
        Self {
            query: query.into(),
            variables,
        }
    }

    /// Request for the first `first` list items.
    #[must_use]
    pub fn collection(first: u32) -> Self {
        Self::new(COLLECTION_QUERY, json!({ "first": first }))
    }

    /// Request for one record by id or by name.
    #[must_use]
    pub fn detail(key: &DetailKey) -> Self {
        let variables = match key {
            DetailKey::Id(id) => json!({ "id": id }),
            DetailKey::Name(name) => json!({ "name": name }),
        };
        Self::new(DETAIL_QUERY, variables)
    }
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

/// The `{data, errors}` envelope every GraphQL response is wrapped in.
#[derive(Debug, Deserialize)]
pub struct GraphqlEnvelope {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<GraphqlError>>,
}

impl GraphqlEnvelope {
    /// Returns the `data` payload, or a transport error when the server
    /// reported errors or sent no data.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Transport`] for a non-empty `errors` array or a
    /// missing `data` member.
    pub fn into_data(self) -> Result<serde_json::Value> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            let message = errors
                .into_iter()
                .map(|error| error.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(DexError::Transport(format!("GraphQL query failed: {message}")));
        }
        self.data
            .ok_or_else(|| DexError::Transport("GraphQL response did not include a data payload".to_owned()))
    }
}

/// Decodes the `pokemons` field of a list response.
///
/// A `null` list is treated as empty so `items` is always a vector.
///
/// # Errors
///
/// Returns [`DexError::Response`] if the payload is not shaped like a list of
/// items.
pub fn parse_collection(data: serde_json::Value) -> Result<Vec<CollectionItem>> {
    #[derive(Deserialize)]
    struct Payload {
        #[serde(default)]
        pokemons: Option<Vec<CollectionItem>>,
    }

    let payload: Payload = serde_json::from_value(data)
        .map_err(|err| DexError::Response(format!("malformed pokemons payload: {err}")))?;
    Ok(payload.pokemons.unwrap_or_default())
}

/// Decodes the `pokemon` field of a detail response.
///
/// # Errors
///
/// Returns [`DexError::NotFound`] when the server answers `null` for `key`,
/// and [`DexError::Response`] when the payload is malformed.
pub fn parse_detail(data: serde_json::Value, key: &DetailKey) -> Result<DetailRecord> {
    #[derive(Deserialize)]
    struct Payload {
        #[serde(default)]
        pokemon: Option<DetailRecord>,
    }

    let payload: Payload = serde_json::from_value(data)
        .map_err(|err| DexError::Response(format!("malformed pokemon payload: {err}")))?;
    payload
        .pokemon
        .ok_or_else(|| DexError::NotFound(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_request_uses_the_matching_variable() {
        let by_name = GraphqlRequest::detail(&DetailKey::Name("Eevee".into()));
        assert_eq!(by_name.variables, json!({ "name": "Eevee" }));
        let by_id = GraphqlRequest::detail(&DetailKey::Id("UG9rZW1vbjoxMzM=".into()));
        assert_eq!(by_id.variables, json!({ "id": "UG9rZW1vbjoxMzM=" }));
    }

    #[test]
    fn collection_request_serializes_first() {
        let body = serde_json::to_value(GraphqlRequest::collection(151)).unwrap();
        assert_eq!(body["variables"]["first"], 151);
        assert!(body["query"].as_str().unwrap().contains("pokemons(first: $first)"));
    }

    #[test]
    fn errors_array_is_a_transport_error() {
        let envelope: GraphqlEnvelope = serde_json::from_value(json!({
            "data": null,
            "errors": [{ "message": "boom" }, { "message": "again" }]
        }))
        .unwrap();
        let err = envelope.into_data().unwrap_err();
        assert!(matches!(err, DexError::Transport(ref m) if m.contains("boom; again")));
    }

    #[test]
    fn null_pokemon_is_not_found() {
        let key = DetailKey::Name("Missingno".into());
        let err = parse_detail(json!({ "pokemon": null }), &key).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn null_list_is_empty() {
        assert!(parse_collection(json!({ "pokemons": null })).unwrap().is_empty());
    }

    #[test]
    fn malformed_list_is_a_response_error() {
        let err = parse_collection(json!({ "pokemons": "nope" })).unwrap_err();
        assert!(matches!(err, DexError::Response(_)));
    }
}
