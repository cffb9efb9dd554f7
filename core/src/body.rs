//! Request body encoding and content-type-aware response decoding.
//!
//! # Design
//! Decoding branches over three cases before any JSON parsing happens:
//! a 204 status means the body is absent by contract, a non-JSON content-type
//! means the payload is opaque to this layer, and everything else must parse
//! as JSON and (when a schema is declared) pass validation. Whether the first
//! two cases are acceptable is the caller's decision, made one level up in
//! `ApiClient::decode_response`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::HttpResponse;
use crate::schema::Schema;

/// Outcome of resolving a response body, before expectations are applied.
#[derive(Debug)]
pub enum DecodedBody<R> {
    /// A JSON payload that parsed and passed validation.
    Json(R),
    /// The content-type header does not declare JSON.
    NotJson,
    /// The server returned 204 No Content.
    Empty,
}

/// Validate (when a schema is given) and serialize a request body.
///
/// `None` passes through untouched; a failing body is never serialized.
pub fn encode_body<B: Serialize>(
    path: &str,
    body: Option<&B>,
    schema: Option<&dyn Schema<B>>,
) -> Result<Option<String>, ApiError> {
    let Some(body) = body else {
        return Ok(None);
    };

    if let Some(schema) = schema {
        if let Err(error) = schema.validate(body) {
            log::error!("request body for {path} failed validation: {error}");
            return Err(ApiError::RequestBodyValidation {
                path: path.to_string(),
                source: error,
            });
        }
    }

    let encoded = serde_json::to_string(body).map_err(|source| ApiError::Serialization {
        path: path.to_string(),
        source,
    })?;
    Ok(Some(encoded))
}

/// Resolve a response body: 204 and non-JSON short-circuit, anything else is
/// parsed as JSON and validated against the response schema when one is given.
pub fn decode_json_body<R: DeserializeOwned>(
    path: &str,
    response: &HttpResponse,
    schema: Option<&dyn Schema<R>>,
) -> Result<DecodedBody<R>, ApiError> {
    if response.is_no_content() {
        return Ok(DecodedBody::Empty);
    }

    if !response.is_json() {
        return Ok(DecodedBody::NotJson);
    }

    let parsed: R = serde_json::from_str(&response.body).map_err(|source| {
        log::error!("failed to deserialize response body from {path}: {source}");
        ApiError::Deserialization {
            path: path.to_string(),
            source,
        }
    })?;

    if let Some(schema) = schema {
        if let Err(error) = schema.validate(&parsed) {
            log::error!("response body from {path} failed validation: {error}");
            return Err(ApiError::ResponseValidation {
                path: path.to_string(),
                source: error,
            });
        }
    }

    Ok(DecodedBody::Json(parsed))
}
