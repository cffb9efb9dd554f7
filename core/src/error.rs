//! Error types for the request layer.
//!
//! # Design
//! Every rejection a request can produce has its own variant so callers can
//! branch without string matching. `NotFound` gets a dedicated variant because
//! callers frequently distinguish "the resource does not exist" from "the
//! server returned an unexpected status." All other non-2xx responses land in
//! `HttpStatus` with the raw status code and body for debugging.

use thiserror::Error;

use crate::schema::ValidationError;

/// Errors returned by the `ApiClient` build, decode, and send methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body did not pass its declared schema.
    #[error("request body for {path} failed validation: {source}")]
    RequestBodyValidation {
        path: String,
        source: ValidationError,
    },

    /// The query parameters did not pass their declared schema.
    #[error("query parameters for {path} failed validation: {source}")]
    QueryValidation {
        path: String,
        source: ValidationError,
    },

    /// The response body parsed as JSON but did not pass its declared schema.
    #[error("response body from {path} failed validation: {source}")]
    ResponseValidation {
        path: String,
        source: ValidationError,
    },

    /// The request payload could not be serialized to JSON.
    #[error("failed to serialize request body for {path}: {source}")]
    Serialization {
        path: String,
        source: serde_json::Error,
    },

    /// The response body could not be parsed as JSON.
    #[error("failed to deserialize response body from {path}: {source}")]
    Deserialization {
        path: String,
        source: serde_json::Error,
    },

    /// The query parameters could not be encoded as a query string.
    #[error("failed to encode query parameters for {path}: {source}")]
    QueryEncode {
        path: String,
        source: serde_urlencoded::ser::Error,
    },

    /// The server returned a JSON-less response and the caller did not opt in.
    #[error("request to {path} has returned an unexpected non-JSON response")]
    UnexpectedNonJsonResponse { path: String },

    /// The server returned 204 and the caller did not opt in.
    #[error("request to {path} has returned an unexpected empty response")]
    UnexpectedEmptyResponse { path: String },

    /// The server returned 404 — the requested resource does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The transport failed to execute the request at all.
    #[error("transport error: {0}")]
    Transport(String),
}
