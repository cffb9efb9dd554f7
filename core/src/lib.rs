//! Schema-validated request layer over a caller-supplied HTTP client.
//!
//! # Overview
//! Thin, strongly-typed GET/POST/PUT/PATCH/DELETE helpers whose request body,
//! query parameters, and response body are each optionally validated against
//! a declared [`Schema`] before being sent or after being received. The crate
//! builds `HttpRequest` values and decodes `HttpResponse` values without
//! touching the network (host-does-IO pattern); an [`HttpTransport`]
//! implementation executes the actual round-trip.
//!
//! # Design
//! - `ApiClient` is stateless — it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `decode_response` (consumes response), with `send_*` wrappers running
//!   both around a transport, so the I/O boundary is explicit.
//! - Request body and query parameters are parse-or-fail: a value that does
//!   not pass its schema is never handed to the transport.
//! - Response decoding is content-type-aware: 204 and non-JSON responses
//!   short-circuit and are accepted only when the caller opted in via
//!   [`Expectations`].
//! - Types use owned `String` / `Vec` fields so requests and responses move
//!   freely across threads and transports.

pub mod body;
pub mod client;
pub mod error;
pub mod http;
pub mod query;
pub mod schema;
pub mod transport;

pub use client::{ApiClient, ChangeParams, Expectations, GetParams, ResponseBody};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use schema::{schema_fn, Schema, SchemaFn, ValidationError, ValidationIssue};
pub use transport::HttpTransport;
