//! Parse-or-fail query parameter encoding.
//!
//! Counterpart of the request-side pipeline for query strings: when a schema
//! is declared the parameters are validated first, and only a passing value
//! is encoded. A request with failing parameters is never built.

use serde::Serialize;

use crate::error::ApiError;
use crate::schema::Schema;

/// Validate (when a schema is given) and encode query parameters.
///
/// Returns an empty string when there are no parameters, otherwise the
/// `?`-prefixed urlencoded string ready to append to the request path.
pub fn encode_query<Q: Serialize>(
    path: &str,
    query: Option<&Q>,
    schema: Option<&dyn Schema<Q>>,
) -> Result<String, ApiError> {
    let Some(query) = query else {
        return Ok(String::new());
    };

    if let Some(schema) = schema {
        if let Err(error) = schema.validate(query) {
            log::error!("query parameters for {path} failed validation: {error}");
            return Err(ApiError::QueryValidation {
                path: path.to_string(),
                source: error,
            });
        }
    }

    let encoded = serde_urlencoded::to_string(query).map_err(|source| ApiError::QueryEncode {
        path: path.to_string(),
        source,
    })?;

    if encoded.is_empty() {
        return Ok(String::new());
    }
    Ok(format!("?{encoded}"))
}
