//! Stateless request builder, sender, and response decoder.
//!
//! # Design
//! `ApiClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `decode_response` step that consumes an `HttpResponse`;
//! the `send_*` methods run both around an `HttpTransport` round-trip. The
//! split keeps the validation pipeline deterministic and free of I/O
//! dependencies.
//!
//! POST, PUT, and PATCH share one body-carrying parameter shape and funnel
//! through `build_change`; GET carries query parameters only; DELETE skips
//! the validation pipeline entirely and hands back the raw response.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::body::{decode_json_body, encode_body, DecodedBody};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::query::encode_query;
use crate::schema::Schema;
use crate::transport::HttpTransport;

/// Which JSON-less outcomes the caller accepts.
///
/// Both default to `false`: an empty (204) or non-JSON response is an error
/// unless the caller opted in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Expectations {
    pub non_json: bool,
    pub empty: bool,
}

/// Parameters for a GET request.
pub struct GetParams<'a, Q, R> {
    pub path: &'a str,
    pub query: Option<&'a Q>,
    pub query_schema: Option<&'a dyn Schema<Q>>,
    pub response_schema: Option<&'a dyn Schema<R>>,
    pub expectations: Expectations,
}

impl<'a, Q, R> GetParams<'a, Q, R> {
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            query: None,
            query_schema: None,
            response_schema: None,
            expectations: Expectations::default(),
        }
    }

    pub fn query(mut self, query: &'a Q) -> Self {
        self.query = Some(query);
        self
    }

    pub fn query_schema(mut self, schema: &'a dyn Schema<Q>) -> Self {
        self.query_schema = Some(schema);
        self
    }

    pub fn response_schema(mut self, schema: &'a dyn Schema<R>) -> Self {
        self.response_schema = Some(schema);
        self
    }

    pub fn expect_non_json(mut self) -> Self {
        self.expectations.non_json = true;
        self
    }

    pub fn expect_empty(mut self) -> Self {
        self.expectations.empty = true;
        self
    }
}

/// Parameters for a body-carrying request (POST, PUT, PATCH).
pub struct ChangeParams<'a, B, Q, R> {
    pub path: &'a str,
    pub body: Option<&'a B>,
    pub body_schema: Option<&'a dyn Schema<B>>,
    pub query: Option<&'a Q>,
    pub query_schema: Option<&'a dyn Schema<Q>>,
    pub response_schema: Option<&'a dyn Schema<R>>,
    pub expectations: Expectations,
}

impl<'a, B, Q, R> ChangeParams<'a, B, Q, R> {
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            body: None,
            body_schema: None,
            query: None,
            query_schema: None,
            response_schema: None,
            expectations: Expectations::default(),
        }
    }

    pub fn body(mut self, body: &'a B) -> Self {
        self.body = Some(body);
        self
    }

    pub fn body_schema(mut self, schema: &'a dyn Schema<B>) -> Self {
        self.body_schema = Some(schema);
        self
    }

    pub fn query(mut self, query: &'a Q) -> Self {
        self.query = Some(query);
        self
    }

    pub fn query_schema(mut self, schema: &'a dyn Schema<Q>) -> Self {
        self.query_schema = Some(schema);
        self
    }

    pub fn response_schema(mut self, schema: &'a dyn Schema<R>) -> Self {
        self.response_schema = Some(schema);
        self
    }

    pub fn expect_non_json(mut self) -> Self {
        self.expectations.non_json = true;
        self
    }

    pub fn expect_empty(mut self) -> Self {
        self.expectations.empty = true;
        self
    }
}

/// A decoded response, after expectations were applied.
#[derive(Debug)]
pub enum ResponseBody<R> {
    /// A JSON payload that parsed and passed validation.
    Json(R),
    /// A non-JSON response the caller opted into; the raw response.
    Raw(HttpResponse),
    /// A 204 the caller opted into.
    Empty,
}

impl<R> ResponseBody<R> {
    /// The JSON payload, if this was one.
    pub fn into_json(self) -> Option<R> {
        match self {
            ResponseBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// Stateless client for a single API base URL.
///
/// Builds `HttpRequest` values and decodes `HttpResponse` values without
/// touching the network; `send_*` methods delegate the round-trip to an
/// `HttpTransport` supplied by the caller.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_get<Q: Serialize, R>(
        &self,
        params: &GetParams<'_, Q, R>,
    ) -> Result<HttpRequest, ApiError> {
        let query = encode_query(params.path, params.query, params.query_schema)?;
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{}{}", self.base_url, params.path, query),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_post<B: Serialize, Q: Serialize, R>(
        &self,
        params: &ChangeParams<'_, B, Q, R>,
    ) -> Result<HttpRequest, ApiError> {
        self.build_change(HttpMethod::Post, params)
    }

    pub fn build_put<B: Serialize, Q: Serialize, R>(
        &self,
        params: &ChangeParams<'_, B, Q, R>,
    ) -> Result<HttpRequest, ApiError> {
        self.build_change(HttpMethod::Put, params)
    }

    pub fn build_patch<B: Serialize, Q: Serialize, R>(
        &self,
        params: &ChangeParams<'_, B, Q, R>,
    ) -> Result<HttpRequest, ApiError> {
        self.build_change(HttpMethod::Patch, params)
    }

    fn build_change<B: Serialize, Q: Serialize, R>(
        &self,
        method: HttpMethod,
        params: &ChangeParams<'_, B, Q, R>,
    ) -> Result<HttpRequest, ApiError> {
        let body = encode_body(params.path, params.body, params.body_schema)?;
        let query = encode_query(params.path, params.query, params.query_schema)?;

        let headers = if body.is_some() {
            vec![("content-type".to_string(), "application/json".to_string())]
        } else {
            Vec::new()
        };

        Ok(HttpRequest {
            method,
            path: format!("{}{}{}", self.base_url, params.path, query),
            headers,
            body,
        })
    }

    pub fn build_delete(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}{}", self.base_url, path),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Check the status, resolve the body, and apply the caller's
    /// expectations about empty and non-JSON outcomes.
    pub fn decode_response<R: DeserializeOwned>(
        &self,
        path: &str,
        response: HttpResponse,
        response_schema: Option<&dyn Schema<R>>,
        expectations: Expectations,
    ) -> Result<ResponseBody<R>, ApiError> {
        check_status(&response)?;

        match decode_json_body(path, &response, response_schema)? {
            DecodedBody::Json(value) => Ok(ResponseBody::Json(value)),
            DecodedBody::NotJson => {
                if expectations.non_json {
                    Ok(ResponseBody::Raw(response))
                } else {
                    log::error!("request to {path} has returned an unexpected non-JSON response");
                    Err(ApiError::UnexpectedNonJsonResponse {
                        path: path.to_string(),
                    })
                }
            }
            DecodedBody::Empty => {
                if expectations.empty {
                    Ok(ResponseBody::Empty)
                } else {
                    log::error!("request to {path} has returned an unexpected empty response");
                    Err(ApiError::UnexpectedEmptyResponse {
                        path: path.to_string(),
                    })
                }
            }
        }
    }

    pub fn send_get<T, Q, R>(
        &self,
        transport: &T,
        params: &GetParams<'_, Q, R>,
    ) -> Result<ResponseBody<R>, ApiError>
    where
        T: HttpTransport,
        Q: Serialize,
        R: DeserializeOwned,
    {
        let request = self.build_get(params)?;
        let response = transport.execute(request)?;
        self.decode_response(
            params.path,
            response,
            params.response_schema,
            params.expectations,
        )
    }

    pub fn send_post<T, B, Q, R>(
        &self,
        transport: &T,
        params: &ChangeParams<'_, B, Q, R>,
    ) -> Result<ResponseBody<R>, ApiError>
    where
        T: HttpTransport,
        B: Serialize,
        Q: Serialize,
        R: DeserializeOwned,
    {
        let request = self.build_post(params)?;
        self.send_change(transport, request, params)
    }

    pub fn send_put<T, B, Q, R>(
        &self,
        transport: &T,
        params: &ChangeParams<'_, B, Q, R>,
    ) -> Result<ResponseBody<R>, ApiError>
    where
        T: HttpTransport,
        B: Serialize,
        Q: Serialize,
        R: DeserializeOwned,
    {
        let request = self.build_put(params)?;
        self.send_change(transport, request, params)
    }

    pub fn send_patch<T, B, Q, R>(
        &self,
        transport: &T,
        params: &ChangeParams<'_, B, Q, R>,
    ) -> Result<ResponseBody<R>, ApiError>
    where
        T: HttpTransport,
        B: Serialize,
        Q: Serialize,
        R: DeserializeOwned,
    {
        let request = self.build_patch(params)?;
        self.send_change(transport, request, params)
    }

    fn send_change<T, B, Q, R>(
        &self,
        transport: &T,
        request: HttpRequest,
        params: &ChangeParams<'_, B, Q, R>,
    ) -> Result<ResponseBody<R>, ApiError>
    where
        T: HttpTransport,
        R: DeserializeOwned,
    {
        let response = transport.execute(request)?;
        self.decode_response(
            params.path,
            response,
            params.response_schema,
            params.expectations,
        )
    }

    /// DELETE bypasses the validation pipeline: the raw response comes back
    /// after a status check.
    pub fn send_delete<T: HttpTransport>(
        &self,
        transport: &T,
        path: &str,
    ) -> Result<HttpResponse, ApiError> {
        let response = transport.execute(self.build_delete(path))?;
        check_status(&response)?;
        Ok(response)
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
