//! Seam for the underlying HTTP client.
//!
//! The crate never performs I/O itself; the `send_*` methods hand a fully
//! built `HttpRequest` to an `HttpTransport` and decode whatever comes back.
//! The integration tests ship a ureq-backed implementation; production code
//! wraps whichever HTTP client the application already uses.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP round-trip.
///
/// Implementations must return non-2xx responses as `Ok` data — status
/// interpretation belongs to `ApiClient::decode_response`. `Err` is reserved
/// for failures where no response exists at all (connect errors, timeouts),
/// reported as `ApiError::Transport`.
pub trait HttpTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}
