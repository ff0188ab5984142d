//! The value a dispatch produces.

use crate::status::StatusCode;

/// Status, content type and body handed back to the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseInfo {
    /// The HTTP status code
    pub status: StatusCode,
    /// The value of the `Content-Type` header
    pub content_type: String,
    /// The response body, written as UTF-8
    pub body: String,
}

impl ResponseInfo {
    /// Create a response with an explicit status and content type.
    pub fn new(status: StatusCode, content_type: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    /// A `200 OK` response with a `text/html` body.
    pub fn html(body: impl Into<String>) -> Self {
        Self::new(StatusCode::Ok, "text/html", body)
    }

    /// A `text/plain` response with the given status.
    pub fn plain(status: StatusCode, body: impl Into<String>) -> Self {
        Self::new(status, "text/plain", body)
    }

    /// The uniform not-found response.
    pub fn not_found() -> Self {
        Self::plain(StatusCode::NotFound, "Page not found")
    }
}
