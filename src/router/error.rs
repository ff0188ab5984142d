//! Error types for routing and dispatch.

use std::num::ParseIntError;

use thiserror::Error;

use crate::router::response::ResponseInfo;
use crate::status::StatusCode;

/// Signals a handler raises to refuse a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Failure {
    /// The request was semantically malformed.
    #[error("Bad Request")]
    BadRequest,

    /// The caller is not allowed to see the resource.
    #[error("Access Denied")]
    AccessDenied,
}

impl Failure {
    /// The status code this signal maps to.
    pub fn status(self) -> StatusCode {
        match self {
            Failure::BadRequest => StatusCode::BadRequest,
            Failure::AccessDenied => StatusCode::Forbidden,
        }
    }
}

/// Errors that can occur while resolving a path.
#[derive(Debug, Error)]
pub enum Error {
    /// The path does not start with `/`.
    #[error("Malformed path: {0:?}")]
    MalformedPath(String),

    /// No registered prefix matches the path.
    #[error("No route for path: {0}")]
    NoRoute(String),

    /// The number of trailing segments does not fit the route's parameter kind.
    #[error("Route {route} expects {expected} trailing segment(s), got {found}")]
    Arity {
        route: String,
        expected: &'static str,
        found: usize,
    },

    /// An integer parameter could not be parsed.
    #[error("Invalid integer parameter: {0}")]
    InvalidInt(#[from] ParseIntError),

    /// The handler panicked instead of returning.
    #[error("Handler for {0} panicked")]
    HandlerPanicked(String),

    /// The handler raised a failure signal.
    #[error(transparent)]
    Failure(#[from] Failure),
}

impl Error {
    /// The status code reported to the client. Anything that is not an explicit
    /// failure signal is reported as not found.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Failure(failure) => failure.status(),
            _ => StatusCode::NotFound,
        }
    }

    /// Convert the error into the response the client sees.
    pub fn into_response(self) -> ResponseInfo {
        match self {
            Error::Failure(failure) => ResponseInfo::plain(failure.status(), failure.to_string()),
            _ => ResponseInfo::not_found(),
        }
    }
}
