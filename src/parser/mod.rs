//! HTTP request-head parsing.
//!
//! Just enough of HTTP/1.x to pull the method and path out of a request so the
//! server can hand the path to the router.

mod error;
mod method;
mod request;

// Re-export public items
pub use error::Error;
pub use method::Method;
pub use request::{parse_request, HttpRequest, HttpVersion};
