//! A minimal HTTP path router with typed parameter extraction.
//!
//! Routes are registered under path prefixes together with a handler whose
//! variant says how the rest of the path is handed over: not at all, as a single
//! escaped string, as an integer, or as the escaped remainder of the path.
//! Handlers may refuse a request with a [`Failure`]; the [`Router`] turns every
//! outcome, including unmatched paths, into a [`ResponseInfo`].
//!
//! # Features
//!
//! - Prefix matching over `/`-separated path segments
//! - Typed parameters: none, string, integer and path remainder
//! - HTML escaping of every echoed segment
//! - Bad-request and access-denied signals mapped to 400 and 403, everything
//!   else that goes wrong mapped to 404
//! - A small tokio HTTP server that serves a router
//!
//! # Examples
//!
//! ```
//! use prefix_router::{Failure, Handler, ResponseInfo, RouteTable, Router, StatusCode};
//!
//! let table = RouteTable::new()
//!     .with_route("/user", Handler::string(|name| Ok(ResponseInfo::html(format!("User: {name}")))))
//!     .with_route("/admin", Handler::none(|| Err(Failure::AccessDenied)));
//! let router = Router::new(table);
//!
//! assert_eq!(router.dispatch("/user/<alice>").body, "User: &lt;alice&gt;");
//! assert_eq!(router.dispatch("/admin").status, StatusCode::Forbidden);
//! assert_eq!(router.dispatch("/user").status, StatusCode::NotFound);
//! ```
//!
//! See `demos/http_server.rs` for the demonstration site served over HTTP.

pub mod pages;
pub mod parser;
pub mod router;
pub mod server;
pub mod status;

// Re-export commonly used items for convenience
pub use parser::{parse_request, Error as ParserError, HttpRequest, HttpVersion, Method};
pub use router::{
    escape, Error as RouteError, Failure, Handler, HandlerResult, Param, ParamKind, ResponseInfo,
    RouteEntry, RouteKey, RouteTable, Router,
};
pub use server::{Error as ServerError, HttpResponse, HttpServer, ServerConfig};
pub use status::StatusCode;
