//! Path router with typed parameter extraction.
//!
//! A [`RouteTable`] maps path prefixes to handlers. The [`Router`] splits an
//! incoming path into segments, finds the first registered prefix while growing
//! a candidate key one segment at a time, extracts the remaining segments
//! according to the route's [`ParamKind`] and calls the handler. Every failure
//! is folded into a [`ResponseInfo`] at the dispatch boundary.

mod dispatch;
mod error;
mod escape;
mod matcher;
mod param;
mod response;
mod table;

// Re-export public items
pub use dispatch::Router;
pub use error::{Error, Failure};
pub use escape::escape;
pub use matcher::{match_prefix, split_path, PrefixMatch};
pub use param::{Param, ParamKind};
pub use response::ResponseInfo;
pub use table::{Handler, HandlerResult, RouteEntry, RouteKey, RouteTable};
