//! Route keys, handlers and the route table.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::router::error::Failure;
use crate::router::param::{Param, ParamKind};
use crate::router::response::ResponseInfo;

/// What a handler returns: a response, or a failure signal.
pub type HandlerResult = Result<ResponseInfo, Failure>;

/// A path prefix, stored as its sequence of segments.
///
/// Keys are compared segment by segment, so `[]` (the root key) and `[""]`
/// (the key produced by the pattern `/`) are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RouteKey(Vec<String>);

impl RouteKey {
    /// The empty key. It is the first candidate tried for every path, so a
    /// handler registered here answers every request.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a key from already split segments.
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        Self(segments.iter().map(|s| s.as_ref().to_string()).collect())
    }

    /// Parse a route pattern such as `/user` the same way request paths are
    /// split: the leading `/` is dropped and the rest is split on `/`.
    pub fn parse(pattern: &str) -> Self {
        let trimmed = pattern.strip_prefix('/').unwrap_or(pattern);
        Self(trimmed.split('/').map(str::to_string).collect())
    }

    /// The segments of this key.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments a path consumes when it matches this key.
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl From<&str> for RouteKey {
    fn from(pattern: &str) -> Self {
        Self::parse(pattern)
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        write!(f, "/{}", self.0.join("/"))
    }
}

/// A route handler, tagged by the parameter it takes.
///
/// The tag doubles as the route's [`ParamKind`], so a handler can never be
/// registered under a kind whose extracted value it cannot accept.
#[derive(Clone)]
pub enum Handler {
    None(Arc<dyn Fn() -> HandlerResult + Send + Sync>),
    Str(Arc<dyn Fn(String) -> HandlerResult + Send + Sync>),
    Int(Arc<dyn Fn(i64) -> HandlerResult + Send + Sync>),
    Path(Arc<dyn Fn(String) -> HandlerResult + Send + Sync>),
}

impl Handler {
    /// A handler that takes no parameter.
    pub fn none<F>(f: F) -> Self
    where
        F: Fn() -> HandlerResult + Send + Sync + 'static,
    {
        Handler::None(Arc::new(f))
    }

    /// A handler that takes one escaped segment.
    pub fn string<F>(f: F) -> Self
    where
        F: Fn(String) -> HandlerResult + Send + Sync + 'static,
    {
        Handler::Str(Arc::new(f))
    }

    /// A handler that takes one segment parsed as an integer.
    pub fn int<F>(f: F) -> Self
    where
        F: Fn(i64) -> HandlerResult + Send + Sync + 'static,
    {
        Handler::Int(Arc::new(f))
    }

    /// A handler that takes the escaped remainder of the path.
    pub fn path<F>(f: F) -> Self
    where
        F: Fn(String) -> HandlerResult + Send + Sync + 'static,
    {
        Handler::Path(Arc::new(f))
    }

    /// The parameter kind this handler expects.
    pub fn kind(&self) -> ParamKind {
        match self {
            Handler::None(_) => ParamKind::None,
            Handler::Str(_) => ParamKind::Str,
            Handler::Int(_) => ParamKind::Int,
            Handler::Path(_) => ParamKind::Path,
        }
    }

    /// Call the handler with an extracted parameter.
    ///
    /// Returns `None` if the parameter does not belong to this handler's kind.
    pub fn call(&self, param: Param) -> Option<HandlerResult> {
        match (self, param) {
            (Handler::None(f), Param::None) => Some(f()),
            (Handler::Str(f), Param::Str(value)) => Some(f(value)),
            (Handler::Int(f), Param::Int(value)) => Some(f(value)),
            (Handler::Path(f), Param::Path(value)) => Some(f(value)),
            _ => None,
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({})", self.kind())
    }
}

/// A registered route.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    /// The prefix this route answers for.
    pub key: RouteKey,
    /// The handler to invoke.
    pub handler: Handler,
}

impl RouteEntry {
    /// The parameter kind of this route.
    pub fn kind(&self) -> ParamKind {
        self.handler.kind()
    }
}

/// Mapping from route keys to entries.
///
/// Filled during startup, then handed to a [`Router`](crate::router::Router)
/// which only ever reads it.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: HashMap<RouteKey, RouteEntry>,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route. A route already registered under the same key is replaced.
    pub fn register(&mut self, key: impl Into<RouteKey>, handler: Handler) -> &mut Self {
        let key = key.into();
        let entry = RouteEntry {
            key: key.clone(),
            handler,
        };
        if let Some(previous) = self.entries.insert(key, entry) {
            debug!("Route {key} re-registered, replacing {kind} handler", key = previous.key, kind = previous.kind());
        }
        self
    }

    /// Builder-style variant of [`RouteTable::register`].
    pub fn with_route(mut self, key: impl Into<RouteKey>, handler: Handler) -> Self {
        self.register(key, handler);
        self
    }

    /// Look up the entry registered under exactly this key.
    pub fn lookup(&self, key: &RouteKey) -> Option<&RouteEntry> {
        self.entries.get(key)
    }

    /// Whether a route is registered under exactly this key.
    pub fn contains(&self, key: &RouteKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the registered routes in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.values()
    }
}
