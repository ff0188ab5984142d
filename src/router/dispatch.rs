//! Request dispatch.

use std::panic::{self, AssertUnwindSafe};

use log::{debug, warn};

use crate::router::error::Error;
use crate::router::matcher::{match_prefix, split_path};
use crate::router::response::ResponseInfo;
use crate::router::table::RouteTable;

/// Resolves request paths against an immutable route table.
///
/// The router owns its table; share it across connections behind an `Arc`.
#[derive(Debug)]
pub struct Router {
    table: RouteTable,
}

impl Router {
    /// Create a router over a fully built table.
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    /// The table this router resolves against.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolve a path to a response, or to the reason it could not be served.
    pub fn resolve(&self, path: &str) -> Result<ResponseInfo, Error> {
        let segments = split_path(path)?;
        let matched = match_prefix(&self.table, &segments)
            .ok_or_else(|| Error::NoRoute(path.to_string()))?;
        let entry = self
            .table
            .lookup(&matched.key)
            .ok_or_else(|| Error::NoRoute(path.to_string()))?;

        let remaining = &segments[matched.depth..];
        let kind = entry.kind();
        debug!("{path} matched {key} ({kind}) with {n} trailing segment(s)", key = entry.key, n = remaining.len());

        if !kind.arity_ok(remaining.len()) {
            return Err(Error::Arity {
                route: entry.key.to_string(),
                expected: kind.expected(),
                found: remaining.len(),
            });
        }
        let param = kind.extract(remaining)?;

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| entry.handler.call(param)));
        match outcome {
            Ok(Some(result)) => Ok(result?),
            // Handler::kind and ParamKind::extract agree, so this is unreachable in practice
            Ok(None) => Err(Error::NoRoute(path.to_string())),
            Err(_) => {
                warn!("Handler for {key} panicked while serving {path}", key = entry.key);
                Err(Error::HandlerPanicked(entry.key.to_string()))
            }
        }
    }

    /// Resolve a path, mapping every error to its response.
    ///
    /// Failure signals become 400 or 403; everything else becomes 404.
    pub fn dispatch(&self, path: &str) -> ResponseInfo {
        match self.resolve(path) {
            Ok(response) => response,
            Err(e) => {
                debug!("{path} -> {status}: {e}", status = e.status());
                e.into_response()
            }
        }
    }
}
