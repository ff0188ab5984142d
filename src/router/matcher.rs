//! Path splitting and prefix matching.

use crate::router::error::Error;
use crate::router::table::{RouteKey, RouteTable};

/// The outcome of a successful prefix match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMatch {
    /// The registered key that matched.
    pub key: RouteKey,
    /// Number of path segments the key consumed.
    pub depth: usize,
}

/// Split a request path into segments.
///
/// Query string and fragment are dropped first. The path must start with `/`;
/// the remainder is split on `/` without discarding empty segments, so `/`
/// yields a single empty segment and `/hello/` yields `["hello", ""]`.
pub fn split_path(path: &str) -> Result<Vec<&str>, Error> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let rest = path
        .strip_prefix('/')
        .ok_or_else(|| Error::MalformedPath(path.to_string()))?;
    Ok(rest.split('/').collect())
}

/// Find the first registered prefix of `segments`.
///
/// The candidate starts as the root key and grows by one segment until it is
/// registered or every segment has been consumed. The search stops at the
/// shortest registered prefix: with both `/a` and `/a/b` registered, `/a/b`
/// matches `/a` and leaves `b` as a trailing segment.
pub fn match_prefix(table: &RouteTable, segments: &[&str]) -> Option<PrefixMatch> {
    let mut depth = 0;
    let mut candidate = RouteKey::root();

    while !table.contains(&candidate) && depth < segments.len() {
        depth += 1;
        candidate = RouteKey::from_segments(&segments[..depth]);
    }

    // the loop also exits when segments run out without a hit
    table
        .contains(&candidate)
        .then_some(PrefixMatch { key: candidate, depth })
}
