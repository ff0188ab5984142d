//! Parameter kinds and the values extracted for them.

use std::fmt;

use crate::router::error::Error;
use crate::router::escape::escape;

/// How the segments left over after a prefix match are turned into a handler argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// No trailing segments allowed.
    None,
    /// Exactly one trailing segment, passed on HTML-escaped.
    Str,
    /// Exactly one trailing segment, parsed as a base-10 integer.
    Int,
    /// Any number of trailing segments, each escaped, rejoined with `/`.
    Path,
}

/// A value extracted from the trailing segments of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    None,
    Str(String),
    Int(i64),
    Path(String),
}

impl ParamKind {
    /// Human-readable arity, used in error messages.
    pub fn expected(self) -> &'static str {
        match self {
            ParamKind::None => "0",
            ParamKind::Str | ParamKind::Int => "1",
            ParamKind::Path => "0 or more",
        }
    }

    /// Whether `remaining` trailing segments are acceptable for this kind.
    pub fn arity_ok(self, remaining: usize) -> bool {
        match self {
            ParamKind::None => remaining == 0,
            ParamKind::Str | ParamKind::Int => remaining == 1,
            ParamKind::Path => true,
        }
    }

    /// Extract the parameter from the segments that follow the matched prefix.
    ///
    /// A segment count the kind does not accept is reported as [`Error::Arity`]
    /// with an empty route name; the dispatcher fills in the route.
    pub fn extract(self, remaining: &[&str]) -> Result<Param, Error> {
        match (self, remaining) {
            (ParamKind::None, []) => Ok(Param::None),
            (ParamKind::Str, [segment]) => Ok(Param::Str(escape(segment).into_owned())),
            (ParamKind::Int, [segment]) => Ok(Param::Int(segment.parse()?)),
            (ParamKind::Path, segments) => {
                let escaped: Vec<_> = segments.iter().map(|s| escape(s)).collect();
                Ok(Param::Path(escaped.join("/")))
            }
            (kind, segments) => Err(Error::Arity {
                route: String::new(),
                expected: kind.expected(),
                found: segments.len(),
            }),
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamKind::None => "none",
            ParamKind::Str => "str",
            ParamKind::Int => "int",
            ParamKind::Path => "path",
        };
        f.write_str(name)
    }
}
