//! HTTP request methods.

use std::fmt;
use std::str::FromStr;

use crate::parser::error::Error;

/// The method of a request.
///
/// Only `GET` is served. `HEAD` is recognized so it can be named in logs, and
/// every other token is kept verbatim so the server can answer `405`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Head,
    Other(String),
}

impl Method {
    /// Whether the router serves this method.
    pub fn is_served(&self) -> bool {
        matches!(self, Method::Get)
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // method tokens are case-sensitive (RFC 9110 section 9.1)
        match s {
            "GET" => Ok(Method::Get),
            "HEAD" => Ok(Method::Head),
            "" => Err(Error::MalformedRequestLine(s.to_string())),
            other => Ok(Method::Other(other.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Head => f.write_str("HEAD"),
            Method::Other(token) => f.write_str(token),
        }
    }
}
