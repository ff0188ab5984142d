//! HTTP request parsing and representation.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::parser::error::Error;
use crate::parser::method::Method;

/// Supported HTTP protocol versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVersion {
    Http10,
    Http11,
}

impl FromStr for HttpVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HTTP/1.0" => Ok(HttpVersion::Http10),
            "HTTP/1.1" => Ok(HttpVersion::Http11),
            _ => Err(Error::InvalidVersion(s.to_string())),
        }
    }
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpVersion::Http10 => f.write_str("HTTP/1.0"),
            HttpVersion::Http11 => f.write_str("HTTP/1.1"),
        }
    }
}

/// The head of an HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method
    pub method: Method,
    /// The request target as sent, including any query string
    pub target: String,
    /// The HTTP version
    pub version: HttpVersion,
    /// The HTTP headers
    pub headers: HashMap<String, String>,
}

impl HttpRequest {
    /// The target without its query string or fragment.
    pub fn path(&self) -> &str {
        self.target.split(['?', '#']).next().unwrap_or_default()
    }

    /// Get a header value. Header names are compared case-insensitively.
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Parse an HTTP request head from a byte slice.
///
/// Anything after the blank line that ends the headers is ignored.
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, Error> {
    let input = std::str::from_utf8(input).map_err(|_| Error::NotUtf8)?;
    let mut lines = input.lines();

    let request_line = lines.next().filter(|l| !l.is_empty()).ok_or(Error::EmptyRequest)?;
    let parts: Vec<&str> = request_line.split_whitespace().collect();
    let [method, target, version] = parts[..] else {
        return Err(Error::MalformedRequestLine(request_line.to_string()));
    };

    let method = Method::from_str(method)?;
    if !target.starts_with('/') {
        return Err(Error::InvalidTarget(target.to_string()));
    }
    let version = HttpVersion::from_str(version)?;

    let mut headers = HashMap::new();
    for line in lines.take_while(|l| !l.is_empty()) {
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| Error::InvalidHeader(line.to_string()))?;
        headers.insert(name.trim().to_string(), value.trim().to_string());
    }

    let request = HttpRequest {
        method,
        target: target.to_string(),
        version,
        headers,
    };

    if request.version == HttpVersion::Http11 && request.get_header("Host").is_none() {
        return Err(Error::MissingHeader("Host"));
    }

    Ok(request)
}
