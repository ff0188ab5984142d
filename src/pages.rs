//! The demonstration site: a handful of pages exercising every parameter kind
//! and both failure signals.

use crate::router::{Failure, Handler, HandlerResult, ResponseInfo, RouteTable};

fn index() -> HandlerResult {
    Ok(ResponseInfo::html("Index Page"))
}

fn hello() -> HandlerResult {
    Ok(ResponseInfo::html("<html><body><h1>Hello World</h1></body></html>"))
}

fn show_user_profile(username: String) -> HandlerResult {
    Ok(ResponseInfo::html(format!("User: {username}")))
}

fn show_post(post_id: i64) -> HandlerResult {
    Ok(ResponseInfo::html(format!("Post {post_id}")))
}

fn show_subpath(subpath: String) -> HandlerResult {
    Ok(ResponseInfo::html(format!("Subpath {subpath}")))
}

fn bad_request() -> HandlerResult {
    Err(Failure::BadRequest)
}

fn access_denied() -> HandlerResult {
    Err(Failure::AccessDenied)
}

/// Build the route table for the demonstration site.
pub fn table() -> RouteTable {
    RouteTable::new()
        .with_route("/", Handler::none(index))
        .with_route("/hello", Handler::none(hello))
        .with_route("/user", Handler::string(show_user_profile))
        .with_route("/post", Handler::int(show_post))
        .with_route("/path", Handler::path(show_subpath))
        .with_route("/bad-request", Handler::none(bad_request))
        .with_route("/access-denied", Handler::none(access_denied))
}
