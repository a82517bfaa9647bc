//! Error type for URL resolution.
//!
//! # Design
//! The helpers themselves never fail: any combination of options is accepted
//! and formatted as-is (garbage in, garbage out). The single failure mode is
//! the URL-resolution collaborator being unable to turn a target descriptor
//! into a concrete path, so that is the only error this crate defines.

use std::fmt;

/// Errors returned by a [`UrlResolver`](crate::url::UrlResolver).
#[derive(Debug)]
pub enum UrlError {
    /// The target names a route the resolver does not know about.
    RouteNotFound(String),

    /// The resolver rejected the target descriptor for another reason.
    Unresolvable(String),
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlError::RouteNotFound(name) => write!(f, "no route named '{name}'"),
            UrlError::Unresolvable(msg) => write!(f, "unresolvable url target: {msg}"),
        }
    }
}

impl std::error::Error for UrlError {}
