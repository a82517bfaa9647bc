//! URL target descriptors and the resolution seam.
//!
//! # Design
//! The helpers never interpret a target themselves: a `UrlSpec` is opaque
//! data handed to the application's `UrlResolver`, which maps it to the
//! concrete path the emitted JavaScript will request. `RouteMap` is the
//! shipped resolver: raw paths join onto an optional base URL; named routes
//! look up a template and substitute `{param}` placeholders (the same syntax
//! axum routes use), with leftover params appended as a query string. Query
//! values are emitted verbatim; callers supply encoded values, matching the
//! trust-the-caller contract of the rest of the crate.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::UrlError;

/// Target of a remote call, resolved to a concrete path by a [`UrlResolver`].
///
/// Deserializes from either a bare string (`"/posts/3"` becomes
/// [`UrlSpec::Raw`]) or an object naming a registered route
/// (`{"name": "post_delete", "params": [["id", "3"]]}`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum UrlSpec {
    /// A literal path or URL, passed to the resolver as-is.
    Raw(String),
    /// A named route with parameters, looked up by the resolver.
    Route {
        name: String,
        #[serde(default)]
        params: Vec<(String, String)>,
    },
}

impl UrlSpec {
    pub fn raw(path: impl Into<String>) -> Self {
        UrlSpec::Raw(path.into())
    }

    pub fn route(name: impl Into<String>, params: &[(&str, &str)]) -> Self {
        UrlSpec::Route {
            name: name.into(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Default for UrlSpec {
    /// An empty raw path. A missing target is not an error in this crate;
    /// the resolver decides whether to accept it.
    fn default() -> Self {
        UrlSpec::Raw(String::new())
    }
}

/// Maps a target descriptor to the concrete path or URL the emitted
/// JavaScript will request.
pub trait UrlResolver {
    fn resolve(&self, target: &UrlSpec) -> Result<String, UrlError>;
}

/// Route-table resolver.
///
/// Raw targets pass through joined onto the base; route targets are looked
/// up by name and their `{param}` placeholders filled in. Unreplaced
/// placeholders are left as-is rather than rejected.
#[derive(Debug, Clone, Default)]
pub struct RouteMap {
    base: String,
    routes: HashMap<String, String>,
}

impl RouteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix every resolved path with `base` (trailing slash stripped).
    pub fn base(mut self, base: &str) -> Self {
        self.base = base.trim_end_matches('/').to_string();
        self
    }

    /// Register `template` under `name`, e.g. `.route("post", "/posts/{id}")`.
    pub fn route(mut self, name: &str, template: &str) -> Self {
        self.routes.insert(name.to_string(), template.to_string());
        self
    }
}

impl UrlResolver for RouteMap {
    fn resolve(&self, target: &UrlSpec) -> Result<String, UrlError> {
        match target {
            UrlSpec::Raw(path) => Ok(format!("{}{}", self.base, path)),
            UrlSpec::Route { name, params } => {
                let template = self
                    .routes
                    .get(name)
                    .ok_or_else(|| UrlError::RouteNotFound(name.clone()))?;
                let mut path = template.clone();
                let mut query = Vec::new();
                for (key, value) in params {
                    let placeholder = format!("{{{key}}}");
                    if path.contains(placeholder.as_str()) {
                        path = path.replacen(placeholder.as_str(), value, 1);
                    } else {
                        query.push(format!("{key}={value}"));
                    }
                }
                let mut url = format!("{}{}", self.base, path);
                if !query.is_empty() {
                    url.push('?');
                    url.push_str(&query.join("&"));
                }
                Ok(url)
            }
        }
    }
}
