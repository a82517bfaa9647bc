//! Server-side generation of Prototype-era inline JavaScript.
//!
//! # Overview
//! Builds the `new Ajax.Request(…)` / `new Ajax.Updater(…)` one-liners,
//! observers and pollers that classic Prototype pages embed in `onclick`
//! attributes and `<script>` blocks, without touching the network
//! (host-does-IO pattern). The caller drops the returned strings into its
//! templates; the browser executes the JavaScript later.
//!
//! # Design
//! - `AjaxHelpers` is stateless: it holds only a URL resolver.
//! - Option records (`RequestOptions`, `ObserverOptions`) are plain serde
//!   data, so templates and fixtures can describe calls declaratively.
//! - Every helper is a pure function of its inputs; identical records
//!   always render identical strings, which keeps everything testable by
//!   string comparison.
//! - Escaping happens at the embedding point: attribute values are
//!   HTML-escaped by the markup layer, resolved URLs and confirm texts are
//!   JavaScript-escaped by the translator, and everything else is the
//!   caller's own JavaScript, passed through verbatim.

pub mod error;
pub mod escape;
pub mod helpers;
pub mod markup;
pub mod observe;
pub mod options;
pub mod remote;
pub mod url;

pub use error::UrlError;
pub use escape::{escape_javascript, html_escape};
pub use helpers::{button_to_function, click_handler, link_to_function};
pub use markup::{content_tag, javascript_tag, tag, Attrs};
pub use options::{HttpMethod, InsertPosition, ObserverOptions, RequestOptions, UpdateTarget};
pub use remote::AjaxHelpers;
pub use url::{RouteMap, UrlResolver, UrlSpec};
