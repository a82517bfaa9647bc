//! Option records consumed by the helpers.
//!
//! # Design
//! These are transient, single-call value objects: a helper reads one,
//! formats a string, and nothing survives the call. Every field is optional
//! in the serde sense (absence of a key means "no behavior for that hook"),
//! so `#[serde(default)]` covers the whole record and options can come from
//! JSON fixtures as easily as from struct literals. There is no cross-field
//! validation by contract: combinations the client library cannot execute
//! still format without complaint.

use std::collections::BTreeMap;

use serde::{de, Deserialize, Deserializer};

use crate::url::UrlSpec;

/// JSON object keys are strings; parse them so the status map deserializes
/// the same standalone and flattened inside [`ObserverOptions`].
fn status_keys<'de, D>(deserializer: D) -> Result<BTreeMap<u16, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(code, js)| {
            code.parse::<u16>()
                .map(|code| (code, js))
                .map_err(|_| de::Error::custom(format!("invalid status code key '{code}'")))
        })
        .collect()
}

/// HTTP verb for the emitted request, passed through as an explicit
/// `method:` override. Prototype simulates put/delete over post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
        }
    }
}

/// Where the response text lands relative to the update target, emitted as
/// the `insertion:` option.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    Before,
    Top,
    Bottom,
    After,
}

impl InsertPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsertPosition::Before => "before",
            InsertPosition::Top => "top",
            InsertPosition::Bottom => "bottom",
            InsertPosition::After => "after",
        }
    }
}

/// Element(s) whose contents are replaced with the response text.
///
/// Deserializes from a bare string (one target) or an object with
/// `success`/`failure` keys (separate targets per outcome).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum UpdateTarget {
    /// No DOM update: the request is issued for its side effects.
    #[default]
    None,
    /// One element id, updated on completion.
    Id(String),
    /// Separate element ids for success and failure responses.
    Split {
        success: Option<String>,
        failure: Option<String>,
    },
}

impl UpdateTarget {
    pub fn id(id: impl Into<String>) -> Self {
        UpdateTarget::Id(id.into())
    }
}

/// Everything a remote call can be asked to do.
///
/// Mirrors the option hash of the classic helpers: a URL target, an optional
/// update target, callback code fragments for the request lifecycle, and
/// guard expressions wrapped around the call. All code fragments are emitted
/// verbatim, with no escaping and no validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequestOptions {
    /// Target descriptor, handed to the [`UrlResolver`](crate::url::UrlResolver).
    pub url: UrlSpec,

    /// Element(s) to update with the response text.
    pub update: UpdateTarget,

    /// Explicit verb override; absent means the client default (post).
    pub method: Option<HttpMethod>,

    /// Insert relative to the target instead of replacing its contents.
    pub position: Option<InsertPosition>,

    /// JavaScript expression producing the request parameters (a query
    /// string). Overridden by `submit` and `form` below.
    pub with: Option<String>,

    /// Only issue the request when this expression is true.
    pub condition: Option<String>,

    /// Confirmation dialog text; declining aborts the call.
    pub confirm: Option<String>,

    /// Code to run immediately before the request is initiated.
    pub before: Option<String>,

    /// Code to run immediately after the request is initiated.
    pub after: Option<String>,

    // Lifecycle callbacks, emitted in this order.
    pub loading: Option<String>,
    pub loaded: Option<String>,
    pub interactive: Option<String>,
    pub success: Option<String>,
    pub failure: Option<String>,
    pub complete: Option<String>,

    /// Per-HTTP-status callbacks, emitted as `on404:` and friends after the
    /// lifecycle callbacks, in ascending status order. Any status may carry
    /// an override; no range classification happens here.
    #[serde(deserialize_with = "status_keys")]
    pub status: BTreeMap<u16, String>,

    /// Element id whose descendant fields are serialized as the parameters
    /// (`Form.serialize('<id>')`). A table row can act as the form.
    pub submit: Option<String>,

    /// Serialize the element the handler is attached to
    /// (`Form.serialize(this)`). Takes precedence over `submit` and `with`.
    pub form: bool,

    /// Block the browser for the duration of the call
    /// (`asynchronous:false`).
    pub synchronous: bool,

    /// Emitted as `evalScripts:`; defaults to true so returned `<script>`
    /// blocks execute.
    pub script: Option<bool>,
}

/// [`RequestOptions`] plus the observer-specific knobs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ObserverOptions {
    /// Poll interval in seconds. Present and positive means timer-driven
    /// observation; zero or absent means event-driven.
    pub frequency: Option<f64>,

    /// Raw callback body, used verbatim instead of a generated remote call.
    pub function: Option<String>,

    #[serde(flatten)]
    pub request: RequestOptions,
}
