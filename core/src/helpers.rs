//! Link and button helpers: embed a JavaScript call in an element's
//! `onclick` so the element works without a page reload.
//!
//! All of them funnel through [`click_handler`], which chains any
//! pre-existing `onclick` in front of the generated call and always ends
//! with `return false;` so the browser's default action is suppressed.

use crate::error::UrlError;
use crate::markup::{content_tag, tag, Attrs};
use crate::options::RequestOptions;
use crate::remote::AjaxHelpers;
use crate::url::UrlResolver;

/// Chain `existing` (if any) in front of `function` and suppress the
/// element's default action.
pub fn click_handler(existing: Option<&str>, function: &str) -> String {
    match existing {
        Some(existing) => format!("{existing}; {function}; return false;"),
        None => format!("{function}; return false;"),
    }
}

/// An anchor that runs `function` on click. `href` is kept when the caller
/// provides one (a real URL degrades gracefully without JavaScript) and
/// defaults to `#` otherwise.
pub fn link_to_function(name: &str, function: &str, html_options: &Attrs) -> String {
    let mut attrs = html_options.clone();
    let existing = attrs.remove("onclick");
    attrs.set("onclick", &click_handler(existing.as_deref(), function));
    if attrs.get("href").is_none() {
        attrs.set("href", "#");
    }
    content_tag("a", name, &attrs)
}

/// An `<input type="button" />` that runs `function` on click, labelled
/// `name`.
pub fn button_to_function(name: &str, function: &str, html_options: &Attrs) -> String {
    let mut attrs = html_options.clone();
    let existing = attrs.remove("onclick");
    attrs.set("onclick", &click_handler(existing.as_deref(), function));
    attrs.set("type", "button");
    attrs.set("value", name);
    tag("input", &attrs)
}

impl<R: UrlResolver> AjaxHelpers<R> {
    /// A link that fires the remote call described by `options` instead of
    /// following its `href`.
    pub fn link_to_remote(
        &self,
        name: &str,
        options: &RequestOptions,
        html_options: &Attrs,
    ) -> Result<String, UrlError> {
        Ok(link_to_function(name, &self.remote_function(options)?, html_options))
    }

    /// A button that fires the remote call described by `options`.
    pub fn button_to_remote(
        &self,
        name: &str,
        options: &RequestOptions,
        html_options: &Attrs,
    ) -> Result<String, UrlError> {
        Ok(button_to_function(name, &self.remote_function(options)?, html_options))
    }

    /// A button for use inside a form: submits the enclosing form's fields
    /// over Ajax instead of the regular form submit. `name` becomes the
    /// input's `name` attribute, `value` its label, and `with` defaults to
    /// `Form.serialize(this.form)` so the surrounding fields travel along.
    pub fn submit_to_remote(
        &self,
        name: &str,
        value: &str,
        options: &RequestOptions,
        html_options: &Attrs,
    ) -> Result<String, UrlError> {
        let mut options = options.clone();
        if options.with.is_none() {
            options.with = Some("Form.serialize(this.form)".to_string());
        }
        let html_options = html_options.clone().with("name", name);
        self.button_to_remote(value, &options, &html_options)
    }
}
