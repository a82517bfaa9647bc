//! The option translator: one [`RequestOptions`] record in, one Prototype
//! call expression out.
//!
//! Everything else in the crate is a wrapper around [`remote_function`]:
//! links and buttons embed its output in an `onclick`, observers and pollers
//! embed it in a callback body. The translation itself is fixed-order string
//! assembly so the same record always renders the same JavaScript.
//!
//! [`remote_function`]: AjaxHelpers::remote_function

use crate::error::UrlError;
use crate::escape::escape_javascript;
use crate::options::{RequestOptions, UpdateTarget};
use crate::url::UrlResolver;

/// Server-side builder for Prototype-flavored inline JavaScript.
///
/// Wraps a URL resolver and nothing else. Every method takes its option
/// record by reference and returns a fresh `String`, so a single instance
/// can render any number of fragments, concurrently if the caller likes.
#[derive(Debug, Clone)]
pub struct AjaxHelpers<R: UrlResolver> {
    urls: R,
}

impl<R: UrlResolver> AjaxHelpers<R> {
    pub fn new(urls: R) -> Self {
        Self { urls }
    }

    /// The Prototype call for `options`: `new Ajax.Request(…)`, or
    /// `new Ajax.Updater(…)` when an update target is set, wrapped in any
    /// requested confirm/condition/before/after guards.
    ///
    /// The resolved URL and the confirm text are JavaScript-escaped; every
    /// other option value is embedded verbatim.
    pub fn remote_function(&self, options: &RequestOptions) -> Result<String, UrlError> {
        let url = escape_javascript(&self.urls.resolve(&options.url)?);
        let ajax = options_for_ajax(options);

        let mut function = match &options.update {
            UpdateTarget::None => format!("new Ajax.Request('{url}', {ajax})"),
            UpdateTarget::Id(id) => format!("new Ajax.Updater('{id}', '{url}', {ajax})"),
            UpdateTarget::Split { success, failure } => {
                let mut targets = Vec::new();
                if let Some(id) = success {
                    targets.push(format!("success:'{id}'"));
                }
                if let Some(id) = failure {
                    targets.push(format!("failure:'{id}'"));
                }
                format!("new Ajax.Updater({{{}}}, '{url}', {ajax})", targets.join(","))
            }
        };

        if let Some(before) = &options.before {
            function = format!("{before}; {function}");
        }
        if let Some(after) = &options.after {
            function = format!("{function}; {after}");
        }
        if let Some(condition) = &options.condition {
            function = format!("if ({condition}) {{ {function} }}");
        }
        if let Some(confirm) = &options.confirm {
            function = format!(
                "if (confirm('{}')) {{ {function} }}",
                escape_javascript(confirm)
            );
        }

        Ok(function)
    }
}

/// Render the Ajax options literal. Entry order is fixed: the two flag
/// entries, insertion, method, lifecycle callbacks in request order, status
/// callbacks ascending, and `parameters` last.
fn options_for_ajax(options: &RequestOptions) -> String {
    let mut entries = vec![
        format!("asynchronous:{}", !options.synchronous),
        format!("evalScripts:{}", options.script.unwrap_or(true)),
    ];
    if let Some(position) = &options.position {
        entries.push(format!("insertion:'{}'", position.as_str()));
    }
    if let Some(method) = &options.method {
        entries.push(format!("method:'{}'", method.as_str()));
    }
    entries.extend(callback_entries(options));
    if let Some(parameters) = parameters_source(options) {
        entries.push(format!("parameters:{parameters}"));
    }
    format!("{{{}}}", entries.join(", "))
}

fn callback_entries(options: &RequestOptions) -> Vec<String> {
    let lifecycle = [
        ("onLoading", &options.loading),
        ("onLoaded", &options.loaded),
        ("onInteractive", &options.interactive),
        ("onSuccess", &options.success),
        ("onFailure", &options.failure),
        ("onComplete", &options.complete),
    ];
    let mut entries = Vec::new();
    for (name, code) in lifecycle {
        if let Some(code) = code {
            entries.push(format!("{name}:function(request){{{code}}}"));
        }
    }
    for (status, code) in &options.status {
        entries.push(format!("on{status}:function(request){{{code}}}"));
    }
    entries
}

/// The `parameters:` expression, if any. Enclosing-form serialization wins
/// over a named form, which wins over a hand-written `with` expression.
fn parameters_source(options: &RequestOptions) -> Option<String> {
    if options.form {
        Some("Form.serialize(this)".to_string())
    } else if let Some(id) = &options.submit {
        Some(format!("Form.serialize('{id}')"))
    } else {
        options.with.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{HttpMethod, InsertPosition};
    use crate::url::{RouteMap, UrlSpec};

    fn helpers() -> AjaxHelpers<RouteMap> {
        AjaxHelpers::new(RouteMap::new().route("destroy_post", "/blog/destroy/{id}"))
    }

    #[test]
    fn bare_request_uses_defaults() {
        let options = RequestOptions {
            url: UrlSpec::raw("/fast"),
            ..Default::default()
        };
        assert_eq!(
            helpers().remote_function(&options).unwrap(),
            "new Ajax.Request('/fast', {asynchronous:true, evalScripts:true})"
        );
    }

    #[test]
    fn update_id_builds_an_updater() {
        let options = RequestOptions {
            url: UrlSpec::route("destroy_post", &[("id", "3")]),
            update: UpdateTarget::id("posts"),
            method: Some(HttpMethod::Delete),
            ..Default::default()
        };
        assert_eq!(
            helpers().remote_function(&options).unwrap(),
            "new Ajax.Updater('posts', '/blog/destroy/3', \
             {asynchronous:true, evalScripts:true, method:'delete'})"
        );
    }

    #[test]
    fn split_update_lists_only_present_targets() {
        let both = RequestOptions {
            url: UrlSpec::raw("/items/list"),
            update: UpdateTarget::Split {
                success: Some("items".to_string()),
                failure: Some("errors".to_string()),
            },
            ..Default::default()
        };
        assert_eq!(
            helpers().remote_function(&both).unwrap(),
            "new Ajax.Updater({success:'items',failure:'errors'}, '/items/list', \
             {asynchronous:true, evalScripts:true})"
        );

        let failure_only = RequestOptions {
            update: UpdateTarget::Split {
                success: None,
                failure: Some("errors".to_string()),
            },
            ..both
        };
        assert_eq!(
            helpers().remote_function(&failure_only).unwrap(),
            "new Ajax.Updater({failure:'errors'}, '/items/list', \
             {asynchronous:true, evalScripts:true})"
        );
    }

    #[test]
    fn insertion_comes_before_method() {
        let options = RequestOptions {
            url: UrlSpec::raw("/comments"),
            update: UpdateTarget::id("comments"),
            position: Some(InsertPosition::Bottom),
            method: Some(HttpMethod::Post),
            ..Default::default()
        };
        assert_eq!(
            helpers().remote_function(&options).unwrap(),
            "new Ajax.Updater('comments', '/comments', \
             {asynchronous:true, evalScripts:true, insertion:'bottom', method:'post'})"
        );
    }

    #[test]
    fn lifecycle_callbacks_emit_in_request_order() {
        let options = RequestOptions {
            url: UrlSpec::raw("/slow"),
            complete: Some("Element.hide('spinner')".to_string()),
            loading: Some("Element.show('spinner')".to_string()),
            success: Some("celebrate()".to_string()),
            ..Default::default()
        };
        assert_eq!(
            helpers().remote_function(&options).unwrap(),
            "new Ajax.Request('/slow', {asynchronous:true, evalScripts:true, \
             onLoading:function(request){Element.show('spinner')}, \
             onSuccess:function(request){celebrate()}, \
             onComplete:function(request){Element.hide('spinner')}})"
        );
    }

    #[test]
    fn status_callbacks_follow_lifecycle_in_ascending_order() {
        let mut options = RequestOptions {
            url: UrlSpec::raw("/check"),
            complete: Some("done()".to_string()),
            with: Some("'page=1'".to_string()),
            ..Default::default()
        };
        options.status.insert(404, "missing()".to_string());
        options.status.insert(200, "found()".to_string());
        assert_eq!(
            helpers().remote_function(&options).unwrap(),
            "new Ajax.Request('/check', {asynchronous:true, evalScripts:true, \
             onComplete:function(request){done()}, \
             on200:function(request){found()}, \
             on404:function(request){missing()}, \
             parameters:'page=1'})"
        );
    }

    #[test]
    fn parameter_sources_rank_form_then_submit_then_with() {
        let mut options = RequestOptions {
            url: UrlSpec::raw("/save"),
            form: true,
            submit: Some("editor".to_string()),
            with: Some("'a=1'".to_string()),
            ..Default::default()
        };
        let rendered = helpers().remote_function(&options).unwrap();
        assert!(rendered.contains("parameters:Form.serialize(this)"), "{rendered}");

        options.form = false;
        let rendered = helpers().remote_function(&options).unwrap();
        assert!(rendered.contains("parameters:Form.serialize('editor')"), "{rendered}");

        options.submit = None;
        let rendered = helpers().remote_function(&options).unwrap();
        assert!(rendered.contains("parameters:'a=1'"), "{rendered}");
    }

    #[test]
    fn guards_nest_with_confirm_outermost() {
        let options = RequestOptions {
            url: UrlSpec::raw("/purge"),
            before: Some("lock()".to_string()),
            after: Some("unlock()".to_string()),
            condition: Some("cartEmpty()".to_string()),
            confirm: Some("Really purge?".to_string()),
            ..Default::default()
        };
        assert_eq!(
            helpers().remote_function(&options).unwrap(),
            "if (confirm('Really purge?')) { if (cartEmpty()) { lock(); \
             new Ajax.Request('/purge', {asynchronous:true, evalScripts:true}); \
             unlock() } }"
        );
    }

    #[test]
    fn url_and_confirm_text_are_javascript_escaped() {
        let options = RequestOptions {
            url: UrlSpec::raw("/posts?title='quoted'"),
            confirm: Some("Delete 'everything'?".to_string()),
            ..Default::default()
        };
        assert_eq!(
            helpers().remote_function(&options).unwrap(),
            "if (confirm('Delete \\'everything\\'?')) { \
             new Ajax.Request('/posts?title=\\'quoted\\'', \
             {asynchronous:true, evalScripts:true}) }"
        );
    }

    #[test]
    fn synchronous_and_script_flip_the_flag_entries() {
        let options = RequestOptions {
            url: UrlSpec::raw("/sync"),
            synchronous: true,
            script: Some(false),
            ..Default::default()
        };
        assert_eq!(
            helpers().remote_function(&options).unwrap(),
            "new Ajax.Request('/sync', {asynchronous:false, evalScripts:false})"
        );
    }

    #[test]
    fn unknown_route_names_surface_as_errors() {
        let options = RequestOptions {
            url: UrlSpec::route("missing", &[]),
            ..Default::default()
        };
        let err = helpers().remote_function(&options).unwrap_err();
        assert!(matches!(err, UrlError::RouteNotFound(name) if name == "missing"));
    }
}
