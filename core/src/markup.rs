//! Minimal XHTML emission: attribute sets and the element shapes the helpers
//! produce (anchor, input, script block).
//!
//! # Design
//! Attributes are kept in insertion order but emitted sorted by name, so
//! output is deterministic and matches the classic helper shape
//! (`<input name=".." onclick=".." type="button" value=".." />`). Attribute
//! values are HTML-escaped exactly once, here, and nowhere else. Element
//! *content* is emitted verbatim; link text may legitimately be an
//! `<img />` tag, so escaping it is the caller's call.

use crate::escape::html_escape;

/// An HTML attribute set. Later `set`s replace earlier values; emission is
/// sorted by attribute name.
#[derive(Debug, Clone, Default)]
pub struct Attrs(Vec<(String, String)>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert-or-replace, for literal call sites.
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    /// Insert `name`, replacing any existing value.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.0.iter_mut().find(|(n, _)| n == name) {
            Some(pair) => pair.1 = value.to_string(),
            None => self.0.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    /// Remove `name`, returning its value. Helpers use this to fold a
    /// pre-existing `onclick` into the generated handler.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.0.iter().position(|(n, _)| n == name)?;
        Some(self.0.remove(index).1)
    }

    /// Render as ` name="value"…`, sorted, values escaped. Empty sets render
    /// as an empty string so tags close up tight.
    pub fn to_html(&self) -> String {
        let mut pairs: Vec<&(String, String)> = self.0.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
            .iter()
            .map(|(name, value)| format!(" {name}=\"{}\"", html_escape(value)))
            .collect()
    }
}

/// `<name attrs>content</name>`.
pub fn content_tag(name: &str, content: &str, attrs: &Attrs) -> String {
    format!("<{name}{}>{content}</{name}>", attrs.to_html())
}

/// Self-closing `<name attrs />`.
pub fn tag(name: &str, attrs: &Attrs) -> String {
    format!("<{name}{} />", attrs.to_html())
}

/// Wrap `content` in a `<script>` block with the classic CDATA guard.
pub fn javascript_tag(content: &str) -> String {
    let guarded = format!("\n//<![CDATA[\n{content}\n//]]>\n");
    content_tag("script", &guarded, &Attrs::new().with("type", "text/javascript"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_emit_sorted_by_name() {
        let attrs = Attrs::new()
            .with("value", "Create")
            .with("name", "create_btn")
            .with("type", "button");
        assert_eq!(attrs.to_html(), r#" name="create_btn" type="button" value="Create""#);
    }

    #[test]
    fn attribute_values_are_escaped() {
        let attrs = Attrs::new().with("title", r#"a "b" & <c>"#);
        assert_eq!(attrs.to_html(), r#" title="a &quot;b&quot; &amp; &lt;c&gt;""#);
    }

    #[test]
    fn set_replaces_existing_values() {
        let mut attrs = Attrs::new().with("href", "/old");
        attrs.set("href", "/new");
        assert_eq!(attrs.get("href"), Some("/new"));
        assert_eq!(attrs.to_html(), r#" href="/new""#);
    }

    #[test]
    fn remove_returns_the_old_value() {
        let mut attrs = Attrs::new().with("onclick", "alert(1)");
        assert_eq!(attrs.remove("onclick"), Some("alert(1)".to_string()));
        assert_eq!(attrs.remove("onclick"), None);
        assert_eq!(attrs.to_html(), "");
    }

    #[test]
    fn content_tag_shape() {
        let html = content_tag("a", "Greeting", &Attrs::new().with("href", "#"));
        assert_eq!(html, r##"<a href="#">Greeting</a>"##);
    }

    #[test]
    fn content_is_not_escaped() {
        let html = content_tag("a", r#"<img src="/images/refresh.png" />"#, &Attrs::new());
        assert_eq!(html, r#"<a><img src="/images/refresh.png" /></a>"#);
    }

    #[test]
    fn tag_is_self_closing() {
        let html = tag("input", &Attrs::new().with("type", "button"));
        assert_eq!(html, r#"<input type="button" />"#);
    }

    #[test]
    fn javascript_tag_wraps_in_cdata() {
        let html = javascript_tag("alert('hi')");
        assert_eq!(
            html,
            "<script type=\"text/javascript\">\n//<![CDATA[\nalert('hi')\n//]]>\n</script>"
        );
    }
}
