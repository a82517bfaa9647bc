//! Field and form observers, plus the periodic poller.
//!
//! Observers register a Prototype watcher on a field or a whole form and run
//! a callback with the observed element and its current value. The poller
//! repeats a remote call on a fixed timer. All three render a standalone
//! `<script>` block, ready to drop into a page.

use crate::error::UrlError;
use crate::markup::javascript_tag;
use crate::options::ObserverOptions;
use crate::remote::AjaxHelpers;
use crate::url::UrlResolver;

/// A `with` value containing any of `{`, `=`, `(`, `.` is taken as a
/// hand-written expression; anything else is a bare parameter key.
fn is_expression(with: &str) -> bool {
    with.chars().any(|c| matches!(c, '{' | '=' | '(' | '.'))
}

impl<R: UrlResolver> AjaxHelpers<R> {
    /// Watch a single field. Timer-driven when `frequency` is given and
    /// greater than zero, event-driven otherwise.
    pub fn observe_field(
        &self,
        field_id: &str,
        options: &ObserverOptions,
    ) -> Result<String, UrlError> {
        self.build_observer(
            field_id,
            options,
            "Form.Element.Observer",
            "Form.Element.EventObserver",
        )
    }

    /// Watch every field in a form at once. The observed value is the
    /// serialized form, so the same `with` rules apply as for fields.
    pub fn observe_form(
        &self,
        form_id: &str,
        options: &ObserverOptions,
    ) -> Result<String, UrlError> {
        self.build_observer(form_id, options, "Form.Observer", "Form.EventObserver")
    }

    /// Repeat the remote call described by `options` every
    /// `options.frequency` time units, ten by default.
    pub fn periodically_call_remote(
        &self,
        options: &ObserverOptions,
    ) -> Result<String, UrlError> {
        let frequency = options.frequency.unwrap_or(10.0);
        let code = format!(
            "new PeriodicalExecuter(function() {{{}}}, {frequency})",
            self.remote_function(&options.request)?
        );
        Ok(javascript_tag(&code))
    }

    fn build_observer(
        &self,
        target_id: &str,
        options: &ObserverOptions,
        timer_constructor: &str,
        event_constructor: &str,
    ) -> Result<String, UrlError> {
        let mut request = options.request.clone();
        request.with = match request.with.take() {
            Some(with) if !is_expression(&with) => {
                Some(format!("'{with}=' + encodeURIComponent(value)"))
            }
            Some(with) => Some(with),
            None if options.function.is_none() => Some("value".to_string()),
            None => None,
        };

        let callback = match &options.function {
            Some(function) => function.clone(),
            None => self.remote_function(&request)?,
        };

        let observer = match options.frequency {
            Some(frequency) if frequency > 0.0 => format!(
                "new {timer_constructor}('{target_id}', {frequency}, \
                 function(element, value) {{{callback}}})"
            ),
            _ => format!(
                "new {event_constructor}('{target_id}', \
                 function(element, value) {{{callback}}})"
            ),
        };
        Ok(javascript_tag(&observer))
    }
}
