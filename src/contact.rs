//! Contact helpers: copy-email buttons and required-field validation.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::config::CopyConfig;

/// Somewhere a button label can be written.
pub trait LabelSink {
    fn set_label(&self, text: &str);
}

/// Runs a task once after a delay.
pub trait Scheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Show the copied label now and restore the idle label after the configured delay.
pub fn confirm_copied<L, S>(label: L, scheduler: &S, copy: &CopyConfig)
where
    L: LabelSink + 'static,
    S: Scheduler,
{
    label.set_label(&copy.done_label);
    let idle = copy.idle_label.clone();
    scheduler.after(copy.revert_ms, Box::new(move || label.set_label(&idle)));
}

/// A required field passes when it has any non-whitespace content.
#[must_use]
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Per-field outcome of a submit attempt, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    pub filled: Vec<bool>,
}

impl FieldReport {
    pub fn check<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self { filled: values.into_iter().map(is_filled).collect() }
    }

    /// Whether the form may submit.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.filled.iter().all(|ok| *ok)
    }
}

#[cfg(feature = "browser")]
pub use browser::{setup_contact_form, setup_copy_email};

#[cfg(feature = "browser")]
mod browser {
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::{JsFuture, spawn_local};
    use web_sys::{
        Clipboard, Element, HtmlDocument, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    };

    use super::{FieldReport, LabelSink, Scheduler, confirm_copied};
    use crate::config::{CopyConfig, SiteConfig};
    use crate::consts::COPY_EMAIL_ATTR;
    use crate::dom;
    use crate::error::BehaviorError;

    struct ElementLabel(Element);

    impl LabelSink for ElementLabel {
        fn set_label(&self, text: &str) {
            self.0.set_text_content(Some(text));
        }
    }

    struct TimeoutScheduler;

    impl Scheduler for TimeoutScheduler {
        fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
            Timeout::new(delay_ms, task).forget();
        }
    }

    async fn write_clipboard(text: &str) -> Result<(), BehaviorError> {
        let navigator = dom::window()?.navigator();
        let value = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
        if value.is_undefined() || value.is_null() {
            return Err(BehaviorError::Js("clipboard API unavailable".to_owned()));
        }
        let clipboard: Clipboard = value.unchecked_into();
        JsFuture::from(clipboard.write_text(text)).await?;
        Ok(())
    }

    /// Copy through an off-screen text field and `execCommand("copy")`.
    fn legacy_copy(text: &str) -> Result<(), BehaviorError> {
        let document = dom::document()?;
        let body = document.body().ok_or_else(|| BehaviorError::missing("body"))?;
        let field = document
            .create_element("textarea")?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| BehaviorError::Js("could not create textarea".to_owned()))?;
        field.set_value(text);
        field.set_attribute("readonly", "")?;
        field.style().set_property("position", "absolute")?;
        field.style().set_property("left", "-9999px")?;
        body.append_child(&field)?;
        field.select();

        let copied = match document.dyn_ref::<HtmlDocument>() {
            Some(html) => html.exec_command("copy").map_err(BehaviorError::from),
            None => Err(BehaviorError::Js("document does not support execCommand".to_owned())),
        };
        body.remove_child(&field)?;
        if copied? {
            Ok(())
        } else {
            Err(BehaviorError::Js("execCommand(\"copy\") was refused".to_owned()))
        }
    }

    async fn copy_email(button: Element, email: String, copy: CopyConfig) {
        match write_clipboard(&email).await {
            Ok(()) => confirm_copied(ElementLabel(button), &TimeoutScheduler, &copy),
            Err(e) => {
                log::warn!("clipboard write failed, using fallback: {e}");
                dom::report("legacy copy", legacy_copy(&email));
            }
        }
    }

    pub fn setup_copy_email(config: &SiteConfig) -> Result<(), BehaviorError> {
        let document = dom::document()?;
        let buttons = dom::query_all(&document, &config.selectors.copy_email)?;
        if buttons.is_empty() {
            return Err(BehaviorError::missing(&config.selectors.copy_email));
        }
        for button in buttons {
            let el = button.clone();
            let copy = config.copy.clone();
            dom::listen(&button, "click", move |_| {
                let email = el.get_attribute(COPY_EMAIL_ATTR).unwrap_or_default();
                if email.is_empty() {
                    return;
                }
                spawn_local(copy_email(el.clone(), email, copy.clone()));
            })?;
        }
        log::debug!("copy-email buttons wired");
        Ok(())
    }

    fn field_value(field: &Element) -> String {
        if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            field.text_content().unwrap_or_default()
        }
    }

    pub fn setup_contact_form(config: &SiteConfig) -> Result<(), BehaviorError> {
        let document = dom::document()?;
        let form = dom::query(&document, &config.selectors.contact_form)?;
        let el = form.clone();
        let required = config.selectors.required_field.clone();
        let error_class = config.classes.field_error.clone();
        let message = config.validation_message.clone();

        dom::listen(&form, "submit", move |event| {
            let fields = match dom::query_all_within(&el, &required) {
                Ok(fields) => fields,
                Err(e) => {
                    log::warn!("contact form: {e}");
                    return;
                }
            };
            let values: Vec<String> = fields.iter().map(field_value).collect();
            let report = FieldReport::check(values.iter().map(String::as_str));
            for (field, filled) in fields.iter().zip(&report.filled) {
                dom::report("field state", dom::set_class(field, &error_class, !filled));
            }
            if !report.is_valid() {
                event.prevent_default();
                let alerted = dom::window().and_then(|w| w.alert_with_message(&message).map_err(BehaviorError::from));
                dom::report("validation alert", alerted);
            }
        })?;
        log::debug!("contact form validation wired");
        Ok(())
    }
}
