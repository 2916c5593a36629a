//! Contact form wiring: client-side validation plus JSON submission to the
//! mail endpoint. The server performs the actual email dispatch and runs the
//! same validation again.

use crate::constants::{
    CONTACT_DATE_ID, CONTACT_EMAIL_ID, CONTACT_ENDPOINT, CONTACT_FIRST_NAME_ID, CONTACT_FORM_ID,
    CONTACT_LAST_NAME_ID, CONTACT_MESSAGE_ID, CONTACT_STATUS_ID, CONTACT_SUBJECT_ID,
    CONTACT_TIME_ID,
};
use crate::core::contact::{
    validate, ContactForm, SubmitOutcome, MSG_SEND_FAILED, MSG_SENT, MSG_VALIDATION_FAILED,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Submit listener for the contact form; dropping removes it.
pub struct ContactBinding {
    form: web::Element,
    submit: Closure<dyn FnMut(web::Event)>,
}

impl Drop for ContactBinding {
    fn drop(&mut self) {
        _ = self
            .form
            .remove_event_listener_with_callback("submit", self.submit.as_ref().unchecked_ref());
    }
}

pub fn wire(document: &web::Document) -> Option<ContactBinding> {
    let form = document.get_element_by_id(CONTACT_FORM_ID)?;

    let submit = Closure::wrap(Box::new(move |event: web::Event| {
        event.prevent_default();
        on_submit();
    }) as Box<dyn FnMut(_)>);
    _ = form.add_event_listener_with_callback("submit", submit.as_ref().unchecked_ref());

    Some(ContactBinding { form, submit })
}

fn input_value(document: &web::Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn read_form(document: &web::Document) -> ContactForm {
    ContactForm {
        first_name: input_value(document, CONTACT_FIRST_NAME_ID),
        last_name: input_value(document, CONTACT_LAST_NAME_ID),
        email: input_value(document, CONTACT_EMAIL_ID),
        subject: input_value(document, CONTACT_SUBJECT_ID),
        message: input_value(document, CONTACT_MESSAGE_ID),
        date: optional(input_value(document, CONTACT_DATE_ID)),
        time: optional(input_value(document, CONTACT_TIME_ID)),
    }
}

fn render_outcome(document: &web::Document, outcome: &SubmitOutcome) {
    let Some(el) = document.get_element_by_id(CONTACT_STATUS_ID) else {
        return;
    };
    // Lead with the first field error when there is one.
    let text = match outcome.errors.first() {
        Some(error) => format!("{}: {}", outcome.message, error.message),
        None => outcome.message.clone(),
    };
    el.set_text_content(Some(&text));
    let classes = el.class_list();
    if outcome.success {
        _ = classes.remove_1("error");
    } else {
        _ = classes.add_1("error");
    }
}

fn on_submit() {
    let Some(document) = crate::dom::window_document() else {
        return;
    };
    let form = read_form(&document);

    let errors = validate(&form);
    if !errors.is_empty() {
        log::info!("[contact] validation failed on {} field(s)", errors.len());
        render_outcome(
            &document,
            &SubmitOutcome {
                success: false,
                message: MSG_VALIDATION_FAILED.into(),
                errors,
            },
        );
        return;
    }

    spawn_local(async move {
        let outcome = match post_inquiry(&form).await {
            Ok(()) => {
                log::info!("[contact] inquiry sent");
                SubmitOutcome {
                    success: true,
                    message: MSG_SENT.into(),
                    errors: Vec::new(),
                }
            }
            Err(e) => {
                log::error!("[contact] send error: {e:?}");
                SubmitOutcome {
                    success: false,
                    message: MSG_SEND_FAILED.into(),
                    errors: Vec::new(),
                }
            }
        };
        render_outcome(&document, &outcome);
    });
}

async fn post_inquiry(form: &ContactForm) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let body = serde_json::to_string(form)?;

    let opts = web::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));
    let request = web::Request::new_with_str_and_init(CONTACT_ENDPOINT, &opts)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !response.ok() {
        anyhow::bail!("endpoint returned status {}", response.status());
    }
    Ok(())
}
