use dioxus::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::config::{EmailSettings, RuntimeConfig};
use crate::emailjs::{DeliveryError, EmailDelivery, EmailJs};
use crate::notifications::{use_notifier, ToastKind};
use crate::timing::sleep_ms;

pub const SENDING_MS: u32 = 2000;
pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Variables handed to the EmailJS template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
}

impl TemplateParams {
    pub fn new(fields: &ContactFields, recipient: &str) -> Self {
        Self {
            from_name: fields.name.clone(),
            from_email: fields.email.clone(),
            subject: fields.subject.clone(),
            message: fields.message.clone(),
            to_email: recipient.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Email service not loaded. Check internet or EmailJS script.")]
    SdkUnavailable,
    #[error("Email not configured. Set Service ID and Template ID.")]
    NotConfigured,
    #[error("Send failed: {}", .0.message.as_deref().unwrap_or("Unknown error"))]
    Delivery(DeliveryError),
}

/// One delivery attempt. Missing SDK and placeholder ids fail before
/// anything is sent.
pub async fn submit_contact<D: EmailDelivery>(
    delivery: Option<&D>,
    settings: &EmailSettings,
    fields: &ContactFields,
) -> Result<(), ContactError> {
    let delivery = delivery.ok_or(ContactError::SdkUnavailable)?;
    if !settings.is_configured() {
        return Err(ContactError::NotConfigured);
    }
    let params = TemplateParams::new(fields, &settings.recipient);
    delivery
        .send(&settings.service_id, &settings.template_id, &params)
        .await
        .map_err(ContactError::Delivery)
}

pub fn outcome_toast(outcome: &Result<(), ContactError>) -> (ToastKind, String) {
    match outcome {
        Ok(()) => (ToastKind::Success, SUCCESS_MESSAGE.to_string()),
        Err(err) => (ToastKind::Error, err.to_string()),
    }
}

/// Clears the form after a delivered message and picks the toast to show.
/// Failed sends leave the fields untouched so the visitor can retry.
pub fn apply_outcome(
    fields: &mut ContactFields,
    outcome: &Result<(), ContactError>,
) -> (ToastKind, String) {
    match outcome {
        Ok(()) => {
            tracing::info!("contact: message delivered");
            *fields = ContactFields::default();
        }
        Err(err) => tracing::warn!("contact: {err}"),
    }
    outcome_toast(outcome)
}

/// Filled fields keep their highlight after losing focus.
pub fn keeps_focus_after_blur(value: &str) -> bool {
    !value.is_empty()
}

#[component]
pub fn ContactForm() -> Element {
    let config = use_context::<RuntimeConfig>();
    let notifier = use_notifier();
    let mut fields = use_signal(ContactFields::default);
    let mut sending = use_signal(|| false);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        if sending() {
            return;
        }
        sending.set(true);
        spawn(async move {
            sleep_ms(SENDING_MS).await;
            sending.set(false);
        });

        let settings = config.email.clone();
        let submitted = fields();
        spawn(async move {
            let delivery = EmailJs::detect(&settings.public_key);
            let outcome = submit_contact(delivery.as_ref(), &settings, &submitted).await;
            let (kind, message) = apply_outcome(&mut fields.write(), &outcome);
            match kind {
                ToastKind::Success => notifier.success(message),
                ToastKind::Error => notifier.error(message),
            }
        });
    };

    rsx! {
        form { id: "contact-form", class: "contact-form", onsubmit,
            div { class: "form-row",
                ContactField {
                    name: "name",
                    label: "Your Name",
                    input_type: "text",
                    value: fields.read().name.clone(),
                    oninput: move |value| fields.write().name = value,
                }
                ContactField {
                    name: "email",
                    label: "Your Email",
                    input_type: "email",
                    value: fields.read().email.clone(),
                    oninput: move |value| fields.write().email = value,
                }
            }
            ContactField {
                name: "subject",
                label: "Subject",
                input_type: "text",
                value: fields.read().subject.clone(),
                oninput: move |value| fields.write().subject = value,
            }
            ContactField {
                name: "message",
                label: "Message",
                input_type: "textarea",
                value: fields.read().message.clone(),
                oninput: move |value| fields.write().message = value,
            }
            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: sending(),
                if sending() {
                    i { class: "fas fa-spinner fa-spin" }
                    " Sending..."
                } else {
                    i { class: "fas fa-paper-plane" }
                    " Send Message"
                }
            }
        }
    }
}

#[component]
fn ContactField(
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    value: String,
    oninput: EventHandler<String>,
) -> Element {
    let mut focused = use_signal(|| false);
    let blur_value = value.clone();

    rsx! {
        div {
            class: if focused() { "form-group focused" } else { "form-group" },
            onfocusin: move |_| focused.set(true),
            onfocusout: move |_| focused.set(keeps_focus_after_blur(&blur_value)),
            if input_type == "textarea" {
                textarea {
                    id: name,
                    name: name,
                    rows: "5",
                    required: true,
                    placeholder: label,
                    value: "{value}",
                    oninput: move |event| oninput.call(event.value()),
                }
            } else {
                input {
                    id: name,
                    name: name,
                    r#type: input_type,
                    required: true,
                    placeholder: label,
                    value: "{value}",
                    oninput: move |event| oninput.call(event.value()),
                }
            }
        }
    }
}
