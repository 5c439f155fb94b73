use yew::prelude::*;
use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::components::notification::use_notifier;
use crate::components::ripple_button::RippleButton;
use crate::config;
use crate::interactions::form::{Field, FormDraft, FormSubmitter, MailHandoff, RESET_DELAY_MS};
use crate::interactions::notify::{Notifier, Severity};

/// Opens the platform's mail client by navigating to the mailto link.
struct LocationMailHandoff;

impl MailHandoff for LocationMailHandoff {
    fn hand_off(&self, href: &str) {
        let Some(window) = web_sys::window() else {
            warn!("No window to hand the message off from");
            return;
        };
        if let Err(err) = window.location().set_href(href) {
            warn!("Mail handoff failed: {:?}", err);
        }
    }
}

/// Used when the form is rendered outside a `NotificationProvider`.
struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        info!("[{:?}] {}", severity, message);
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(FormDraft::default);
    let sending = use_state(|| false);
    let notifier = use_notifier();

    let on_input = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            next.set(field, value);
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let sending = sending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }

            let notifier: Box<dyn Notifier> = match notifier.clone() {
                Some(dispatcher) => Box::new(dispatcher),
                None => Box::new(LogNotifier),
            };
            let submitter = FormSubmitter::new(config::contact_address(), &LocationMailHandoff, notifier.as_ref());
            if submitter.submit(&draft).is_err() {
                return;
            }

            sending.set(true);
            let draft = draft.setter();
            let sending = sending.setter();
            Timeout::new(RESET_DELAY_MS, move || {
                let submitter = FormSubmitter::new(config::contact_address(), &LocationMailHandoff, notifier.as_ref());
                let mut cleared = FormDraft::default();
                submitter.complete(&mut cleared);
                draft.set(cleared);
                sending.set(false);
            })
            .forget();
        })
    };

    let text_input = |field: Field, kind: &'static str, placeholder: &'static str| {
        let on_input = on_input(field);
        html! {
            <div class="form-group">
                <input
                    type={kind}
                    name={field.name()}
                    placeholder={placeholder}
                    value={draft.get(field).to_string()}
                    oninput={Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_input.emit(input.value());
                    })}
                />
            </div>
        }
    };

    let on_message = on_input(Field::Message);

    html! {
        <form onsubmit={onsubmit} novalidate={true}>
            { text_input(Field::Name, "text", "Your Name") }
            { text_input(Field::Email, "email", "Your Email") }
            { text_input(Field::Subject, "text", "Subject") }
            <div class="form-group">
                <textarea
                    name={Field::Message.name()}
                    placeholder="Your Message"
                    rows="5"
                    value={draft.message.clone()}
                    oninput={Callback::from(move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        on_message.emit(input.value());
                    })}
                />
            </div>
            <RippleButton class="btn-primary" button_type="submit" disabled={*sending}>
                <i class="fas fa-paper-plane"></i>
                { if *sending { " Sending..." } else { " Send Message" } }
            </RippleButton>
        </form>
    }
}
