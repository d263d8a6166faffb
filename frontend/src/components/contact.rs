use crate::core::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::core::validation::{
    contact_field, field_status, is_form_valid, validate_form, FieldStatus, CONTACT_FIELDS,
};
use crate::dom::analytics::BrowserAnalytics;
use crate::dom::notification::notify;
use crate::dom::widgets;
use crate::utils::api::Api;
use serde::Serialize;
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const SUCCESS_MODAL_ID: &str = "successModal";
const SERVICE_OPTIONS: [&str; 4] = [
    "Portfolio Management",
    "Retirement Planning",
    "Tax Optimisation",
    "Other",
];

#[derive(Serialize)]
struct ContactSubmission {
    name: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    service: String,
    message: String,
}

impl ContactSubmission {
    fn from_values(values: &BTreeMap<&'static str, String>) -> Self {
        let get = |name: &str| values.get(name).map(|v| v.trim().to_string()).unwrap_or_default();
        let phone = get("phone");
        Self {
            name: get("name"),
            email: get("email"),
            phone: (!phone.is_empty()).then_some(phone),
            service: get("service"),
            message: get("message"),
        }
    }
}

#[derive(Clone, Default, PartialEq)]
struct FormState {
    values: BTreeMap<&'static str, String>,
    statuses: BTreeMap<&'static str, FieldStatus>,
    was_validated: bool,
}

impl FormState {
    fn value(&self, name: &str) -> String {
        self.values.get(name).cloned().unwrap_or_default()
    }

    fn status(&self, name: &str) -> FieldStatus {
        self.statuses.get(name).copied().unwrap_or_default()
    }
}

fn target_value(e: &Event) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_state(FormState::default);
    let submitting = use_state(|| false);

    // typing clears the field's validation state
    let on_input = {
        let form = form.clone();
        move |name: &'static str| {
            let form = form.clone();
            Callback::from(move |e: Event| {
                let mut next = (*form).clone();
                next.values.insert(name, target_value(&e));
                next.statuses.insert(name, FieldStatus::Pristine);
                form.set(next);
            })
        }
    };

    let on_blur = {
        let form = form.clone();
        move |name: &'static str| {
            let form = form.clone();
            Callback::from(move |e: FocusEvent| {
                let Some(spec) = contact_field(name) else {
                    return;
                };
                let mut next = (*form).clone();
                let value = target_value(&e);
                next.statuses.insert(name, field_status(spec, &value));
                next.values.insert(name, value);
                form.set(next);
            })
        }
    };

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let values: Vec<String> = CONTACT_FIELDS.iter().map(|spec| form.value(spec.name)).collect();
            let statuses = validate_form(CONTACT_FIELDS.iter().zip(values.iter().map(String::as_str)));
            if !is_form_valid(&statuses) {
                let mut next = (*form).clone();
                next.statuses = statuses;
                next.was_validated = true;
                form.set(next);
                return;
            }

            let submission = ContactSubmission::from_values(&form.values);
            let form = form.clone();
            let submitting = submitting.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match Api::post("/api/contact").json(&submission) {
                    Ok(request) => request.send().await.map(|_| ()),
                    Err(e) => Err(e),
                };
                match result {
                    Ok(()) => {
                        if let Err(e) = widgets::show_modal(SUCCESS_MODAL_ID) {
                            log::warn!("success modal unavailable: {e}");
                            notify("Thank you! We'll be in touch within 24 hours.", "success");
                        }
                        form.set(FormState::default());
                        BrowserAnalytics::new().track(&AnalyticsEvent::contact_submitted());
                    }
                    Err(e) => {
                        log::error!("contact form submission failed: {e}");
                        notify("Sorry, your message could not be sent. Please try again.", "danger");
                    }
                }
                submitting.set(false);
            });
        })
    };

    let field_class = |base: &'static str, name: &str| {
        classes!(base, form.status(name).css_class())
    };
    let feedback = |name: &str| match form.status(name).error() {
        Some(error) => html! { <div class="invalid-feedback">{ error.to_string() }</div> },
        None => html! {},
    };

    html! {
        <section id="contact" class="py-5">
            <div class="container">
                <div class="text-center mb-5">
                    <h2 class="section-title">{"Get In Touch"}</h2>
                    <p class="section-subtitle">{"Tell us about your goals and we'll set up a free consultation."}</p>
                </div>
                <form
                    id="contactForm"
                    class={classes!("contact-form", form.was_validated.then_some("was-validated"))}
                    novalidate=true
                    {onsubmit}
                >
                    <div class="row g-3">
                        <div class="col-md-6">
                            <label for="name" class="form-label">{"Full name"}</label>
                            <input id="name" name="name" type="text" required=true
                                class={field_class("form-control", "name")}
                                value={form.value("name")}
                                oninput={on_input("name").reform(|e: InputEvent| e.into())}
                                onblur={on_blur("name")} />
                            { feedback("name") }
                        </div>
                        <div class="col-md-6">
                            <label for="email" class="form-label">{"Email"}</label>
                            <input id="email" name="email" type="email" required=true
                                class={field_class("form-control", "email")}
                                value={form.value("email")}
                                oninput={on_input("email").reform(|e: InputEvent| e.into())}
                                onblur={on_blur("email")} />
                            { feedback("email") }
                        </div>
                        <div class="col-md-6">
                            <label for="phone" class="form-label">{"Phone (optional)"}</label>
                            <input id="phone" name="phone" type="tel"
                                class={field_class("form-control", "phone")}
                                value={form.value("phone")}
                                oninput={on_input("phone").reform(|e: InputEvent| e.into())}
                                onblur={on_blur("phone")} />
                            { feedback("phone") }
                        </div>
                        <div class="col-md-6">
                            <label for="service" class="form-label">{"Service"}</label>
                            <select id="service" name="service" required=true
                                class={field_class("form-select", "service")}
                                onchange={on_input("service")}
                                onblur={on_blur("service")}>
                                <option value="" selected={form.value("service").is_empty()}>{"Choose..."}</option>
                                { for SERVICE_OPTIONS.iter().map(|option| html! {
                                    <option value={*option} selected={form.value("service") == *option}>{ *option }</option>
                                }) }
                            </select>
                            { feedback("service") }
                        </div>
                        <div class="col-12">
                            <label for="message" class="form-label">{"Message"}</label>
                            <textarea id="message" name="message" rows="5" required=true
                                class={field_class("form-control", "message")}
                                value={form.value("message")}
                                oninput={on_input("message").reform(|e: InputEvent| e.into())}
                                onblur={on_blur("message")} />
                            { feedback("message") }
                        </div>
                        <div class="col-12 text-center">
                            <button type="submit" class="btn btn-warning btn-lg" disabled={*submitting}>
                                if *submitting {
                                    <>
                                        <span class="spinner-border spinner-border-sm me-2" role="status"></span>
                                        {"Sending..."}
                                    </>
                                } else {
                                    {"Send Message"}
                                }
                            </button>
                        </div>
                    </div>
                </form>
            </div>
            <SuccessModal />
        </section>
    }
}

#[function_component(SuccessModal)]
fn success_modal() -> Html {
    html! {
        <div class="modal fade" id={SUCCESS_MODAL_ID} tabindex="-1" aria-hidden="true">
            <div class="modal-dialog modal-dialog-centered">
                <div class="modal-content text-center p-4">
                    <div class="modal-body">
                        <i class="fas fa-check-circle fa-3x text-success mb-3"></i>
                        <h4>{"Message sent!"}</h4>
                        <p>{"Thank you for reaching out. An advisor will contact you within 24 hours."}</p>
                        <button type="button" class="btn btn-warning" data-bs-dismiss="modal">{"Close"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
