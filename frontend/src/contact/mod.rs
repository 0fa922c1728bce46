pub mod controller;
pub mod form;
pub mod relay;

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use log::debug;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::Toast;
use crate::config;
use controller::{ContactController, SubmissionState, SubmitRejected};
use form::{Field, ServiceType};
use relay::{EmailJsRelay, EmailRelay, RelayError};

pub enum ContactMsg {
    Update(Field, String),
    Submit,
    Finished(Result<(), RelayError>),
    CloseNotification,
}

/// Future that resolves into the message reporting a relay call.
pub type PendingSend = Pin<Box<dyn Future<Output = ContactMsg>>>;

pub struct Contact {
    controller: ContactController,
    relay: Rc<dyn EmailRelay>,
}

impl Contact {
    pub fn with_relay(relay: Rc<dyn EmailRelay>) -> Self {
        Self {
            controller: ContactController::new(),
            relay,
        }
    }

    /// Applies one message to the controller. Returns whether to re-render
    /// and, for an accepted submit, the single relay call to run.
    fn apply(&mut self, msg: ContactMsg) -> (bool, Option<PendingSend>) {
        match msg {
            ContactMsg::Update(field, value) => {
                self.controller.update_field(field, value);
                (true, None)
            }
            ContactMsg::Submit => match self.controller.begin_submit() {
                Ok(params) => {
                    let relay = self.relay.clone();
                    let pending: PendingSend = Box::pin(async move {
                        ContactMsg::Finished(relay.send(&params).await)
                    });
                    (true, Some(pending))
                }
                Err(SubmitRejected::Incomplete) => {
                    debug!("Ignoring submit of an incomplete form");
                    (false, None)
                }
                Err(SubmitRejected::AlreadySubmitting) => (false, None),
            },
            ContactMsg::Finished(result) => {
                self.controller.finish(result);
                (true, None)
            }
            ContactMsg::CloseNotification => {
                self.controller.close_notification();
                (true, None)
            }
        }
    }
}

impl Component for Contact {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::with_relay(Rc::new(EmailJsRelay::new(config::email_relay())))
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let (render, pending) = self.apply(msg);
        if let Some(pending) = pending {
            ctx.link().send_future(pending);
        }
        render
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let form = self.controller.form();
        let submitting = self.controller.state() == SubmissionState::Submitting;

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let on_name = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactMsg::Update(Field::Name, input.value())
        });
        let on_email = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactMsg::Update(Field::Email, input.value())
        });
        let on_service = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            ContactMsg::Update(Field::Service, select.value())
        });
        let on_message = link.callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::Update(Field::Message, area.value())
        });

        html! {
            <section class="contact-section">
                <style>
                    {r#"
                    .contact-section {
                        min-height: 100vh;
                        background: #0A0A0A;
                        position: relative;
                        overflow: hidden;
                        padding: 8rem 0;
                    }
                    .contact-container {
                        max-width: 1400px;
                        margin: 0 auto;
                        padding: 0 2rem;
                        position: relative;
                        z-index: 2;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: start;
                    }
                    .contact-form {
                        background: #1E1E1E;
                        padding: 3rem;
                        border-radius: 20px;
                        box-shadow: 0 8px 30px rgba(0, 0, 0, 0.5);
                        animation: slideInLeft 0.8s ease-out both;
                    }
                    .form-input {
                        margin-bottom: 2rem;
                    }
                    .form-input label {
                        display: block;
                        margin-bottom: 0.5rem;
                        color: #FFFFFF;
                        font-size: 0.9rem;
                    }
                    .form-input input,
                    .form-input select,
                    .form-input textarea {
                        width: 100%;
                        padding: 1rem;
                        background: #0A0A0A;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 8px;
                        color: #FFFFFF;
                        font-size: 1rem;
                        transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
                        box-sizing: border-box;
                    }
                    .form-input select {
                        cursor: pointer;
                        appearance: none;
                    }
                    .form-input textarea {
                        min-height: 150px;
                        resize: vertical;
                    }
                    .form-input input:focus,
                    .form-input select:focus,
                    .form-input textarea:focus {
                        outline: none;
                        border-color: #00B894;
                        background: rgba(0, 0, 0, 0.2);
                    }
                    .submit-button {
                        width: 100%;
                        padding: 1rem;
                        background: linear-gradient(135deg, #00B894 0%, #00A3B8 100%);
                        border: none;
                        border-radius: 10px;
                        color: white;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }
                    .submit-button:hover:not(:disabled) {
                        transform: scale(1.02);
                    }
                    .submit-button:disabled {
                        opacity: 0.7;
                        cursor: not-allowed;
                    }
                    .contact-info {
                        color: #FFFFFF;
                        animation: slideInRight 0.8s ease-out both;
                    }
                    .info-group {
                        margin-bottom: 3rem;
                    }
                    .info-group h3 {
                        font-size: 1.2rem;
                        margin-bottom: 1rem;
                        color: #00B894;
                    }
                    .info-group p, .info-group a {
                        font-size: 1.1rem;
                        line-height: 1.6;
                        color: #A0A0A0;
                        text-decoration: none;
                    }
                    .info-group a:hover {
                        color: #00B894;
                    }
                    @keyframes slideInLeft {
                        from { opacity: 0; transform: translateX(-50px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    @keyframes slideInRight {
                        from { opacity: 0; transform: translateX(50px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    @media (max-width: 968px) {
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    "#}
                </style>
                <div class="floating-gradient" style="top: 10%; left: 5%;"></div>
                <div class="floating-gradient reverse" style="bottom: 10%; right: 5%;"></div>
                <div class="contact-container">
                    <div class="section-header">
                        <h2>{"Get in Touch"}</h2>
                        <p>{"Have a project in mind? Let's create something amazing together."}</p>
                    </div>
                    <div class="contact-grid">
                        <form class="contact-form" {onsubmit}>
                            <div class="form-input">
                                <label for="contact-name">{"Name"}</label>
                                <input
                                    id="contact-name"
                                    type="text"
                                    name="name"
                                    placeholder="Your name"
                                    value={form.get(Field::Name).to_string()}
                                    oninput={on_name}
                                    required={true}
                                />
                            </div>
                            <div class="form-input">
                                <label for="contact-email">{"Email"}</label>
                                <input
                                    id="contact-email"
                                    type="email"
                                    name="email"
                                    placeholder="your@email.com"
                                    value={form.get(Field::Email).to_string()}
                                    oninput={on_email}
                                    required={true}
                                />
                            </div>
                            <div class="form-input">
                                <label for="contact-service">{"Service Needed"}</label>
                                <select
                                    id="contact-service"
                                    name="service"
                                    onchange={on_service}
                                    required={true}
                                >
                                    <option value="" selected={form.service.is_empty()}>{"Select a service"}</option>
                                    { for ServiceType::ALL.iter().map(|service| html! {
                                        <option
                                            value={service.value()}
                                            selected={form.service == service.value()}
                                        >
                                            {service.label()}
                                        </option>
                                    }) }
                                </select>
                            </div>
                            <div class="form-input">
                                <label for="contact-message">{"Message"}</label>
                                <textarea
                                    id="contact-message"
                                    name="message"
                                    placeholder="Tell us about your project"
                                    value={form.get(Field::Message).to_string()}
                                    oninput={on_message}
                                    required={true}
                                />
                            </div>
                            <button type="submit" class="submit-button" disabled={submitting}>
                                { if submitting { "Sending..." } else { "Send Message" } }
                            </button>
                        </form>

                        <div class="contact-info">
                            <div class="info-group">
                                <h3>{"Email"}</h3>
                                <p>
                                    <a href={format!("mailto:{}", config::studio_email())}>
                                        {config::studio_email()}
                                    </a>
                                </p>
                            </div>
                            <div class="info-group">
                                <h3>{"Availability"}</h3>
                                <p>{"Custom Project-Based Scheduling"}</p>
                            </div>
                        </div>
                    </div>
                </div>
                <Toast
                    notification={self.controller.notification().cloned()}
                    on_close={link.callback(|_: ()| ContactMsg::CloseNotification)}
                />
            </section>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use super::controller::NotificationKind;
    use super::form::{FormData, TemplateParams};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    struct CountingRelay {
        calls: Cell<usize>,
        result: Result<(), RelayError>,
    }

    #[async_trait(?Send)]
    impl EmailRelay for CountingRelay {
        async fn send(&self, _params: &TemplateParams) -> Result<(), RelayError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    fn contact_with(result: Result<(), RelayError>) -> (Contact, Rc<CountingRelay>) {
        let relay = Rc::new(CountingRelay {
            calls: Cell::new(0),
            result,
        });
        let mut contact = Contact::with_relay(relay.clone());
        for (field, value) in [
            (Field::Name, "Jane Doe"),
            (Field::Email, "jane@x.com"),
            (Field::Service, "web-development"),
            (Field::Message, "Need a site"),
        ] {
            let (render, pending) = contact.apply(ContactMsg::Update(field, value.to_string()));
            assert!(render);
            assert!(pending.is_none());
        }
        (contact, relay)
    }

    #[test]
    fn submit_runs_one_send_and_reports_back() {
        let (mut contact, relay) = contact_with(Ok(()));

        let (render, pending) = contact.apply(ContactMsg::Submit);
        assert!(render);
        assert!(contact.controller.is_submitting());

        let (render, again) = contact.apply(ContactMsg::Submit);
        assert!(!render);
        assert!(again.is_none());

        let finished = tokio_test::block_on(pending.expect("submit should start a send"));
        contact.apply(finished);

        assert_eq!(relay.calls.get(), 1);
        assert!(!contact.controller.is_submitting());
        assert_eq!(contact.controller.form(), &FormData::default());
        assert_eq!(
            contact.controller.notification().map(|n| n.kind),
            Some(NotificationKind::Success)
        );
    }

    #[test]
    fn failed_send_keeps_what_was_typed() {
        let (mut contact, relay) = contact_with(Err(RelayError::Network("offline".to_string())));
        let before = contact.controller.form().clone();

        let (_, pending) = contact.apply(ContactMsg::Submit);
        let finished = tokio_test::block_on(pending.expect("submit should start a send"));
        contact.apply(finished);

        assert_eq!(relay.calls.get(), 1);
        assert_eq!(contact.controller.form(), &before);
        assert_eq!(
            contact.controller.notification().map(|n| n.kind),
            Some(NotificationKind::Failure)
        );

        contact.apply(ContactMsg::CloseNotification);
        assert_eq!(contact.controller.notification().map(|n| n.visible), Some(false));
        assert_eq!(contact.controller.form(), &before);
    }

    #[test]
    fn incomplete_submit_starts_nothing() {
        let (mut contact, relay) = contact_with(Ok(()));
        contact.apply(ContactMsg::Update(Field::Name, String::new()));

        let (render, pending) = contact.apply(ContactMsg::Submit);

        assert!(!render);
        assert!(pending.is_none());
        assert_eq!(relay.calls.get(), 0);
    }
}
