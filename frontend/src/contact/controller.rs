use log::{error, info};

use super::form::{Field, FormData, TemplateParams};
use super::relay::RelayError;

pub const SUCCESS_TEXT: &str = "Message sent successfully! We'll get back to you soon.";
pub const FAILURE_TEXT: &str = "Failed to send message. Please try emailing us directly.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
    pub visible: bool,
}

impl Notification {
    fn success() -> Self {
        Self {
            kind: NotificationKind::Success,
            text: SUCCESS_TEXT.to_string(),
            visible: true,
        }
    }

    fn failure() -> Self {
        Self {
            kind: NotificationKind::Failure,
            text: FAILURE_TEXT.to_string(),
            visible: true,
        }
    }
}

/// Why a submit was refused before anything went over the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    Incomplete,
    AlreadySubmitting,
}

/// State behind the contact form: field values, whether a send is in flight
/// and the last outcome shown to the visitor.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactController {
    form: FormData,
    state: SubmissionState,
    notification: Option<Notification>,
}

impl Default for ContactController {
    fn default() -> Self {
        Self {
            form: FormData::default(),
            state: SubmissionState::Idle,
            notification: None,
        }
    }
}

impl ContactController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn update_field(&mut self, field: Field, value: String) {
        self.form.set(field, value);
    }

    /// Moves to `Submitting` and hands back the payload to send. The caller
    /// must issue exactly one relay call and report it through [`finish`].
    ///
    /// [`finish`]: ContactController::finish
    pub fn begin_submit(&mut self) -> Result<TemplateParams, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::AlreadySubmitting);
        }
        if !self.form.is_complete() {
            return Err(SubmitRejected::Incomplete);
        }
        self.state = SubmissionState::Submitting;
        Ok(self.form.template_params())
    }

    pub fn finish(&mut self, result: Result<(), RelayError>) {
        match result {
            Ok(()) => {
                info!("Contact message sent");
                self.notification = Some(Notification::success());
                self.form.clear();
            }
            Err(e) => {
                error!("Error: {}", e);
                self.notification = Some(Notification::failure());
            }
        }
        self.state = SubmissionState::Idle;
    }

    pub fn close_notification(&mut self) {
        if let Some(notification) = self.notification.as_mut() {
            notification.visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::relay::EmailRelay;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};

    /// Relay double that records every payload and answers with a fixed result.
    struct StubRelay {
        calls: Cell<usize>,
        sent: RefCell<Vec<TemplateParams>>,
        result: Result<(), RelayError>,
    }

    impl StubRelay {
        fn answering(result: Result<(), RelayError>) -> Self {
            Self {
                calls: Cell::new(0),
                sent: RefCell::new(Vec::new()),
                result,
            }
        }
    }

    #[async_trait(?Send)]
    impl EmailRelay for StubRelay {
        async fn send(&self, params: &TemplateParams) -> Result<(), RelayError> {
            self.calls.set(self.calls.get() + 1);
            self.sent.borrow_mut().push(params.clone());
            self.result.clone()
        }
    }

    fn jane() -> ContactController {
        let mut controller = ContactController::new();
        controller.update_field(Field::Name, "Jane Doe".to_string());
        controller.update_field(Field::Email, "jane@x.com".to_string());
        controller.update_field(Field::Service, "web-development".to_string());
        controller.update_field(Field::Message, "Need a site".to_string());
        controller
    }

    fn submit(controller: &mut ContactController, relay: &StubRelay) -> Result<(), SubmitRejected> {
        let params = controller.begin_submit()?;
        let result = tokio_test::block_on(relay.send(&params));
        controller.finish(result);
        Ok(())
    }

    #[test]
    fn success_clears_the_form_and_notifies() {
        let mut controller = jane();
        let relay = StubRelay::answering(Ok(()));

        submit(&mut controller, &relay).unwrap();

        assert_eq!(relay.calls.get(), 1);
        assert_eq!(relay.sent.borrow()[0].from_name, "Jane Doe");
        let notification = controller.notification().unwrap();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert!(notification.text.contains("sent successfully"));
        assert!(notification.visible);
        assert_eq!(controller.form(), &FormData::default());
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[test]
    fn failure_keeps_the_form_and_notifies() {
        let mut controller = jane();
        let before = controller.form().clone();
        let relay = StubRelay::answering(Err(RelayError::Network("offline".to_string())));

        submit(&mut controller, &relay).unwrap();

        assert_eq!(relay.calls.get(), 1);
        let notification = controller.notification().unwrap();
        assert_eq!(notification.kind, NotificationKind::Failure);
        assert!(notification.text.contains("Failed to send"));
        assert_eq!(controller.form(), &before);
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[test]
    fn provider_rejection_reads_like_any_other_failure() {
        let mut controller = jane();
        let relay = StubRelay::answering(Err(RelayError::Rejected {
            status: 412,
            body: "quota".to_string(),
        }));

        submit(&mut controller, &relay).unwrap();

        assert_eq!(controller.notification().unwrap().text, FAILURE_TEXT);
    }

    #[test]
    fn incomplete_form_never_reaches_the_relay() {
        let mut controller = jane();
        controller.update_field(Field::Message, String::new());
        let relay = StubRelay::answering(Ok(()));

        assert_eq!(submit(&mut controller, &relay), Err(SubmitRejected::Incomplete));
        assert_eq!(relay.calls.get(), 0);
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(controller.notification().is_none());
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut controller = jane();
        let relay = StubRelay::answering(Ok(()));

        let params = controller.begin_submit().unwrap();
        assert!(controller.is_submitting());
        assert_eq!(controller.begin_submit(), Err(SubmitRejected::AlreadySubmitting));

        let result = tokio_test::block_on(relay.send(&params));
        controller.finish(result);

        assert_eq!(relay.calls.get(), 1);
        assert!(!controller.is_submitting());
    }

    #[test]
    fn closing_hides_the_notice_only() {
        let mut controller = jane();
        let relay = StubRelay::answering(Err(RelayError::Network("offline".to_string())));
        submit(&mut controller, &relay).unwrap();
        let form = controller.form().clone();

        controller.close_notification();

        let notification = controller.notification().unwrap();
        assert!(!notification.visible);
        assert_eq!(notification.kind, NotificationKind::Failure);
        assert_eq!(controller.form(), &form);
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[test]
    fn next_outcome_replaces_the_previous_notice() {
        let mut controller = jane();
        submit(
            &mut controller,
            &StubRelay::answering(Err(RelayError::Network("offline".to_string()))),
        )
        .unwrap();
        controller.close_notification();

        submit(&mut controller, &StubRelay::answering(Ok(()))).unwrap();

        let notification = controller.notification().unwrap();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert!(notification.visible);
    }

    #[test]
    fn default_starts_idle_and_empty() {
        let controller = ContactController::default();
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.form(), &FormData::default());
        assert!(controller.notification().is_none());
        assert_eq!(controller, ContactController::new());
    }

    #[test]
    fn closing_without_a_notice_is_a_no_op() {
        let mut controller = ContactController::new();
        controller.close_notification();
        assert_eq!(controller, ContactController::new());
    }
}
