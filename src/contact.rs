//! Contact form state machine and submission.

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SUBMITTED_RESET_DELAY;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn to_json(&self) -> Result<String, SubmitError> {
        serde_json::to_string(self).map_err(|e| SubmitError::Encode(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// The `name`/`id` attribute of the matching input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("relay answered with status {0}")]
    Status(u16),
    #[error("couldn't encode form: {0}")]
    Encode(String),
}

impl SubmitError {
    /// Text shown to the visitor in the alert dialog.
    pub fn alert_message(&self) -> &'static str {
        match self {
            SubmitError::Status(_) => "There was a problem submitting your form. Please try again.",
            SubmitError::Transport(_) | SubmitError::Encode(_) => {
                "An unexpected error occurred. Please try again."
            }
        }
    }
}

/// Result of finishing a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Sent,
    Failed(SubmitError),
    /// Nothing was in flight.
    Ignored,
}

impl Completion {
    /// When to take the success panel down again, if one went up.
    pub fn reset_after(&self) -> Option<Duration> {
        match self {
            Completion::Sent => Some(SUBMITTED_RESET_DELAY),
            Completion::Failed(_) | Completion::Ignored => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFlow {
    form: ContactForm,
    status: SubmissionStatus,
}

impl ContactFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.status == SubmissionStatus::Submitted
    }

    /// Fields stay editable while a submission is in flight.
    pub fn edit(&mut self, field: Field, value: String) {
        self.form.set(field, value);
    }

    /// Moves to `Submitting` and hands back the payload to send.
    ///
    /// Returns `None` when a submission is already in flight or the success
    /// panel is showing, so a double submit only ever yields one request.
    pub fn begin(&mut self) -> Option<ContactForm> {
        match self.status {
            SubmissionStatus::Idle => {
                self.status = SubmissionStatus::Submitting;
                Some(self.form.clone())
            }
            SubmissionStatus::Submitting | SubmissionStatus::Submitted => None,
        }
    }

    pub fn complete(&mut self, result: Result<(), SubmitError>) -> Completion {
        if self.status != SubmissionStatus::Submitting {
            return Completion::Ignored;
        }
        match result {
            Ok(()) => {
                self.form = ContactForm::default();
                self.status = SubmissionStatus::Submitted;
                Completion::Sent
            }
            Err(e) => {
                self.status = SubmissionStatus::Idle;
                Completion::Failed(e)
            }
        }
    }

    /// Timer callback that takes the success panel down.
    pub fn expire(&mut self) {
        if self.status == SubmissionStatus::Submitted {
            self.status = SubmissionStatus::Idle;
        }
    }
}

/// Finishes the in-flight submission of a mounted form.
///
/// `None` when the form was torn down while the request was out; the result
/// is then dropped without touching any state.
pub fn settle(flow: RwSignal<ContactFlow>, result: Result<(), SubmitError>) -> Option<Completion> {
    flow.try_update(|f| f.complete(result))
}

/// Timer callback for the success panel, `None` once the form is gone.
pub fn expire(flow: RwSignal<ContactFlow>) -> Option<()> {
    flow.try_update(ContactFlow::expire)
}

/// Something that can deliver a form to the relay and report the HTTP status.
pub trait FormRelay {
    fn post(&self, form: &ContactForm) -> impl Future<Output = Result<u16, SubmitError>>;
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Sends `form` exactly once. Only the status code is inspected.
pub async fn submit<R: FormRelay>(relay: &R, form: &ContactForm) -> Result<(), SubmitError> {
    let status = relay.post(form).await?;
    if is_success(status) {
        Ok(())
    } else {
        Err(SubmitError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct MockRelay {
        answer: Result<u16, SubmitError>,
        calls: Cell<usize>,
        last: RefCell<Option<ContactForm>>,
    }

    impl MockRelay {
        fn new(answer: Result<u16, SubmitError>) -> Self {
            Self {
                answer,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }
    }

    impl FormRelay for MockRelay {
        async fn post(&self, form: &ContactForm) -> Result<u16, SubmitError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(form.clone());
            self.answer.clone()
        }
    }

    fn filled() -> ContactFlow {
        let mut flow = ContactFlow::new();
        flow.edit(Field::Name, "Ama".to_string());
        flow.edit(Field::Email, "ama@example.com".to_string());
        flow.edit(Field::Subject, "Project".to_string());
        flow.edit(Field::Message, "Let's talk".to_string());
        flow
    }

    #[test]
    fn test_form_serializes_four_fields() {
        let form = filled().form().clone();
        let json: serde_json::Value = serde_json::from_str(&form.to_json().unwrap()).unwrap();
        assert_eq!(json["name"], "Ama");
        assert_eq!(json["email"], "ama@example.com");
        assert_eq!(json["subject"], "Project");
        assert_eq!(json["message"], "Let's talk");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_successful_submission_clears_and_reverts() {
        let relay = MockRelay::new(Ok(200));
        let mut flow = filled();

        let payload = flow.begin().expect("idle flow should start");
        assert!(flow.is_submitting());
        let result = submit(&relay, &payload).await;
        assert_eq!(flow.complete(result), Completion::Sent);

        assert!(flow.is_submitted());
        assert_eq!(flow.form(), &ContactForm::default());
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(relay.last.borrow().as_ref().unwrap().name, "Ama");

        flow.expire();
        assert_eq!(flow.status, SubmissionStatus::Idle);
        assert_eq!(flow.form(), &ContactForm::default());
    }

    #[tokio::test]
    async fn test_rejected_submission_keeps_fields() {
        let relay = MockRelay::new(Ok(422));
        let mut flow = filled();
        let before = flow.form().clone();

        let payload = flow.begin().unwrap();
        let result = submit(&relay, &payload).await;
        let completion = flow.complete(result);

        assert_eq!(completion, Completion::Failed(SubmitError::Status(422)));
        assert_eq!(flow.status, SubmissionStatus::Idle);
        assert_eq!(flow.form(), &before);
        // submit is enabled again
        assert!(flow.begin().is_some());
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_fields() {
        let relay = MockRelay::new(Err(SubmitError::Transport("offline".to_string())));
        let mut flow = filled();

        let payload = flow.begin().unwrap();
        let completion = flow.complete(submit(&relay, &payload).await);

        match completion {
            Completion::Failed(e) => {
                assert_eq!(e.alert_message(), "An unexpected error occurred. Please try again.")
            }
            other => panic!("unexpected completion {other:?}"),
        }
        assert_eq!(flow.form().name, "Ama");
    }

    #[tokio::test]
    async fn test_double_submit_sends_once() {
        let relay = MockRelay::new(Ok(201));
        let mut flow = filled();

        let first = flow.begin();
        let second = flow.begin();
        assert!(first.is_some());
        assert!(second.is_none());

        for payload in [first, second].into_iter().flatten() {
            let result = submit(&relay, &payload).await;
            flow.complete(result);
        }
        assert_eq!(relay.calls.get(), 1);
    }

    #[test]
    fn test_edits_allowed_while_submitting() {
        let mut flow = filled();
        flow.begin();
        flow.edit(Field::Message, "changed".to_string());
        assert_eq!(flow.form().message, "changed");
    }

    #[test]
    fn test_stray_completion_is_ignored() {
        let mut flow = filled();
        assert_eq!(flow.complete(Ok(())), Completion::Ignored);
        assert_eq!(flow.form().name, "Ama");

        flow.begin();
        flow.complete(Ok(()));
        assert_eq!(flow.complete(Err(SubmitError::Status(500))), Completion::Ignored);
        assert!(flow.is_submitted());
        assert!(flow.begin().is_none());
    }

    #[test]
    fn test_only_success_schedules_reset() {
        assert_eq!(Completion::Sent.reset_after(), Some(Duration::from_secs(5)));
        assert_eq!(Completion::Failed(SubmitError::Status(500)).reset_after(), None);
        assert_eq!(Completion::Ignored.reset_after(), None);
    }

    #[test]
    fn test_settle_and_expire_on_mounted_form() {
        let owner = Owner::new();
        owner.set();
        let flow = RwSignal::new(filled());
        flow.update(|f| {
            f.begin();
        });

        assert_eq!(settle(flow, Ok(())), Some(Completion::Sent));
        assert!(flow.with_untracked(|f| f.is_submitted()));
        assert_eq!(expire(flow), Some(()));
        assert_eq!(flow.with_untracked(|f| f.status), SubmissionStatus::Idle);
    }

    #[test]
    fn test_settle_after_teardown_is_ignored() {
        let owner = Owner::new();
        owner.set();
        let flow = RwSignal::new(filled());
        flow.update(|f| {
            f.begin();
        });

        // the section unmounts while the request is out
        owner.cleanup();
        assert_eq!(settle(flow, Ok(())), None);
        assert_eq!(settle(flow, Err(SubmitError::Status(500))), None);
        assert_eq!(expire(flow), None);
    }

    #[test]
    fn test_status_range() {
        assert!(is_success(200));
        assert!(is_success(299));
        assert!(!is_success(199));
        assert!(!is_success(300));
        assert!(!is_success(404));
    }

    #[test]
    fn test_alert_messages() {
        assert_eq!(
            SubmitError::Status(500).alert_message(),
            "There was a problem submitting your form. Please try again."
        );
        assert_eq!(
            SubmitError::Encode("x".to_string()).alert_message(),
            "An unexpected error occurred. Please try again."
        );
    }
}
