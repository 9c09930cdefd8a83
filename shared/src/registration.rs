use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::{validate, Field, RegistrationData, RegistrationValidation};

/// The only status code counted as a successful submission.
pub const SUCCESS_STATUS: u16 = 200;
/// How long the success banner stays up unless dismissed.
pub const SUCCESS_DISPLAY_MS: u32 = 5_000;

/// The request could not complete.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TransportError(String);

impl TransportError {
    #[must_use]
    pub const fn new(reason: String) -> Self {
        Self(reason)
    }
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "transport error: {}", self.0)
    }
}
impl Error for TransportError {}

/// One-shot notification raised by a failed submission.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SubmitFailure {
    Rejected { status: u16 },
    Transport(TransportError),
}

impl Display for SubmitFailure {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Rejected { .. } => write!(f, "Form submission failed. Please try again."),
            Self::Transport(_) => write!(f, "An error occurred while submitting the form."),
        }
    }
}
impl Error for SubmitFailure {}

/// Identifies one showing of the success banner.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SuccessTicket(u64);

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SubmitOutcome {
    /// Banner is shown; call [`RegistrationForm::success_window_elapsed`]
    /// with `ticket` once `dismiss_after_ms` passed.
    Succeeded {
        ticket: SuccessTicket,
        dismiss_after_ms: u32,
    },
    Failed(SubmitFailure),
    /// No submission was in flight.
    Ignored,
}

/// State of the registration form and its submission lifecycle.
///
/// Errors are recomputed from scratch after every mutation, so
/// [`RegistrationForm::errors`] always matches the current data and phone
/// toggle.
#[derive(Debug)]
pub struct RegistrationForm {
    data: RegistrationData,
    errors: RegistrationValidation,
    show_phone: bool,
    show_password: bool,
    submitting: bool,
    success: Option<SuccessTicket>,
    next_ticket: u64,
    last_failure: Option<SubmitFailure>,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    #[must_use]
    pub fn new() -> Self {
        let data = RegistrationData::default();
        let show_phone = true;

        Self {
            errors: validate(&data, show_phone),
            data,
            show_phone,
            show_password: false,
            submitting: false,
            success: None,
            next_ticket: 0,
            last_failure: None,
        }
    }

    #[must_use]
    pub const fn data(&self) -> &RegistrationData {
        &self.data
    }

    #[must_use]
    pub const fn errors(&self) -> &RegistrationValidation {
        &self.errors
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.errors.is_valid()
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub const fn can_submit(&self) -> bool {
        self.is_valid() && !self.submitting
    }

    #[must_use]
    pub const fn show_phone(&self) -> bool {
        self.show_phone
    }

    #[must_use]
    pub const fn show_password(&self) -> bool {
        self.show_password
    }

    #[must_use]
    pub const fn show_success(&self) -> bool {
        self.success.is_some()
    }

    #[must_use]
    pub const fn last_failure(&self) -> Option<&SubmitFailure> {
        self.last_failure.as_ref()
    }

    pub fn set(&mut self, field: Field, value: String) {
        self.data.set(field, value);
        self.revalidate();
    }

    pub fn toggle_phone(&mut self) {
        self.show_phone = !self.show_phone;
        self.revalidate();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Marks the form busy and returns the payload to send, or `None` if the
    /// form is invalid or a submission is already running.
    pub fn begin_submit(&mut self) -> Option<RegistrationData> {
        if !self.can_submit() {
            return None;
        }

        self.submitting = true;
        self.last_failure = None;

        Some(self.data.clone())
    }

    /// Applies the result of the request started by [`Self::begin_submit`].
    /// `Ok` carries the HTTP status code.
    pub fn finish_submit(&mut self, result: Result<u16, TransportError>) -> SubmitOutcome {
        if !self.submitting {
            return SubmitOutcome::Ignored;
        }

        self.submitting = false;

        match result {
            Ok(SUCCESS_STATUS) => {
                let ticket = SuccessTicket(self.next_ticket);
                self.next_ticket = self.next_ticket.wrapping_add(1);
                self.success = Some(ticket);

                SubmitOutcome::Succeeded {
                    ticket,
                    dismiss_after_ms: SUCCESS_DISPLAY_MS,
                }
            }
            Ok(status) => self.fail(SubmitFailure::Rejected { status }),
            Err(e) => self.fail(SubmitFailure::Transport(e)),
        }
    }

    /// Returns `true` if a banner was hidden.
    pub fn dismiss_success(&mut self) -> bool {
        self.success.take().is_some()
    }

    /// Timer callback for the banner shown with `ticket`. Stale tickets are
    /// ignored.
    pub fn success_window_elapsed(&mut self, ticket: SuccessTicket) -> bool {
        if self.success == Some(ticket) {
            self.success = None;
            true
        } else {
            false
        }
    }

    fn fail(&mut self, failure: SubmitFailure) -> SubmitOutcome {
        self.last_failure = Some(failure.clone());
        SubmitOutcome::Failed(failure)
    }

    fn revalidate(&mut self) {
        self.errors.check(&self.data, self.show_phone);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::PhoneError;
    use pretty_assertions::assert_eq;

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.set(Field::Name, String::from("Jane Doe"));
        form.set(Field::Email, String::from("jane@example.com"));
        form.set(Field::Password, String::from("Secret12!"));
        form.set(Field::Lang, String::from("de"));
        form.set(Field::About, "x".repeat(80));
        form
    }

    #[test]
    fn test_new_form() {
        let form = RegistrationForm::new();

        assert!(form.show_phone());
        assert!(!form.show_password());
        assert!(!form.is_busy());
        assert!(!form.show_success());
        assert!(!form.is_valid());
        assert!(!form.can_submit());
        assert!(form.errors().name.is_some());
    }

    #[test]
    fn test_errors_follow_every_change() {
        let mut form = filled_form();
        assert!(form.is_valid());

        form.set(Field::Phone, String::from("12345"));
        assert_eq!(form.errors().phone, Some(PhoneError::DigitCount(10)));
        assert!(!form.can_submit());

        form.toggle_phone();
        assert!(!form.show_phone());
        assert_eq!(form.errors().phone, None);
        assert!(form.can_submit());

        form.toggle_phone();
        assert_eq!(form.errors().phone, Some(PhoneError::DigitCount(10)));

        form.set(Field::Phone, String::from("1234567890"));
        assert!(form.is_valid());
    }

    #[test]
    fn test_password_visibility_does_not_touch_errors() {
        let mut form = filled_form();
        let errors = form.errors().clone();

        form.toggle_password_visibility();

        assert!(form.show_password());
        assert_eq!(form.errors(), &errors);
    }

    #[test]
    fn test_submit_blocked_when_invalid() {
        let mut form = RegistrationForm::new();
        form.set(Field::Name, String::from("Jane"));

        assert_eq!(form.begin_submit(), None);
        assert!(!form.is_busy());
        assert_eq!(form.data().name, "Jane");
    }

    #[test]
    fn test_submit_blocked_while_busy() {
        let mut form = filled_form();

        assert!(form.begin_submit().is_some());
        assert!(form.is_busy());
        assert!(!form.can_submit());

        assert_eq!(form.begin_submit(), None);
        assert!(form.is_busy());
    }

    #[test]
    fn test_payload_includes_hidden_phone() {
        let mut form = filled_form();
        form.set(Field::Phone, String::from("12"));
        form.toggle_phone();

        let payload = form.begin_submit().unwrap();

        assert_eq!(payload.phone, "12");
        assert_eq!(&payload, form.data());
    }

    #[test]
    fn test_success_then_window_elapses() {
        let mut form = filled_form();
        form.begin_submit().unwrap();

        let outcome = form.finish_submit(Ok(200));

        let SubmitOutcome::Succeeded {
            ticket,
            dismiss_after_ms,
        } = outcome
        else {
            panic!("unexpected outcome");
        };
        assert_eq!(dismiss_after_ms, 5_000);
        assert!(form.show_success());
        assert!(!form.is_busy());
        assert_eq!(form.last_failure(), None);

        assert!(form.success_window_elapsed(ticket));
        assert!(!form.show_success());
    }

    #[test]
    fn test_manual_dismiss_and_stale_timer() {
        let mut form = filled_form();

        form.begin_submit().unwrap();
        let SubmitOutcome::Succeeded { ticket: first, .. } = form.finish_submit(Ok(200)) else {
            panic!("first submit failed");
        };
        assert!(form.dismiss_success());
        assert!(!form.dismiss_success());

        form.begin_submit().unwrap();
        let SubmitOutcome::Succeeded { ticket: second, .. } = form.finish_submit(Ok(200)) else {
            panic!("second submit failed");
        };

        assert!(!form.success_window_elapsed(first));
        assert!(form.show_success());
        assert!(form.success_window_elapsed(second));
        assert!(!form.show_success());
    }

    #[test]
    fn test_rejected_submission() {
        let mut form = filled_form();
        let before = form.data().clone();
        form.begin_submit().unwrap();

        let outcome = form.finish_submit(Ok(400));

        let failure = SubmitFailure::Rejected { status: 400 };
        assert_eq!(outcome, SubmitOutcome::Failed(failure.clone()));
        assert_eq!(form.last_failure(), Some(&failure));
        assert_eq!(
            failure.to_string(),
            "Form submission failed. Please try again."
        );
        assert!(!form.is_busy());
        assert!(!form.show_success());
        assert_eq!(form.data(), &before);
        assert!(form.can_submit());
    }

    #[test]
    fn test_other_2xx_is_rejected() {
        let mut form = filled_form();
        form.begin_submit().unwrap();

        assert_eq!(
            form.finish_submit(Ok(201)),
            SubmitOutcome::Failed(SubmitFailure::Rejected { status: 201 })
        );
        assert!(!form.show_success());
    }

    #[test]
    fn test_transport_failure() {
        let mut form = filled_form();
        let before = form.data().clone();
        form.begin_submit().unwrap();

        let outcome = form.finish_submit(Err(TransportError::new(String::from("offline"))));

        let SubmitOutcome::Failed(failure) = outcome else {
            panic!("unexpected outcome");
        };
        assert!(matches!(failure, SubmitFailure::Transport(_)));
        assert_eq!(
            failure.to_string(),
            "An error occurred while submitting the form."
        );
        assert!(form.last_failure().is_some());
        assert!(!form.is_busy());
        assert!(!form.show_success());
        assert_eq!(form.data(), &before);
    }

    #[test]
    fn test_failure_cleared_on_next_submit() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        let _ = form.finish_submit(Ok(500));
        assert!(form.last_failure().is_some());

        form.begin_submit().unwrap();
        assert_eq!(form.last_failure(), None);
    }

    #[test]
    fn test_finish_without_submit_is_ignored() {
        let mut form = filled_form();

        assert_eq!(form.finish_submit(Ok(200)), SubmitOutcome::Ignored);
        assert!(!form.show_success());
    }
}
