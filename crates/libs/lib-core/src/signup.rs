//! # Signup Form Validator
//!
//! Keeps the error indicator of the waitlist form in sync with the email input and
//! handles submission. Nothing is sent anywhere: a valid address only ends up in the
//! transient acknowledgment shown to the visitor.

use lib_utils::is_valid_email;

use crate::runtime::Scheduler;

pub const REQUIRED_MESSAGE: &str = "Email address is required";
pub const INVALID_MESSAGE: &str = "Please enter a valid email address";

/// Why a value was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    Required,
    InvalidAddress,
}

impl Rejection {
    pub fn message(self) -> &'static str {
        match self {
            Rejection::Required => REQUIRED_MESSAGE,
            Rejection::InvalidAddress => INVALID_MESSAGE,
        }
    }
}

/// Classify a raw input value. Surrounding whitespace is ignored.
pub fn check_email(raw: &str) -> Result<&str, Rejection> {
    let email = raw.trim();
    if email.is_empty() {
        Err(Rejection::Required)
    } else if !is_valid_email(email) {
        Err(Rejection::InvalidAddress)
    } else {
        Ok(email)
    }
}

/// Content of the success popup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgment {
    pub email: String,
}

impl Acknowledgment {
    pub const HEADING: &'static str = "🎉 Success!";
    pub const LEAD: &'static str = "You're on the waitlist! We'll notify you at ";
    pub const TAIL: &'static str = " when we launch.";

    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }

    /// Body text as the visitor reads it.
    pub fn body(&self) -> String {
        format!("{}{}{}", Self::LEAD, self.email, Self::TAIL)
    }
}

/// A shown acknowledgment that can be faded and taken down.
pub trait Toast {
    fn fade_out(&self);
    fn remove(&self);
}

/// The form as seen by the validator.
pub trait SignupView {
    type Toast: Toast + 'static;

    /// Current input value, `None` when the input is absent.
    fn email_value(&self) -> Option<String>;
    fn set_email_value(&self, value: &str);
    fn show_error(&self, message: &str);
    fn hide_error(&self);
    fn show_acknowledgment(&self, acknowledgment: &Acknowledgment) -> Option<Self::Toast>;
}

/// Lifetime of the acknowledgment popup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTimings {
    pub display_ms: u32,
    pub fade_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(Rejection),
    Accepted(Acknowledgment),
    /// The input element is absent; nothing to submit.
    Unavailable,
}

/// Validation error state of the form.
#[derive(Debug, Default)]
pub struct SignupForm {
    error: Option<Rejection>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rejection currently displayed, if any.
    pub fn error(&self) -> Option<Rejection> {
        self.error
    }

    /// Re-check the value after every keystroke. An empty field never shows an error.
    pub fn handle_input<V: SignupView>(&mut self, view: &V) {
        let Some(value) = view.email_value() else {
            return;
        };

        match check_email(&value) {
            Err(Rejection::InvalidAddress) => self.show(view, Rejection::InvalidAddress),
            Err(Rejection::Required) | Ok(_) => self.hide(view),
        }
    }

    /// Validate on submit. The caller has already suppressed the native submission.
    pub fn handle_submit<V, S>(&mut self, view: &V, scheduler: &S, timings: ToastTimings) -> SubmitOutcome
    where
        V: SignupView,
        S: Scheduler + Clone + 'static,
    {
        let Some(value) = view.email_value() else {
            tracing::debug!("Email input absent, ignoring submit");
            return SubmitOutcome::Unavailable;
        };

        let email = match check_email(&value) {
            Ok(email) => email.to_string(),
            Err(rejection) => {
                self.show(view, rejection);
                return SubmitOutcome::Rejected(rejection);
            }
        };

        self.hide(view);
        view.set_email_value("");

        let acknowledgment = Acknowledgment::new(email);
        if let Some(toast) = view.show_acknowledgment(&acknowledgment) {
            let later = scheduler.clone();
            scheduler.schedule(
                timings.display_ms,
                Box::new(move || {
                    toast.fade_out();
                    later.schedule(timings.fade_ms, Box::new(move || toast.remove()));
                }),
            );
        }

        tracing::info!("Waitlist signup accepted");
        SubmitOutcome::Accepted(acknowledgment)
    }

    fn show<V: SignupView>(&mut self, view: &V, rejection: Rejection) {
        view.show_error(rejection.message());
        self.error = Some(rejection);
    }

    fn hide<V: SignupView>(&mut self, view: &V) {
        view.hide_error();
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_email_trims() {
        assert_eq!(check_email("  a@b.com \t"), Ok("a@b.com"));
    }

    #[test]
    fn test_check_email_rejections() {
        assert_eq!(check_email(""), Err(Rejection::Required));
        assert_eq!(check_email("   "), Err(Rejection::Required));
        assert_eq!(check_email("bad-email"), Err(Rejection::InvalidAddress));
        assert_eq!(check_email("user@example"), Err(Rejection::InvalidAddress));
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(Rejection::Required.message(), "Email address is required");
        assert_eq!(
            Rejection::InvalidAddress.message(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_acknowledgment_body_contains_address() {
        let ack = Acknowledgment::new("a@b.com");
        assert_eq!(
            ack.body(),
            "You're on the waitlist! We'll notify you at a@b.com when we launch."
        );
    }
}
