//! Component state for the activities page.
//!
//! The state owns everything the view needs: the last roster the server
//! returned, the form values, the transient status message, and the `NodeRef`
//! of the activity select. Nothing is kept in globals.

use common::model::roster::Roster;
use common::requests::SignupRequest;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::api::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub fn class(self) -> &'static str {
        match self {
            StatusKind::Info => "info",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Outcome of a form submission, before any request is sent.
#[derive(Debug, PartialEq)]
pub enum SignupStep {
    /// A signup is already in flight; nothing changed.
    Ignored,
    /// The form was incomplete. An error status with this generation is shown.
    Invalid(u32),
    /// The form is valid and the component is now `submitting`.
    Started(SignupRequest),
}

pub struct ActivitiesComponent {
    /// Last successfully fetched roster. Drives the cards and the select options.
    pub roster: Option<Roster>,

    /// Set when the latest fetch failed; the list then shows an error instead of cards.
    pub load_failed: bool,

    /// Raw value of the email input (trimmed only on submit).
    pub email: String,

    /// Value of the activity select; empty while the placeholder is selected.
    pub selected_activity: String,

    /// Reference to the `<select>` so a successful signup can reset it.
    pub select_ref: NodeRef,

    /// Guards the form against a second submission while a signup is in flight.
    pub submitting: bool,

    pub status: Option<StatusMessage>,

    /// Bumped on every status change. A hide timer only clears the message it
    /// was started for.
    pub status_generation: u32,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl ActivitiesComponent {
    pub fn new() -> Self {
        Self {
            roster: None,
            load_failed: false,
            email: String::new(),
            selected_activity: String::new(),
            select_ref: Default::default(),
            submitting: false,
            status: None,
            status_generation: 0,
            loaded: false,
        }
    }

    /// Shows `text` in the `#message` area and bumps the generation.
    ///
    /// Returns the generation a hide timer must carry, or `None` for info
    /// messages, which stay until replaced.
    pub fn show_status(&mut self, text: impl Into<String>, kind: StatusKind) -> Option<u32> {
        self.status_generation = self.status_generation.wrapping_add(1);
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
        (kind != StatusKind::Info).then_some(self.status_generation)
    }

    /// Clears the status if it is still the one shown at `generation`.
    pub fn hide_status(&mut self, generation: u32) -> bool {
        if generation != self.status_generation || self.status.is_none() {
            return false;
        }
        self.status = None;
        true
    }

    /// Validates the form and enters the in-flight state.
    pub fn begin_signup(&mut self) -> SignupStep {
        if self.submitting {
            return SignupStep::Ignored;
        }
        match SignupRequest::from_form(&self.email, &self.selected_activity) {
            Ok(request) => {
                self.show_status("Signing up...", StatusKind::Info);
                self.submitting = true;
                SignupStep::Started(request)
            }
            Err(text) => {
                self.show_status(text, StatusKind::Error);
                SignupStep::Invalid(self.status_generation)
            }
        }
    }

    /// Leaves the in-flight state. Success resets the form, failure keeps it.
    /// Returns the generation of the status message shown.
    pub fn finish_signup(&mut self, result: &Result<String, ApiError>) -> u32 {
        self.submitting = false;
        match result {
            Ok(text) => {
                self.reset_form();
                self.show_status(text.as_str(), StatusKind::Success);
            }
            Err(err) => {
                self.show_status(err.status_text("Error signing up"), StatusKind::Error);
            }
        }
        self.status_generation
    }

    /// Reports the outcome of an unregister request. Returns the generation of
    /// the status message shown.
    pub fn finish_unregister(&mut self, result: &Result<String, ApiError>) -> u32 {
        match result {
            Ok(text) => self.show_status(text.as_str(), StatusKind::Success),
            Err(err) => self.show_status(err.status_text("Error unregistering"), StatusKind::Error),
        };
        self.status_generation
    }

    fn reset_form(&mut self) {
        self.email.clear();
        self.selected_activity.clear();
        if let Some(select) = self.select_ref.cast::<HtmlSelectElement>() {
            select.set_value("");
        }
    }

    /// CSS classes of the `#message` element.
    pub fn status_class(&self) -> String {
        match &self.status {
            Some(status) => format!("message {}", status.kind.class()),
            None => "message hidden".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_without_status() {
        let component = ActivitiesComponent::new();
        assert_eq!(component.status_class(), "message hidden");
    }

    #[test]
    fn status_kind_maps_to_class() {
        let mut component = ActivitiesComponent::new();
        component.status = Some(StatusMessage {
            text: "Signed up".to_string(),
            kind: StatusKind::Success,
        });
        assert_eq!(component.status_class(), "message success");
    }

    fn filled_form() -> ActivitiesComponent {
        let mut component = ActivitiesComponent::new();
        component.email = "  a@x.com ".to_string();
        component.selected_activity = "Chess Club".to_string();
        component
    }

    #[test]
    fn info_status_has_no_hide_timer() {
        let mut component = ActivitiesComponent::new();
        assert_eq!(component.show_status("Signing up...", StatusKind::Info), None);
        assert_eq!(component.show_status("Done", StatusKind::Success), Some(2));
        assert_eq!(component.show_status("Oops", StatusKind::Error), Some(3));
    }

    #[test]
    fn stale_timer_does_not_hide_a_newer_message() {
        let mut component = ActivitiesComponent::new();
        let first = component.show_status("Signed up", StatusKind::Success).unwrap();
        let second = component.show_status("Already registered", StatusKind::Error).unwrap();

        assert!(!component.hide_status(first));
        assert_eq!(component.status.as_ref().unwrap().text, "Already registered");

        assert!(component.hide_status(second));
        assert_eq!(component.status, None);
        assert!(!component.hide_status(second));
    }

    #[test]
    fn valid_form_starts_a_signup() {
        let mut component = filled_form();
        let step = component.begin_signup();

        assert_eq!(
            step,
            SignupStep::Started(SignupRequest {
                activity: "Chess Club".to_string(),
                email: "a@x.com".to_string(),
            })
        );
        assert!(component.submitting);
        let status = component.status.as_ref().unwrap();
        assert_eq!(status.text, "Signing up...");
        assert_eq!(status.kind, StatusKind::Info);
    }

    #[test]
    fn second_submit_is_ignored_while_in_flight() {
        let mut component = filled_form();
        assert!(matches!(component.begin_signup(), SignupStep::Started(_)));
        let generation = component.status_generation;

        assert_eq!(component.begin_signup(), SignupStep::Ignored);
        assert!(component.submitting);
        assert_eq!(component.status_generation, generation);
    }

    #[test]
    fn incomplete_form_shows_error_without_submitting() {
        let mut component = ActivitiesComponent::new();
        component.email = "   ".to_string();
        component.selected_activity = "Chess Club".to_string();

        let step = component.begin_signup();

        assert_eq!(step, SignupStep::Invalid(component.status_generation));
        assert!(!component.submitting);
        let status = component.status.as_ref().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, "Please provide both an email and select an activity.");

        component.email = "a@x.com".to_string();
        component.selected_activity.clear();
        assert!(matches!(component.begin_signup(), SignupStep::Invalid(_)));
        assert!(!component.submitting);
    }

    #[test]
    fn successful_signup_resets_the_form() {
        let mut component = filled_form();
        component.begin_signup();

        let generation = component.finish_signup(&Ok("Signed up a@x.com for Chess Club".to_string()));

        assert!(!component.submitting);
        assert!(component.email.is_empty());
        assert!(component.selected_activity.is_empty());
        assert_eq!(generation, component.status_generation);
        let status = component.status.as_ref().unwrap();
        assert_eq!(status.kind, StatusKind::Success);
        assert_eq!(status.text, "Signed up a@x.com for Chess Club");
    }

    #[test]
    fn rejected_signup_keeps_the_form() {
        let mut component = filled_form();
        component.begin_signup();

        component.finish_signup(&Err(ApiError::Rejected("Already registered".to_string())));

        assert!(!component.submitting);
        assert_eq!(component.email, "  a@x.com ");
        assert_eq!(component.selected_activity, "Chess Club");
        let status = component.status.as_ref().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, "Already registered");
    }

    #[test]
    fn unregister_failure_without_server_text_uses_fallback() {
        let mut component = ActivitiesComponent::new();
        component.finish_unregister(&Err(ApiError::Status(502)));
        assert_eq!(component.status.as_ref().unwrap().text, "Error unregistering");

        component.finish_unregister(&Ok("Unregistered a@x.com from Chess Club".to_string()));
        assert_eq!(component.status.as_ref().unwrap().kind, StatusKind::Success);
    }
}
