use serde::{Deserialize, Serialize};

/// Query string of the signup and unregister endpoints: `?email=...`.
///
/// A missing `email` decodes as empty, so the handlers reject it with the same
/// `{"detail": ...}` body as a blank one.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ParticipantQuery {
    #[serde(default)]
    pub email: String,
}

/// A validated signup taken from the form controls.
#[derive(Clone, Debug, PartialEq)]
pub struct SignupRequest {
    pub activity: String,
    pub email: String,
}

/// Shown when the form is submitted with a blank email or no activity.
pub const MISSING_FIELDS: &str = "Please provide both an email and select an activity.";

impl SignupRequest {
    /// Builds a request from the raw form values. The email is trimmed; the
    /// activity is the select value as-is. Both must be non-empty.
    pub fn from_form(email: &str, activity: &str) -> Result<Self, &'static str> {
        let email = email.trim();
        if email.is_empty() || activity.is_empty() {
            return Err(MISSING_FIELDS);
        }
        Ok(Self {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_email_decodes_as_empty() {
        let query: ParticipantQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.email, "");
    }

    #[test]
    fn trims_the_email() {
        let request = SignupRequest::from_form("  a@x.com \n", "Chess Club").unwrap();
        assert_eq!(request.email, "a@x.com");
        assert_eq!(request.activity, "Chess Club");
    }

    #[test]
    fn rejects_blank_email_or_missing_activity() {
        assert_eq!(SignupRequest::from_form("   ", "Chess Club"), Err(MISSING_FIELDS));
        assert_eq!(SignupRequest::from_form("a@x.com", ""), Err(MISSING_FIELDS));
        assert_eq!(SignupRequest::from_form("", ""), Err(MISSING_FIELDS));
    }
}
