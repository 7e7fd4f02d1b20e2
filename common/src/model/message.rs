use serde::{Deserialize, Serialize};

/// Body returned by the mutating endpoints.
///
/// Successful responses carry `message`; rejected ones carry `detail`
/// (and sometimes `message`). Either field may be missing, so the text shown
/// to the user always has a fallback.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ApiMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ApiMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            detail: None,
        }
    }

    pub fn failure(detail: impl Into<String>) -> Self {
        Self {
            message: None,
            detail: Some(detail.into()),
        }
    }

    /// Text for a 2xx response: `message`, else `fallback`.
    pub fn success_text(&self, fallback: &str) -> String {
        non_empty(&self.message).unwrap_or(fallback).to_string()
    }

    /// Text for a rejected response: `detail`, else `message`, else `fallback`.
    pub fn failure_text(&self, fallback: &str) -> String {
        non_empty(&self.detail)
            .or_else(|| non_empty(&self.message))
            .unwrap_or(fallback)
            .to_string()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_text_uses_server_message() {
        let body: ApiMessage = serde_json::from_str(r#"{"message":"Signed up successfully"}"#).unwrap();
        assert_eq!(body.success_text("fallback"), "Signed up successfully");
    }

    #[test]
    fn failure_text_prefers_detail() {
        let body: ApiMessage =
            serde_json::from_str(r#"{"detail":"Already registered","message":"other"}"#).unwrap();
        assert_eq!(body.failure_text("Signup failed"), "Already registered");
    }

    #[test]
    fn failure_text_falls_back_to_message_then_default() {
        let body: ApiMessage = serde_json::from_str(r#"{"message":"Nope"}"#).unwrap();
        assert_eq!(body.failure_text("Signup failed"), "Nope");

        let empty = ApiMessage::default();
        assert_eq!(empty.failure_text("Signup failed"), "Signup failed");
        assert_eq!(empty.success_text("Signed up successfully"), "Signed up successfully");
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let json = serde_json::to_string(&ApiMessage::failure("Activity not found")).unwrap();
        assert_eq!(json, r#"{"detail":"Activity not found"}"#);
    }
}
