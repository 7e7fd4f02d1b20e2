//! HTTP calls against the activities API.
//!
//! Activity names go into a path segment and are encoded with
//! `encodeURIComponent`; the email goes through gloo-net's query builder,
//! which encodes it as well.

use common::model::message::ApiMessage;
use common::model::roster::Roster;
use gloo_net::http::{Request, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Network failure or a body that is not the expected JSON.
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    /// Non-2xx status on the roster fetch.
    #[error("server responded with status {0}")]
    Status(u16),

    /// Non-2xx status on a mutation, with the text to show the user.
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// The status text for a failed mutation. Rejections carry the server's
    /// own text; anything else shows `fallback`.
    pub fn status_text(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(text) => text.clone(),
            ApiError::Transport(_) | ApiError::Status(_) => fallback.to_string(),
        }
    }
}

pub async fn fetch_roster(api_base: &str) -> Result<Roster, ApiError> {
    let response = Request::get(&format!("{}/activities", api_base))
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<Roster>().await?)
}

/// `POST /activities/{activity}/signup?email=`. Returns the success text.
pub async fn sign_up(api_base: &str, activity: &str, email: &str) -> Result<String, ApiError> {
    let response = Request::post(&participant_url(api_base, activity, "signup"))
        .query([("email", email)])
        .send()
        .await?;
    into_message(response, "Signed up successfully", "Signup failed").await
}

/// `DELETE /activities/{activity}/participants?email=`. Returns the success text.
pub async fn unregister(api_base: &str, activity: &str, email: &str) -> Result<String, ApiError> {
    let response = Request::delete(&participant_url(api_base, activity, "participants"))
        .query([("email", email)])
        .send()
        .await?;
    into_message(response, "Unregistered successfully", "Failed to unregister").await
}

fn participant_url(api_base: &str, activity: &str, action: &str) -> String {
    let activity: String = js_sys::encode_uri_component(activity).into();
    format!("{}/activities/{}/{}", api_base, activity, action)
}

/// Resolves a mutation response into its user-facing text.
/// An unparseable body counts as an empty one.
async fn into_message(
    response: Response,
    success_fallback: &str,
    failure_fallback: &str,
) -> Result<String, ApiError> {
    let body = response.json::<ApiMessage>().await.unwrap_or_default();
    if response.ok() {
        Ok(body.success_text(success_fallback))
    } else {
        Err(ApiError::Rejected(body.failure_text(failure_fallback)))
    }
}
