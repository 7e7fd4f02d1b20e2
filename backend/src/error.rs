use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::model::message::ApiMessage;
use thiserror::Error;

/// Reasons a signup or unregister request is rejected.
///
/// Rendered as `{"detail": "..."}` so the client can show the text verbatim.
#[derive(Error, Debug, PartialEq)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Email is required")]
    MissingEmail,
}

impl ResponseError for RosterError {
    fn status_code(&self) -> StatusCode {
        match self {
            RosterError::ActivityNotFound | RosterError::NotSignedUp => StatusCode::NOT_FOUND,
            RosterError::AlreadySignedUp
            | RosterError::ActivityFull
            | RosterError::MissingEmail => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiMessage::failure(self.to_string()))
    }
}
