use crate::error::RosterError;
use crate::roster::state::ActivitiesState;
use actix_web::{web, HttpResponse};
use common::model::message::ApiMessage;
use common::requests::ParticipantQuery;
use log::{info, warn};

/// `POST /activities/{activity_name}/signup?email=...`
///
/// Returns `200 OK` with `{"message": ...}`, or the `RosterError` mapped to
/// `404`/`400` with `{"detail": ...}`.
pub async fn process(
    activity_name: web::Path<String>,
    query: web::Query<ParticipantQuery>,
    state: web::Data<ActivitiesState>,
) -> Result<HttpResponse, RosterError> {
    let activity = activity_name.into_inner();
    let ParticipantQuery { email } = query.into_inner();

    state.sign_up(&activity, &email).await.map_err(|e| {
        warn!("Signup of {email} for {activity} rejected: {e}");
        e
    })?;

    info!("Signed up {email} for {activity}");
    Ok(HttpResponse::Ok().json(ApiMessage::success(format!(
        "Signed up {} for {}",
        email.trim(),
        activity
    ))))
}
