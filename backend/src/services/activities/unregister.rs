use crate::error::RosterError;
use crate::roster::state::ActivitiesState;
use actix_web::{web, HttpResponse};
use common::model::message::ApiMessage;
use common::requests::ParticipantQuery;
use log::{info, warn};

/// `DELETE /activities/{activity_name}/participants?email=...`
pub async fn process(
    activity_name: web::Path<String>,
    query: web::Query<ParticipantQuery>,
    state: web::Data<ActivitiesState>,
) -> Result<HttpResponse, RosterError> {
    let activity = activity_name.into_inner();
    let ParticipantQuery { email } = query.into_inner();

    state.unregister(&activity, &email).await.map_err(|e| {
        warn!("Unregister of {email} from {activity} rejected: {e}");
        e
    })?;

    info!("Unregistered {email} from {activity}");
    Ok(HttpResponse::Ok().json(ApiMessage::success(format!(
        "Unregistered {} from {}",
        email.trim(),
        activity
    ))))
}
