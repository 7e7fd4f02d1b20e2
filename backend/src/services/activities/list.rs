use crate::roster::state::ActivitiesState;
use actix_web::{web, HttpResponse, Responder};

/// `GET /activities`: the whole roster, in roster order.
pub async fn process(state: web::Data<ActivitiesState>) -> impl Responder {
    HttpResponse::Ok().json(state.snapshot().await)
}
