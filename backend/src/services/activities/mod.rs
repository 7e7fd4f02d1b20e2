//! # Activities Service Module
//!
//! The REST contract the browser client is written against. All routes live
//! under `/activities` and operate on the shared `ActivitiesState`.
//!
//! ## Sub-modules:
//! - `list`: returns the full roster.
//! - `signup`: adds a participant to one activity.
//! - `unregister`: removes a participant from one activity.
//!
//! Activity names arrive as a percent-encoded path segment and emails as a
//! percent-encoded `email` query parameter; Actix decodes both before the
//! handlers see them.

mod list;
mod signup;
mod unregister;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

/// The base path for all activity endpoints.
const API_PATH: &str = "/activities";

/// Configures and returns the Actix `Scope` for the activity routes.
///
/// # Registered Routes:
///
/// *   **`GET /activities`**: `list::process`, the roster as a JSON object.
/// *   **`POST /activities/{activity_name}/signup?email=`**: `signup::process`.
/// *   **`DELETE /activities/{activity_name}/participants?email=`**: `unregister::process`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/{activity_name}/signup", post().to(signup::process))
        .route("/{activity_name}/participants", delete().to(unregister::process))
}
