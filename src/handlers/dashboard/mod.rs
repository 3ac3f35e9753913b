//! Admin dashboard handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, put},
    Router,
};

use crate::state::AppState;

/// Admin dashboard routes; every handler enforces the admin role
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(handler::stats))
        .route("/users", get(handler::list_users))
        .route("/users/{id}/ban", put(handler::ban_user))
        .route("/users/{id}/unban", put(handler::unban_user))
        .route("/users/{id}/role", put(handler::set_role))
}
