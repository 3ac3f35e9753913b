//! Job board handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

/// Job board routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Listing CRUD
        .route("/", get(handler::list_jobs))
        .route("/", post(handler::create_job))
        .route("/{id}", get(handler::get_job))
        .route("/{id}", put(handler::update_job))
        .route("/{id}", delete(handler::delete_job))
        // Applications
        .route("/{id}/apply", post(handler::apply))
        .route("/{id}/apply", delete(handler::withdraw))
        .route("/{id}/applicants", get(handler::list_applicants))
}
