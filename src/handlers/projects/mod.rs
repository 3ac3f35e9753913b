//! Collaborative project handlers

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

/// Collaborative project routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_projects))
        .route("/", post(handler::create_project))
        .route("/{id}", get(handler::get_project))
        .route("/{id}", put(handler::update_project))
        .route("/{id}", delete(handler::delete_project))
        .route("/{id}/collaborators", post(handler::add_collaborator))
        .route(
            "/{id}/collaborators/{user_id}",
            delete(handler::remove_collaborator),
        )
}
