//! Quiz handlers

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

/// Quiz routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Quiz CRUD
        .route("/", get(handler::list_quizzes))
        .route("/", post(handler::create_quiz))
        .route("/{id}", get(handler::get_quiz))
        .route("/{id}", put(handler::update_quiz))
        .route("/{id}", delete(handler::delete_quiz))
        // Attempts
        .route("/{id}/submit", post(handler::submit))
        .route("/{id}/attempts", get(handler::list_attempts))
}
