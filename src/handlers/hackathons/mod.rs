//! Hackathon handlers

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

/// Hackathon routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Hackathon CRUD
        .route("/", get(handler::list_hackathons))
        .route("/", post(handler::create_hackathon))
        .route("/{id}", get(handler::get_hackathon))
        .route("/{id}", put(handler::update_hackathon))
        .route("/{id}", delete(handler::delete_hackathon))
        // Registration
        .route("/{id}/register", post(handler::register))
        .route("/{id}/register", delete(handler::withdraw))
        .route("/{id}/participants", get(handler::list_participants))
}
