//! Live room handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

/// Live room routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_rooms))
        .route("/", post(handler::create_room))
        .route("/code/{code}", get(handler::get_room_by_code))
        .route("/{id}", get(handler::get_room))
        .route("/{id}", delete(handler::end_room))
        .route("/{id}/join", post(handler::join_room))
        .route("/{id}/leave", post(handler::leave_room))
}
