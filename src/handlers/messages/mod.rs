//! Direct message handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

/// Direct message routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/conversations", get(handler::list_conversations))
        .route("/{user_id}", get(handler::history))
        .route("/{user_id}", post(handler::send_message))
        .route("/{user_id}/read", put(handler::mark_read))
}
