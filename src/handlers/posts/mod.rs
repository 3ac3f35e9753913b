//! Community feed handlers

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

/// Community feed routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Post CRUD
        .route("/", get(handler::list_feed))
        .route("/", post(handler::create_post))
        .route("/{id}", get(handler::get_post))
        .route("/{id}", put(handler::update_post))
        .route("/{id}", delete(handler::delete_post))
        // Likes
        .route("/{id}/like", post(handler::like))
        .route("/{id}/like", delete(handler::unlike))
        // Comments
        .route("/{id}/comments", post(handler::add_comment))
        .route("/{id}/comments", get(handler::list_comments))
        .route("/{id}/comments/{comment_id}", delete(handler::delete_comment))
}
