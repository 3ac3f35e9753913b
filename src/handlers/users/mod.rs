//! User directory handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// User routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_users))
        .route("/leaderboard", get(handler::leaderboard))
        .route("/online", get(handler::online_users))
        .route("/{id}", get(handler::get_user))
}
