//! Own-profile handlers

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

/// Profile routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::get_profile))
        .route("/", put(handler::update_profile))
}
