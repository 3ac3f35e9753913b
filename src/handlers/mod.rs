//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod hackathons;
pub mod health;
pub mod jobs;
pub mod messages;
pub mod posts;
pub mod profile;
pub mod projects;
pub mod quizzes;
pub mod rooms;
pub mod users;

use axum::{routing::get, Router};

use crate::{realtime, state::AppState};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .nest("/users", users::routes())
        .nest("/profile", profile::routes())
        .nest("/jobs", jobs::routes())
        .nest("/courses", courses::routes())
        .nest("/hackathons", hackathons::routes())
        .nest("/quizzes", quizzes::routes())
        .nest("/posts", posts::routes())
        .nest("/messages", messages::routes())
        .nest("/rooms", rooms::routes())
        .nest("/projects", projects::routes())
        .nest("/dashboard", dashboard::routes())
        .route("/ws", get(realtime::ws_handler))
}
