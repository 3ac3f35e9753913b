//! SkillSwap - Peer Learning Platform Backend
//!
//! This library provides the core functionality for the SkillSwap platform,
//! a social learning network where members trade skills, take courses and
//! quizzes for coins and XP, post to a community feed, message each other,
//! and pair up in live collaborative sessions.
//!
//! # Features
//!
//! - JWT authentication with Redis-backed refresh tokens
//! - Job board, courses, hackathons, and quizzes with coin/XP rewards
//! - Community feed with likes and comments
//! - 1:1 messaging with derived conversation lists
//! - Live rooms and collaborative code/whiteboard projects
//! - WebSocket channel for chat relay, presence, and session fan-out
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs
//! - **Realtime**: In-process hub and WebSocket endpoint

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod realtime;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
