//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod course;
pub mod hackathon;
pub mod job;
pub mod message;
pub mod post;
pub mod project;
pub mod quiz;
pub mod room;
pub mod user;

pub use course::*;
pub use hackathon::*;
pub use job::*;
pub use message::*;
pub use post::*;
pub use project::*;
pub use quiz::*;
pub use room::*;
pub use user::*;
