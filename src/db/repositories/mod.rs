//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod course_repo;
pub mod hackathon_repo;
pub mod job_repo;
pub mod message_repo;
pub mod post_repo;
pub mod project_repo;
pub mod quiz_repo;
pub mod room_repo;
pub mod user_repo;

pub use course_repo::CourseRepository;
pub use hackathon_repo::HackathonRepository;
pub use job_repo::JobRepository;
pub use message_repo::{ConversationRow, MessageRepository};
pub use post_repo::{PostRepository, PostWithCounts};
pub use project_repo::ProjectRepository;
pub use quiz_repo::QuizRepository;
pub use room_repo::RoomRepository;
pub use user_repo::UserRepository;
