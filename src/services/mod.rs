//! Business logic services

pub mod auth_service;
pub mod course_service;
pub mod dashboard_service;
pub mod hackathon_service;
pub mod job_service;
pub mod message_service;
pub mod post_service;
pub mod project_service;
pub mod quiz_service;
pub mod room_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use course_service::CourseService;
pub use dashboard_service::DashboardService;
pub use hackathon_service::HackathonService;
pub use job_service::JobService;
pub use message_service::MessageService;
pub use post_service::PostService;
pub use project_service::ProjectService;
pub use quiz_service::QuizService;
pub use room_service::RoomService;
pub use user_service::UserService;
