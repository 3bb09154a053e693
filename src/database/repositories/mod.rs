pub mod assignment;
pub mod project;
pub mod stats;
pub mod worker;

// Re-export all repositories for easy importing
pub use assignment::AssignmentRepository;
pub use project::ProjectRepository;
pub use stats::StatsRepository;
pub use worker::WorkerRepository;
