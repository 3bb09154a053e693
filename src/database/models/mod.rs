pub mod assignment;
pub(crate) mod macros;
pub mod project;
pub mod stats;
pub mod worker;

// Re-export all models for easy importing
pub use assignment::*;
pub use project::*;
pub use stats::*;
pub use worker::*;
