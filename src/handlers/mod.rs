pub mod assignments;
pub mod projects;
pub mod shared;
pub mod stats;
pub mod workers;
