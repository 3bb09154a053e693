use serde::{Deserialize, Serialize};

/// Landing-page counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub today_assignments: i64,
    pub active_workers: i64,
    pub active_projects: i64,
}
