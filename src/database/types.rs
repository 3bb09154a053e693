use chrono::NaiveDateTime;

use crate::database::models::{WorkerProfile, WorkerType};

// Database row types where the SQLite shape differs from the model: skill
// and certification tags are stored as JSON text columns.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkerProfileRow {
    pub id: String,
    pub user_id: String,
    pub partner_id: Option<String>,
    pub worker_type: WorkerType,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub partner_name: Option<String>,
    pub partner_category: Option<String>,
    pub skills: Option<String>,
    pub certifications: Option<String>,
    pub hourly_rate: Option<f64>,
    pub daily_rate: Option<f64>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn parse_tags(raw: Option<String>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

impl From<WorkerProfileRow> for WorkerProfile {
    fn from(row: WorkerProfileRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            partner_id: row.partner_id,
            worker_type: row.worker_type,
            name: row.name,
            email: row.email,
            phone: row.phone,
            partner_name: row.partner_name,
            partner_category: row.partner_category,
            skills: parse_tags(row.skills),
            certifications: parse_tags(row.certifications),
            hourly_rate: row.hourly_rate,
            daily_rate: row.daily_rate,
            notes: row.notes,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
