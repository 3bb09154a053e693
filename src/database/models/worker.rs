use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::database::models::macros::string_enum;

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum WorkerType {
        Internal => "internal",
        Partner => "partner",
    }
}

/// Worker joined with the user identity behind it and the owning partner
/// company, if any. Workers are managed in AGORA; this service only reads
/// them.
#[derive(Debug, Clone, Serialize)]
pub struct WorkerProfile {
    pub id: String,
    pub user_id: String,
    pub partner_id: Option<String>,
    pub worker_type: WorkerType,
    /// Display-name override, falling back to the user's registered name.
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub partner_name: Option<String>,
    pub partner_category: Option<String>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub daily_rate: Option<f64>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
