use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::database::models::macros::string_enum;

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum ProjectStatus {
        Inquiry => "inquiry",
        Estimating => "estimating",
        Contracted => "contracted",
        InProgress => "in_progress",
        Completed => "completed",
        OnHold => "on_hold",
        Cancelled => "cancelled",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum ProjectType {
        Signage => "signage",
        Interior => "interior",
        Digital => "digital",
        Electrical => "electrical",
        Other => "other",
    }
}

/// A site: a unit of client work. Owned by AGORA, read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: String,
    pub project_code: String,
    pub name: String,
    pub client_id: Option<String>,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Site detail joined with its client contact.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProjectWithClient {
    pub id: String,
    pub project_code: String,
    pub name: String,
    pub client_id: Option<String>,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub client_name: Option<String>,
    pub client_contact: Option<String>,
    pub client_phone: Option<String>,
    pub client_email: Option<String>,
}
