use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::database::models::WorkerType;
use crate::database::models::macros::string_enum;
use crate::database::utils::empty_to_none;

/// A worker-to-project booking for one calendar day, as stored.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Assignment {
    pub id: String,
    pub worker_id: String,
    pub project_id: String,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub status: AssignmentStatus,
    pub notes: Option<String>,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentInput {
    pub worker_id: String,
    pub project_id: String,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub status: AssignmentStatus,
    pub notes: Option<String>,
    pub created_by: Option<String>,
}

impl AssignmentInput {
    /// Optional text fields arrive as `Some("")` from HTML forms; store them
    /// as NULL instead. Every write path goes through this.
    pub fn normalized(self) -> Self {
        Self {
            notes: empty_to_none(self.notes),
            created_by: empty_to_none(self.created_by),
            ..self
        }
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum AssignmentStatus {
        Scheduled => "scheduled",
        Confirmed => "confirmed",
        InProgress => "in_progress",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

impl Default for AssignmentStatus {
    fn default() -> Self {
        AssignmentStatus::Scheduled
    }
}

// Joined row shapes, one per roster view.

/// Day-roster row: assignment plus the worker's name/phone and the site.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DayAssignment {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub status: AssignmentStatus,
    pub notes: Option<String>,
    pub worker_id: String,
    pub worker_name: String,
    pub worker_phone: Option<String>,
    pub project_id: String,
    pub project_name: String,
    pub project_address: Option<String>,
}

/// Schedule-history row for one worker.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct WorkerAssignment {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub status: AssignmentStatus,
    pub notes: Option<String>,
    pub project_id: String,
    pub project_name: String,
    pub project_address: Option<String>,
    pub project_code: String,
}

/// Site-roster row: who was placed on the project, with partner affiliation.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProjectAssignment {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub status: AssignmentStatus,
    pub notes: Option<String>,
    pub worker_id: String,
    pub worker_name: String,
    pub worker_type: WorkerType,
    pub worker_is_active: bool,
    pub partner_name: Option<String>,
}
