//! Assignment form handling: an immutable snapshot of what the client
//! submitted, validated in one pure step into a typed repository input.
//! Field errors come back as a structured map, never as mutated form state.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::database::models::{AssignmentInput, AssignmentStatus};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignmentForm {
    #[serde(default)]
    pub worker_id: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct ValidationErrors {
    pub fields: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: &str) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl AssignmentForm {
    /// Validate and convert into a repository input. Empty optional fields
    /// count as absent; a missing status falls back to the insert default.
    pub fn validate(self) -> Result<AssignmentInput, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.worker_id.is_empty() {
            errors.push("worker_id", "職人を選択してください");
        }
        if self.project_id.is_empty() {
            errors.push("project_id", "現場を選択してください");
        }

        let date = if self.date.is_empty() {
            errors.push("date", "日付を入力してください");
            None
        } else {
            match NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push("date", "日付の形式が正しくありません");
                    None
                }
            }
        };

        let start_time = match parse_clock(&self.start_time) {
            Ok(time) => time,
            Err(()) => {
                errors.push("start_time", "時刻はHH:MM形式で入力してください");
                None
            }
        };
        let end_time = match parse_clock(&self.end_time) {
            Ok(time) => time,
            Err(()) => {
                errors.push("end_time", "時刻はHH:MM形式で入力してください");
                None
            }
        };

        let status = if self.status.is_empty() {
            AssignmentStatus::default()
        } else {
            match self.status.parse() {
                Ok(status) => status,
                Err(_) => {
                    errors.push("status", "ステータスの値が不正です");
                    AssignmentStatus::default()
                }
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(AssignmentInput {
            worker_id: self.worker_id,
            project_id: self.project_id,
            date: date.expect("validated above"),
            start_time,
            end_time,
            status,
            notes: if self.notes.is_empty() {
                None
            } else {
                Some(self.notes)
            },
            created_by: None,
        })
    }
}

fn parse_clock(raw: &str) -> Result<Option<NaiveTime>, ()> {
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map(Some)
        .map_err(|_| ())
}
