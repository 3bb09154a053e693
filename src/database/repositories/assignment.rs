use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{
    Assignment, AssignmentInput, AssignmentStatus, DayAssignment, ProjectAssignment,
    WorkerAssignment,
};

/// All reads and writes against the assignment table. Assignments are the
/// one entity this service owns; everything else is joined in read-only.
pub struct AssignmentRepository {
    pool: SqlitePool,
}

impl AssignmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: AssignmentInput) -> Result<Assignment, sqlx::Error> {
        let input = input.normalized();
        let now = Utc::now().naive_utc();
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            INSERT INTO assignments (id, worker_id, project_id, date, start_time, end_time, status, notes, created_by, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, worker_id, project_id, date, start_time, end_time, status, notes, created_by, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&input.worker_id)
        .bind(&input.project_id)
        .bind(input.date)
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(input.status)
        .bind(&input.notes)
        .bind(&input.created_by)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(assignment)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Assignment>, sqlx::Error> {
        let assignment = sqlx::query_as::<_, Assignment>(
            "SELECT id, worker_id, project_id, date, start_time, end_time, status, notes, created_by, created_at, updated_at FROM assignments WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(assignment)
    }

    /// One day's roster, joined with worker contact and site, earliest start
    /// first. Rows without a start time sort wherever SQLite puts NULLs,
    /// which is stable within a single query.
    pub async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<DayAssignment>, sqlx::Error> {
        let assignments = sqlx::query_as::<_, DayAssignment>(
            r#"
            SELECT a.id, a.date, a.start_time, a.end_time, a.status, a.notes,
                   a.worker_id, COALESCE(w.display_name, u.name) AS worker_name, u.phone AS worker_phone,
                   a.project_id, p.name AS project_name, p.address AS project_address
            FROM assignments a
            JOIN workers w ON w.id = a.worker_id
            JOIN users u ON u.id = w.user_id
            JOIN projects p ON p.id = a.project_id
            WHERE a.date = ?
            ORDER BY a.start_time ASC
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(assignments)
    }

    /// Schedule history for one worker, newest date first.
    pub async fn list_by_worker(
        &self,
        worker_id: &str,
    ) -> Result<Vec<WorkerAssignment>, sqlx::Error> {
        let assignments = sqlx::query_as::<_, WorkerAssignment>(
            r#"
            SELECT a.id, a.date, a.start_time, a.end_time, a.status, a.notes,
                   a.project_id, p.name AS project_name, p.address AS project_address, p.project_code
            FROM assignments a
            JOIN projects p ON p.id = a.project_id
            WHERE a.worker_id = ?
            ORDER BY a.date DESC
            LIMIT 50
            "#,
        )
        .bind(worker_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(assignments)
    }

    /// Placement roster for one site, newest date first.
    pub async fn list_by_project(
        &self,
        project_id: &str,
    ) -> Result<Vec<ProjectAssignment>, sqlx::Error> {
        let assignments = sqlx::query_as::<_, ProjectAssignment>(
            r#"
            SELECT a.id, a.date, a.start_time, a.end_time, a.status, a.notes,
                   a.worker_id, COALESCE(w.display_name, u.name) AS worker_name,
                   w.worker_type, w.is_active AS worker_is_active, pt.name AS partner_name
            FROM assignments a
            JOIN workers w ON w.id = a.worker_id
            JOIN users u ON u.id = w.user_id
            LEFT JOIN partners pt ON pt.id = w.partner_id
            WHERE a.project_id = ?
            ORDER BY a.date DESC
            LIMIT 100
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(assignments)
    }

    pub async fn update(
        &self,
        id: &str,
        input: AssignmentInput,
    ) -> Result<Option<Assignment>, sqlx::Error> {
        let input = input.normalized();
        let now = Utc::now().naive_utc();
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            UPDATE assignments
            SET worker_id = ?, project_id = ?, date = ?, start_time = ?, end_time = ?, status = ?, notes = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, worker_id, project_id, date, start_time, end_time, status, notes, created_by, created_at, updated_at
            "#,
        )
        .bind(&input.worker_id)
        .bind(&input.project_id)
        .bind(input.date)
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(input.status)
        .bind(&input.notes)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(assignment)
    }

    /// One-click badge write. Any status may replace any other; the label
    /// set carries no transition rules.
    pub async fn update_status(
        &self,
        id: &str,
        status: AssignmentStatus,
    ) -> Result<Option<Assignment>, sqlx::Error> {
        let now = Utc::now().naive_utc();
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            UPDATE assignments
            SET status = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, worker_id, project_id, date, start_time, end_time, status, notes, created_by, created_at, updated_at
            "#,
        )
        .bind(status)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(assignment)
    }

    /// Hard delete, no recovery path. Confirmation is the caller's job.
    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assignments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
