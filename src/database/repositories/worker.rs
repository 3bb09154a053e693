use sqlx::SqlitePool;

use crate::database::models::WorkerProfile;
use crate::database::types::WorkerProfileRow;

const PROFILE_SELECT: &str = r#"
    SELECT w.id, w.user_id, w.partner_id, w.worker_type,
           COALESCE(w.display_name, u.name) AS name,
           u.email, u.phone,
           pt.name AS partner_name, pt.category AS partner_category,
           w.skills, w.certifications, w.hourly_rate, w.daily_rate,
           w.notes, w.is_active, w.created_at, w.updated_at
    FROM workers w
    JOIN users u ON u.id = w.user_id
    LEFT JOIN partners pt ON pt.id = w.partner_id
"#;

/// Read-only view over the worker roster. Workers themselves are created
/// and edited in AGORA.
pub struct WorkerRepository {
    pool: SqlitePool,
}

impl WorkerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<WorkerProfile>, sqlx::Error> {
        let rows = sqlx::query_as::<_, WorkerProfileRow>(&format!("{PROFILE_SELECT} ORDER BY name"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|row| row.into()).collect())
    }

    /// Workers eligible for new placements, for the assignment form.
    pub async fn list_active(&self) -> Result<Vec<WorkerProfile>, sqlx::Error> {
        let rows = sqlx::query_as::<_, WorkerProfileRow>(&format!(
            "{PROFILE_SELECT} WHERE w.is_active = 1 ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| row.into()).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<WorkerProfile>, sqlx::Error> {
        let row =
            sqlx::query_as::<_, WorkerProfileRow>(&format!("{PROFILE_SELECT} WHERE w.id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|r| r.into()))
    }
}
