use sqlx::SqlitePool;

use crate::database::models::{Project, ProjectWithClient};

/// Read-only view over sites. Projects are owned by AGORA; only
/// contracted or in-progress ones can receive placements.
pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_assignable(&self) -> Result<Vec<Project>, sqlx::Error> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, project_code, name, client_id, type AS project_type, status,
                   start_date, end_date, address, description, created_at, updated_at
            FROM projects
            WHERE status IN ('contracted', 'in_progress')
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    pub async fn find_with_client(
        &self,
        id: &str,
    ) -> Result<Option<ProjectWithClient>, sqlx::Error> {
        let project = sqlx::query_as::<_, ProjectWithClient>(
            r#"
            SELECT p.id, p.project_code, p.name, p.client_id, p.type AS project_type, p.status,
                   p.start_date, p.end_date, p.address, p.description, p.created_at, p.updated_at,
                   c.name AS client_name, c.contact_name AS client_contact,
                   c.phone AS client_phone, c.email AS client_email
            FROM projects p
            LEFT JOIN clients c ON c.id = p.client_id
            WHERE p.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }
}
