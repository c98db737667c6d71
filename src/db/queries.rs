use sqlx::PgPool;
use uuid::Uuid;

use super::models::{NewProject, ProjectRecord};
use crate::catalog::ProjectQuery;

/// List projects matching `query`, newest first.
///
/// The title filter is a case-insensitive literal substring match and the
/// category filter requires an exact label in `categories`.
#[tracing::instrument(skip(pool), fields(filtered = query.is_filtered()))]
pub async fn list_projects(
    pool: &PgPool,
    query: &ProjectQuery,
) -> Result<Vec<ProjectRecord>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ProjectRecord>(
        r#"
        SELECT id, title, description, url, categories, created_at
        FROM projects
        WHERE ($1::TEXT IS NULL OR title ILIKE $1)
          AND ($2::TEXT IS NULL OR $2 = ANY(categories))
        ORDER BY created_at DESC
        "#,
    )
    .bind(query.title_pattern())
    .bind(query.category())
    .fetch_all(pool)
    .await?;

    tracing::debug!(count = rows.len(), "listed projects");
    Ok(rows)
}

/// Distinct category labels across all projects, sorted.
#[tracing::instrument(skip(pool))]
pub async fn list_categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r#"
        SELECT DISTINCT unnest(categories) AS category
        FROM projects
        WHERE categories IS NOT NULL AND array_length(categories, 1) > 0
        ORDER BY 1
        "#,
    )
    .fetch_all(pool)
    .await
}

#[tracing::instrument(skip(pool, project), fields(project.title = %project.title))]
pub async fn insert_project(pool: &PgPool, project: &NewProject) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO projects (title, description, url, categories, created_at)
        VALUES ($1, $2, $3, $4, COALESCE($5, now()))
        RETURNING id
        "#,
    )
    .bind(&project.title)
    .bind(project.description.as_deref())
    .bind(&project.url)
    .bind(&project.categories)
    .bind(project.created_at)
    .fetch_one(pool)
    .await
}
