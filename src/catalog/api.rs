use async_trait::async_trait;
use leptos::prelude::*;

use super::{FetchError, ProjectQuery, ProjectSource, ProjectSummary};

#[cfg(feature = "ssr")]
fn pool() -> Result<sqlx::PgPool, crate::error::AppError> {
    use_context::<sqlx::PgPool>().ok_or(crate::error::AppError::NotConfigured("database pool"))
}

/// Projects matching `query`, newest first.
#[server]
pub async fn list_projects(query: ProjectQuery) -> Result<Vec<ProjectSummary>, ServerFnError> {
    use crate::error::AppError;

    let pool = pool().map_err(AppError::into_server_fn_error)?;
    let records = crate::db::list_projects(&pool, &query)
        .await
        .map_err(|e| AppError::from(e).into_server_fn_error())?;

    Ok(records.into_iter().map(ProjectSummary::from).collect())
}

/// Every category label in use, sorted.
#[server]
pub async fn list_categories() -> Result<Vec<String>, ServerFnError> {
    use crate::error::AppError;

    let pool = pool().map_err(AppError::into_server_fn_error)?;
    let categories = crate::db::list_categories(&pool)
        .await
        .map_err(|e| AppError::from(e).into_server_fn_error())?;

    Ok(categories)
}

/// [`ProjectSource`] backed by the [`list_projects`] server function.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerSource;

#[async_trait(?Send)]
impl ProjectSource for ServerSource {
    async fn list_projects(&self, query: &ProjectQuery) -> Result<Vec<ProjectSummary>, FetchError> {
        list_projects(query.clone()).await.map_err(FetchError::from)
    }
}
