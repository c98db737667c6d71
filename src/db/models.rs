use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::ProjectSummary;

/// A row of the `projects` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProjectRecord {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub categories: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

/// Fields for inserting a project
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub categories: Vec<String>,
    /// Defaults to the insertion time
    pub created_at: Option<DateTime<Utc>>,
}

impl From<ProjectRecord> for ProjectSummary {
    fn from(record: ProjectRecord) -> Self {
        Self {
            id: record.id.to_string(),
            title: record.title,
            description: record.description,
            url: record.url,
            categories: record.categories.unwrap_or_default(),
            created_at: record.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(categories: Option<Vec<String>>) -> ProjectRecord {
        ProjectRecord {
            id: Uuid::nil(),
            title: "World Map Viewer".to_string(),
            description: Some("Tiles and layers".to_string()),
            url: "https://example.com/map".to_string(),
            categories,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn record_into_summary() {
        let summary = ProjectSummary::from(record(Some(vec!["gis".to_string()])));
        assert_eq!(summary.id, "00000000-0000-0000-0000-000000000000");
        assert_eq!(summary.title, "World Map Viewer");
        assert_eq!(summary.categories, vec!["gis".to_string()]);
        assert_eq!(summary.created_at, "2024-05-01T12:30:00Z");
        assert_eq!(summary.created_on(), "2024-05-01");
    }

    #[test]
    fn null_categories_become_empty() {
        let summary = ProjectSummary::from(record(None));
        assert!(summary.categories.is_empty());
    }
}
