//! Project catalogue: the query, view state and fetch plumbing behind the
//! project grid.
//!
//! Everything here compiles for both the server and the browser. Database
//! access lives in [`crate::db`] and is only reached through the server
//! functions in [`api`].

pub mod api;
pub mod fetch;
pub mod notify;
pub mod query;
pub mod state;

pub use api::{list_categories, list_projects, ServerSource};
pub use fetch::{FetchController, FetchError, ProjectSource, SharedSource};
pub use notify::{Notifier, Toast, ToastNotifier, ToastQueue, LOAD_FAILED_MESSAGE};
pub use query::{ProjectOrder, ProjectQuery};
pub use state::{
    EmptyReason, FetchTicket, GridDisplay, GridState, GridView, ResponseOrdering, Settled,
};

/// A project as shown on a card.
///
/// Identifiers and timestamps travel as strings so the type stays free of
/// server-only dependencies.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub categories: Vec<String>,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

impl ProjectSummary {
    /// Calendar date part of `created_at`, or the raw value if it is too short.
    #[must_use]
    pub fn created_on(&self) -> &str {
        self.created_at.get(..10).unwrap_or(&self.created_at)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::ProjectSummary;

    pub fn project(id: &str, title: &str, categories: &[&str]) -> ProjectSummary {
        ProjectSummary {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            url: format!("https://example.com/{id}"),
            categories: categories.iter().map(ToString::to_string).collect(),
            created_at: "2024-05-01T12:00:00+00:00".to_string(),
        }
    }
}
