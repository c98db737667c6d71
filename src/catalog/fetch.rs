use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use leptos::logging;

use super::{
    FetchTicket, GridState, Notifier, ProjectQuery, ProjectSummary, Settled, LOAD_FAILED_MESSAGE,
};

/// Any failure while reading projects from the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to fetch projects: {cause}")]
pub struct FetchError {
    cause: String,
}

impl FetchError {
    #[must_use]
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    #[must_use]
    pub fn cause(&self) -> &str {
        &self.cause
    }
}

impl From<leptos::prelude::ServerFnError> for FetchError {
    fn from(err: leptos::prelude::ServerFnError) -> Self {
        Self::new(err.to_string())
    }
}

/// Somewhere projects can be listed from.
#[async_trait(?Send)]
pub trait ProjectSource {
    async fn list_projects(&self, query: &ProjectQuery) -> Result<Vec<ProjectSummary>, FetchError>;
}

/// A [`ProjectSource`] that can be put in reactive context.
///
/// The grid looks one up on mount and falls back to the server functions
/// when none was provided.
#[derive(Clone)]
pub struct SharedSource(Arc<dyn ProjectSource + Send + Sync>);

impl SharedSource {
    #[must_use]
    pub fn new(source: impl ProjectSource + Send + Sync + 'static) -> Self {
        Self(Arc::new(source))
    }
}

impl fmt::Debug for SharedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSource").finish_non_exhaustive()
    }
}

#[async_trait(?Send)]
impl ProjectSource for SharedSource {
    async fn list_projects(&self, query: &ProjectQuery) -> Result<Vec<ProjectSummary>, FetchError> {
        self.0.list_projects(query).await
    }
}

/// Runs fetch cycles against a [`ProjectSource`] and reports failures
/// through a [`Notifier`].
#[derive(Debug, Clone, Copy)]
pub struct FetchController<S, N> {
    source: S,
    notifier: N,
}

impl<S, N> FetchController<S, N>
where
    S: ProjectSource,
    N: Notifier,
{
    #[must_use]
    pub fn new(source: S, notifier: N) -> Self {
        Self { source, notifier }
    }

    /// Issues one read for `query`. Never retried.
    pub async fn fetch(&self, query: &ProjectQuery) -> Result<Vec<ProjectSummary>, FetchError> {
        self.source.list_projects(query).await
    }

    /// Applies a settled response to `state`, logging and notifying on
    /// failure.
    pub fn settle(
        &self,
        state: &mut GridState,
        ticket: FetchTicket,
        result: Result<Vec<ProjectSummary>, FetchError>,
    ) -> Settled {
        let settled = state.settle(ticket, result);
        match &settled {
            Settled::Failed(err) => {
                logging::error!("error fetching projects: {err}");
                self.notifier.notify_error(LOAD_FAILED_MESSAGE);
            }
            Settled::Stale => {
                logging::debug_warn!("discarded stale project response {ticket:?}");
            }
            Settled::Loaded(_) => {}
        }
        settled
    }

    /// One complete cycle when the state is not shared with anything else.
    pub async fn run(&self, state: &mut GridState, query: ProjectQuery) -> Settled {
        let ticket = state.begin_fetch(query.clone());
        let result = self.fetch(&query).await;
        self.settle(state, ticket, result)
    }
}
