use super::{FetchError, ProjectQuery, ProjectSummary};

/// How responses from overlapping fetch cycles are applied.
///
/// A new cycle starts whenever the filters change, without cancelling the
/// previous request, so responses can settle out of order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseOrdering {
    /// Only the response to the most recently started cycle is applied.
    #[default]
    LatestIssued,
    /// Every response is applied as it settles; the last one to arrive wins.
    LastResolved,
}

/// Handed out when a fetch cycle begins and presented back when it settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Result of applying a response to the grid state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    Loaded(usize),
    Failed(FetchError),
    /// A newer cycle has started; the response was discarded.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// A search or category filter is active.
    NoMatches,
    /// Nothing has been added yet.
    NoProjects,
}

impl EmptyReason {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            EmptyReason::NoMatches => "Try adjusting your search or filters",
            EmptyReason::NoProjects => "Projects will appear here once they are added",
        }
    }
}

/// Which of the three grid views to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridDisplay<'a> {
    Loading,
    Empty(EmptyReason),
    Populated(&'a [ProjectSummary]),
}

/// Owned copy of a [`GridDisplay`].
///
/// Equal whenever the rendered grid would be, so it can be memoised apart
/// from the share dialog fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    Loading,
    Empty(EmptyReason),
    Populated(Vec<ProjectSummary>),
}

impl From<GridDisplay<'_>> for GridView {
    fn from(display: GridDisplay<'_>) -> Self {
        match display {
            GridDisplay::Loading => GridView::Loading,
            GridDisplay::Empty(reason) => GridView::Empty(reason),
            GridDisplay::Populated(items) => GridView::Populated(items.to_vec()),
        }
    }
}

/// View state of the project grid.
#[derive(Debug, Clone)]
pub struct GridState {
    items: Vec<ProjectSummary>,
    loading: bool,
    selected: Option<ProjectSummary>,
    share_open: bool,
    query: ProjectQuery,
    generation: u64,
    ordering: ResponseOrdering,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(ResponseOrdering::default())
    }
}

impl GridState {
    /// Starts out loading, since a fetch is issued as soon as the grid mounts.
    #[must_use]
    pub fn new(ordering: ResponseOrdering) -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            selected: None,
            share_open: false,
            query: ProjectQuery::default(),
            generation: 0,
            ordering,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[ProjectSummary] {
        &self.items
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn selected(&self) -> Option<&ProjectSummary> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn is_share_open(&self) -> bool {
        self.share_open
    }

    #[must_use]
    pub fn query(&self) -> &ProjectQuery {
        &self.query
    }

    #[must_use]
    pub fn ordering(&self) -> ResponseOrdering {
        self.ordering
    }

    /// Marks a new fetch cycle for `query` as in flight.
    pub fn begin_fetch(&mut self, query: ProjectQuery) -> FetchTicket {
        self.generation += 1;
        self.query = query;
        self.loading = true;
        FetchTicket(self.generation)
    }

    #[must_use]
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Applies a settled response.
    ///
    /// On failure the previous items are kept. Loading is cleared for every
    /// applied response, successful or not.
    pub fn settle(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<ProjectSummary>, FetchError>,
    ) -> Settled {
        if self.ordering == ResponseOrdering::LatestIssued && !self.is_current(ticket) {
            return Settled::Stale;
        }

        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                Settled::Loaded(self.items.len())
            }
            Err(err) => Settled::Failed(err),
        }
    }

    pub fn request_share(&mut self, project: ProjectSummary) {
        self.selected = Some(project);
        self.share_open = true;
    }

    /// Hides the share dialog. The last selected project is remembered.
    pub fn close_share(&mut self) {
        self.share_open = false;
    }

    /// The dialog subject and whether it is open, if anything was ever selected.
    #[must_use]
    pub fn share_dialog(&self) -> Option<(&ProjectSummary, bool)> {
        self.selected.as_ref().map(|p| (p, self.share_open))
    }

    #[must_use]
    pub fn display(&self) -> GridDisplay<'_> {
        if self.loading {
            GridDisplay::Loading
        } else if self.items.is_empty() {
            let reason = if self.query.is_filtered() {
                EmptyReason::NoMatches
            } else {
                EmptyReason::NoProjects
            };
            GridDisplay::Empty(reason)
        } else {
            GridDisplay::Populated(&self.items)
        }
    }

    #[must_use]
    pub fn view(&self) -> GridView {
        self.display().into()
    }
}
