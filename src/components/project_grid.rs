use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{LoadingSpinner, ProjectCard, ShareDialog};
use crate::catalog::{
    FetchController, GridState, GridView, ProjectQuery, ProjectSummary, ResponseOrdering,
    ServerSource, SharedSource, ToastNotifier,
};

/// Reactive state behind a [`ProjectGrid`].
#[derive(Clone, Copy)]
pub struct GridSignals {
    pub state: RwSignal<GridState>,
    /// What the grid body shows; unaffected by the share dialog.
    pub view: Memo<GridView>,
}

/// Wires the filter inputs to fetch cycles.
///
/// Projects are read from the [`SharedSource`] in context, or from the
/// server functions if there is none. One cycle starts on mount and one per
/// distinct query after that.
pub fn use_project_grid(
    search_query: MaybeProp<String>,
    selected_category: MaybeProp<String>,
    ordering: ResponseOrdering,
) -> GridSignals {
    let source = use_context::<SharedSource>().unwrap_or_else(|| SharedSource::new(ServerSource));
    let notifier = use_context::<ToastNotifier>().unwrap_or_default();
    let controller = FetchController::new(source, notifier);
    let state = RwSignal::new(GridState::new(ordering));

    let query = Memo::new(move |_| {
        ProjectQuery::new(
            search_query.get().unwrap_or_default(),
            selected_category.get(),
        )
    });

    Effect::new(move |_| {
        let query = query.get();
        let Some(ticket) = state.try_update(|s| s.begin_fetch(query.clone())) else {
            return;
        };

        let controller = controller.clone();
        spawn_local(async move {
            let result = controller.fetch(&query).await;
            state.try_update(|s| controller.settle(s, ticket, result));
        });
    });

    let view = Memo::new(move |_| state.with(GridState::view));
    GridSignals { state, view }
}

/// Searchable grid of projects.
///
/// Fetches on mount and again whenever the search text or category changes.
/// Changes are not debounced: every distinct value issues one request.
#[component]
pub fn ProjectGrid(
    /// Title substring to search for
    #[prop(into, optional)]
    search_query: MaybeProp<String>,
    /// Category label to restrict to
    #[prop(into, optional)]
    selected_category: MaybeProp<String>,
    /// How overlapping responses are applied
    #[prop(optional)]
    ordering: ResponseOrdering,
) -> impl IntoView {
    let GridSignals { state, view: body } = use_project_grid(search_query, selected_category, ordering);

    let on_share = Callback::new(move |project: ProjectSummary| {
        state.update(|s| s.request_share(project));
    });
    let on_close = Callback::new(move |()| state.update(GridState::close_share));
    let share_open = Signal::derive(move || state.with(GridState::is_share_open));
    let selected = Memo::new(move |_| state.with(|s| s.selected().cloned()));

    view! {
        {move || match body.get() {
            GridView::Loading => view! { <LoadingSpinner /> }.into_any(),
            GridView::Empty(reason) => {
                view! { <ProjectGridEmpty message=reason.message() /> }.into_any()
            }
            GridView::Populated(items) => {
                view! {
                    <ul class="project-list">
                        {items
                            .into_iter()
                            .map(|project| {
                                view! { <ProjectCard project=project on_share=on_share /> }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                    .into_any()
            }
        }}
        {move || {
            selected
                .get()
                .map(|project| {
                    view! { <ShareDialog is_open=share_open on_close=on_close project=project /> }
                })
        }}
    }
}

#[component]
pub fn ProjectGridEmpty(
    /// Explanation shown below the heading
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="project-empty">
            <svg viewBox="0 0 200 200" class="project-empty-art">
                <defs>
                    <linearGradient id="warmGrad" x1="0%" y1="0%" x2="100%" y2="100%">
                        <stop offset="0%" style="stop-color:#e0dbd4;stop-opacity:0.3" />
                        <stop offset="100%" style="stop-color:#8b7355;stop-opacity:0.1" />
                    </linearGradient>
                </defs>
                <circle cx="100" cy="100" r="80" fill="none" stroke="#e0dbd4" stroke-width="1"/>
                <circle cx="100" cy="100" r="40" fill="none" stroke="#e0dbd4" stroke-width="1"/>
                <line x1="20" y1="100" x2="180" y2="100" stroke="#e0dbd4" stroke-width="1"/>
                <circle cx="100" cy="100" r="8" fill="url(#warmGrad)"/>
            </svg>
            <h3 class="project-empty-title">"No projects found"</h3>
            <p class="project-empty-text">{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::future::poll_fn;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::task::{Poll, Waker};

    use any_spawner::Executor;
    use async_trait::async_trait;
    use leptos::reactive::owner::Owner;

    use super::*;
    use crate::catalog::fixtures::project;
    use crate::catalog::{FetchError, ProjectSource};

    #[derive(Default)]
    struct Gate {
        open: bool,
        waiting: Vec<Waker>,
        seen: Vec<ProjectQuery>,
    }

    /// Serves a fixed table, but holds every response until released.
    #[derive(Clone)]
    struct HeldSource {
        rows: Vec<ProjectSummary>,
        gate: Arc<Mutex<Gate>>,
    }

    impl HeldSource {
        fn new(rows: Vec<ProjectSummary>) -> Self {
            Self {
                rows,
                gate: Arc::default(),
            }
        }

        fn seen(&self) -> Vec<ProjectQuery> {
            self.gate.lock().unwrap().seen.clone()
        }

        fn hold(&self) {
            self.gate.lock().unwrap().open = false;
        }

        fn release(&self) {
            let mut gate = self.gate.lock().unwrap();
            gate.open = true;
            for waker in gate.waiting.drain(..) {
                waker.wake();
            }
        }
    }

    #[async_trait(?Send)]
    impl ProjectSource for HeldSource {
        async fn list_projects(
            &self,
            query: &ProjectQuery,
        ) -> Result<Vec<ProjectSummary>, FetchError> {
            self.gate.lock().unwrap().seen.push(query.clone());
            poll_fn(|cx| {
                let mut gate = self.gate.lock().unwrap();
                if gate.open {
                    Poll::Ready(())
                } else {
                    gate.waiting.push(cx.waker().clone());
                    Poll::Pending
                }
            })
            .await;
            Ok(self
                .rows
                .iter()
                .filter(|p| query.matches(p))
                .cloned()
                .collect())
        }
    }

    fn table() -> Vec<ProjectSummary> {
        vec![
            project("3", "World Map Viewer", &["gis", "web"]),
            project("2", "Terminal Mapper", &["cli"]),
            project("1", "Sound Lab", &["audio", "web"]),
        ]
    }

    struct Mounted {
        _owner: Owner,
        source: HeldSource,
        search: RwSignal<String>,
        category: RwSignal<Option<String>>,
        grid: GridSignals,
    }

    fn mount(ordering: ResponseOrdering) -> Mounted {
        _ = Executor::init_futures_executor();
        let owner = Owner::new();
        owner.set();

        let source = HeldSource::new(table());
        provide_context(SharedSource::new(source.clone()));

        let search = RwSignal::new(String::new());
        let category = RwSignal::new(None::<String>);
        let grid = use_project_grid(
            Signal::derive(move || Some(search.get())).into(),
            Signal::derive(move || category.get()).into(),
            ordering,
        );

        Mounted {
            _owner: owner,
            source,
            search,
            category,
            grid,
        }
    }

    fn ids(view: &GridView) -> Vec<&str> {
        let GridView::Populated(items) = view else {
            return Vec::new();
        };
        items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn fetches_on_mount_and_once_per_distinct_query() {
        let m = mount(ResponseOrdering::default());

        Executor::poll_local();
        assert_eq!(m.source.seen(), vec![ProjectQuery::default()]);
        assert_eq!(m.grid.view.get_untracked(), GridView::Loading);

        m.source.release();
        Executor::poll_local();
        assert_eq!(ids(&m.grid.view.get_untracked()), ["3", "2", "1"]);

        m.source.hold();
        m.search.set("map".to_string());
        Executor::poll_local();
        assert_eq!(m.source.seen().len(), 2);
        assert_eq!(m.source.seen()[1], ProjectQuery::new("map", None));
        assert_eq!(m.grid.view.get_untracked(), GridView::Loading);

        // same value again: the memoised query does not change
        m.search.set("map".to_string());
        Executor::poll_local();
        assert_eq!(m.source.seen().len(), 2);

        m.source.release();
        Executor::poll_local();
        assert_eq!(ids(&m.grid.view.get_untracked()), ["3", "2"]);

        m.category.set(Some("web".to_string()));
        Executor::poll_local();
        assert_eq!(
            m.source.seen()[2],
            ProjectQuery::new("map", Some("web".to_string()))
        );
        assert_eq!(ids(&m.grid.view.get_untracked()), ["3"]);
    }

    #[test]
    fn filtered_empty_result_renders_no_matches() {
        let m = mount(ResponseOrdering::default());
        m.source.release();
        m.search.set("nothing like this".to_string());
        Executor::poll_local();

        assert_eq!(
            m.grid.view.get_untracked(),
            GridView::Empty(crate::catalog::EmptyReason::NoMatches)
        );
    }

    #[test]
    fn overlapping_cycles_apply_only_the_latest() {
        let m = mount(ResponseOrdering::LatestIssued);
        Executor::poll_local();

        m.search.set("m".to_string());
        Executor::poll_local();
        m.search.set("sound".to_string());
        Executor::poll_local();
        assert_eq!(m.source.seen().len(), 3);

        m.source.release();
        Executor::poll_local();
        assert_eq!(ids(&m.grid.view.get_untracked()), ["1"]);
        assert!(!m.grid.state.with_untracked(GridState::is_loading));
    }

    #[test]
    fn share_toggle_does_not_rerender_cards() {
        let m = mount(ResponseOrdering::default());
        m.source.release();
        Executor::poll_local();

        let renders = Arc::new(AtomicUsize::new(0));
        Effect::new({
            let renders = Arc::clone(&renders);
            let view = m.grid.view;
            move |_| {
                view.track();
                renders.fetch_add(1, Ordering::SeqCst);
            }
        });
        Executor::poll_local();
        let before = renders.load(Ordering::SeqCst);

        let first = table().remove(0);
        m.grid.state.update(|s| s.request_share(first.clone()));
        Executor::poll_local();
        m.grid.state.update(GridState::close_share);
        Executor::poll_local();

        assert_eq!(renders.load(Ordering::SeqCst), before);
        assert_eq!(
            m.grid.state.with_untracked(|s| s.selected().cloned()),
            Some(first)
        );
    }
}
