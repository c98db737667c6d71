use leptos::logging;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::catalog::{list_categories, ToastNotifier};
use crate::components::{FilterBar, ProjectGrid, Toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(ToastNotifier::new());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/showcase.css"/>

        <Title text="Projects"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </main>
        </Router>
        <Toaster/>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(None::<String>);
    let categories = Resource::new(|| (), |()| list_categories());

    view! {
        <div class="container">
            <header class="hero">
                <h1>"Projects"</h1>
                <p class="tagline">"things people have built"</p>
            </header>

            <Transition fallback=|| ()>
                {move || Suspend::new(async move {
                    let labels = categories.await.unwrap_or_else(|err| {
                        logging::error!("error fetching categories: {err}");
                        Vec::new()
                    });
                    view! {
                        <FilterBar
                            search=search
                            on_search={move |text: String| set_search.set(text)}
                            category=category
                            on_category={move |label: Option<String>| set_category.set(label)}
                            categories=labels
                        />
                    }
                })}
            </Transition>

            <section class="projects">
                <ProjectGrid
                    search_query=Signal::derive(move || Some(search.get()))
                    selected_category=Signal::derive(move || category.get())
                />
            </section>
        </div>
    }
}
