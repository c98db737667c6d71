use leptos::prelude::*;

use crate::catalog::ProjectSummary;

fn host_label(url: &str) -> Option<String> {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.trim_start_matches("www.").to_string()))
}

#[component]
pub fn ProjectCard(
    project: ProjectSummary,
    /// Invoked with this card's project when its share button is pressed
    #[prop(into)]
    on_share: Callback<ProjectSummary>,
) -> impl IntoView {
    let description_text = project.description.clone().unwrap_or_default();
    let host = host_label(&project.url);
    let created_on = project.created_on().to_string();
    let categories = project.categories.clone();
    let title = project.title.clone();
    let url = project.url.clone();
    let share_label = format!("Share {title}");

    view! {
        <li class="project-card">
            <div class="project-header">
                <h3>
                    <a href=url target="_blank" rel="noopener">{title}</a>
                </h3>
                <button
                    class="project-share"
                    aria-label=share_label.clone()
                    title=share_label
                    on:click=move |_| on_share.run(project.clone())
                >
                    "share"
                </button>
            </div>
            <p class="project-description">{description_text}</p>
            <ul class="project-categories">
                {categories
                    .into_iter()
                    .map(|c| view! { <li class="project-badge">{c}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            <div class="project-meta">
                {host.map(|h| view! { <span class="project-host">{h}</span> })}
                <time class="project-created">{created_on}</time>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_label_strips_www() {
        assert_eq!(
            host_label("https://www.example.com/x").as_deref(),
            Some("example.com")
        );
        assert_eq!(
            host_label("https://github.com/a/b").as_deref(),
            Some("github.com")
        );
    }

    #[test]
    fn host_label_invalid_url() {
        assert!(host_label("not a url").is_none());
    }
}
