use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub value: Option<String>,
    pub label: String,
}

fn category_options(categories: Vec<String>) -> Vec<FilterOption> {
    std::iter::once(FilterOption {
        value: None,
        label: "all".to_string(),
    })
    .chain(categories.into_iter().map(|c| FilterOption {
        value: Some(c.clone()),
        label: c,
    }))
    .collect()
}

#[component]
pub fn FilterBar(
    #[prop(into)] search: Signal<String>,
    #[prop(into)] on_search: Callback<String>,
    #[prop(into)] category: Signal<Option<String>>,
    #[prop(into)] on_category: Callback<Option<String>>,
    #[prop(optional)] categories: Vec<String>,
) -> impl IntoView {
    let options = category_options(categories);
    let show_categories = options.len() > 1;

    view! {
        <div class="filter-bar">
            <input
                type="search"
                class="filter-search"
                placeholder="search projects"
                aria-label="Search projects by title"
                prop:value=move || search.get()
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
            {show_categories.then(|| view! {
                <div class="filter-group">
                    <span class="filter-label">"category"</span>
                    <div class="filter-options">
                        {options
                            .into_iter()
                            .map(|FilterOption { value, label }| {
                                let selected_value = value.clone();
                                let class = move || {
                                    if category.get() == selected_value {
                                        "filter-btn active"
                                    } else {
                                        "filter-btn"
                                    }
                                };
                                view! {
                                    <button
                                        class=class
                                        on:click=move |_| on_category.run(value.clone())
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_start_with_all() {
        let options = category_options(vec!["cli".to_string(), "web".to_string()]);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].value, None);
        assert_eq!(options[0].label, "all");
        assert_eq!(options[2].value.as_deref(), Some("web"));
    }

    #[test]
    fn no_categories_leaves_only_all() {
        assert_eq!(category_options(Vec::new()).len(), 1);
    }
}
