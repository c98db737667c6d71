use leptos::prelude::*;

use crate::catalog::ProjectSummary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub label: &'static str,
    pub href: String,
}

/// `mailto:` URI with no recipient.
///
/// Spaces are written as `%20`; mail clients do not read `+` as a space.
fn mailto(subject: &str, body: &str) -> String {
    let encode = |value: &str| {
        url::form_urlencoded::byte_serialize(value.as_bytes())
            .collect::<String>()
            .replace('+', "%20")
    };
    format!("mailto:?subject={}&body={}", encode(subject), encode(body))
}

/// Links for sharing `project` on a few common services, plus e-mail.
#[must_use]
pub fn share_links(project: &ProjectSummary) -> Vec<ShareLink> {
    let post = format!("{} {}", project.title, project.url);
    let targets: [(&'static str, &str, Vec<(&str, &str)>); 3] = [
        (
            "x",
            "https://twitter.com/intent/tweet",
            vec![("text", project.title.as_str()), ("url", project.url.as_str())],
        ),
        (
            "linkedin",
            "https://www.linkedin.com/sharing/share-offsite/",
            vec![("url", project.url.as_str())],
        ),
        (
            "bluesky",
            "https://bsky.app/intent/compose",
            vec![("text", post.as_str())],
        ),
    ];

    targets
        .into_iter()
        .filter_map(|(label, base, params)| {
            url::Url::parse_with_params(base, &params)
                .ok()
                .map(|u| ShareLink {
                    label,
                    href: u.into(),
                })
        })
        .chain(std::iter::once(ShareLink {
            label: "email",
            href: mailto(&project.title, &project.url),
        }))
        .collect()
}

fn copy_to_clipboard(text: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use leptos::wasm_bindgen::prelude::wasm_bindgen;

        #[wasm_bindgen(
            inline_js = "export function copy_text(value) { if (navigator.clipboard) { navigator.clipboard.writeText(value); } }"
        )]
        extern "C" {
            fn copy_text(value: &str);
        }

        copy_text(text);
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = text;
}

/// Modal for sharing a single project.
///
/// Always mounted while a project is selected; `is_open` only toggles its
/// visibility. Clicking the backdrop or the close button calls `on_close`.
#[component]
pub fn ShareDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    project: ProjectSummary,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let links = share_links(&project);
    let url = project.url.clone();
    let url_for_copy = url.clone();

    Effect::new(move |_| {
        if !is_open.get() {
            set_copied.set(false);
        }
    });

    view! {
        <div
            class="share-backdrop"
            hidden=move || !is_open.get()
            on:click=move |_| on_close.run(())
        >
            <div
                class="share-dialog"
                role="dialog"
                aria-modal="true"
                aria-labelledby="share-dialog-title"
                on:click=|ev| ev.stop_propagation()
            >
                <h2 id="share-dialog-title">"Share " {project.title}</h2>
                <div class="share-url">
                    <input type="text" readonly=true value=url />
                    <button
                        class="share-copy"
                        on:click=move |_| {
                            copy_to_clipboard(&url_for_copy);
                            set_copied.set(true);
                        }
                    >
                        {move || if copied.get() { "copied" } else { "copy link" }}
                    </button>
                </div>
                <ul class="share-links">
                    {links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a href=link.href target="_blank" rel="noopener noreferrer">
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
                <button class="share-close" on:click=move |_| on_close.run(())>
                    "close"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::project;

    #[test]
    fn share_links_encode_project_url() {
        let mut p = project("1", "World Map Viewer", &[]);
        p.url = "https://example.com/map?layer=roads".to_string();

        let links = share_links(&p);
        let labels: Vec<_> = links.iter().map(|l| l.label).collect();
        assert_eq!(labels, ["x", "linkedin", "bluesky", "email"]);

        let x = &links[0].href;
        assert!(x.starts_with("https://twitter.com/intent/tweet?"));
        assert!(x.contains("text=World+Map+Viewer"));
        assert!(x.contains("url=https%3A%2F%2Fexample.com%2Fmap%3Flayer%3Droads"));

        assert_eq!(
            links[3].href,
            "mailto:?subject=World%20Map%20Viewer&body=https%3A%2F%2Fexample.com%2Fmap%3Flayer%3Droads"
        );
    }

    #[test]
    fn mailto_keeps_plus_and_ampersand_literal() {
        let mut p = project("1", "C++ & Rust", &[]);
        p.url = "https://example.com/?a=1&b=2".to_string();

        let email = share_links(&p).pop().unwrap();
        assert_eq!(email.label, "email");
        assert_eq!(
            email.href,
            "mailto:?subject=C%2B%2B%20%26%20Rust&body=https%3A%2F%2Fexample.com%2F%3Fa%3D1%26b%3D2"
        );
    }

    #[test]
    fn share_links_linkedin_only_carries_url() {
        let p = project("1", "Atlas", &[]);
        let links = share_links(&p);
        assert_eq!(
            links[1].href,
            "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Fexample.com%2F1"
        );
    }
}
