use gloo_timers::future::TimeoutFuture;
use inkflow_shared::{render::render_post_body, PostStore};
use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::{api, components::raw_html::RawHtml, utils};

/// Reader deep-link interface: the post is selected by exact slug match
/// against the `slug` query parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostQuery {
    #[serde(default)]
    pub slug: Option<String>,
}

#[function_component(PostDetailPage)]
pub fn post_detail_page() -> Html {
    let location = use_location();
    let slug = location
        .as_ref()
        .and_then(|loc| loc.query::<PostQuery>().ok())
        .unwrap_or_default()
        .slug
        .filter(|slug| !slug.is_empty());

    let store = use_state(|| None::<PostStore>);
    let load_error = use_state(|| false);
    let copied = use_state(|| false);

    {
        let store = store.clone();
        let load_error = load_error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_posts().await {
                    Ok(posts) => store.set(Some(PostStore::new(posts))),
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch posts: {}", err).into(),
                        );
                        load_error.set(true);
                    },
                }
            });
            || ()
        });
    }

    {
        let store_dep = (*store).clone();
        let slug_dep = slug.clone();
        use_effect_with((store_dep, slug_dep), move |(store, slug)| {
            let title = store
                .as_ref()
                .zip(slug.as_deref())
                .and_then(|(store, slug)| store.find_by_slug(slug))
                .map(|post| post.title.clone());
            if let Some(title) = title {
                utils::set_document_title(&format!("{} • Inkflow", title));
            }
            || ()
        });
    }

    let on_copy = {
        let copied = copied.clone();
        Callback::from(move |_| {
            let copied = copied.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if utils::copy_to_clipboard(&utils::current_url()).await {
                    copied.set(true);
                    TimeoutFuture::new(1200).await;
                    copied.set(false);
                } else {
                    utils::alert("Could not copy link.");
                }
            });
        })
    };

    let body = if *load_error {
        html! { <p class="muted">{ "Could not load posts.json" }</p> }
    } else {
        match (&slug, store.as_ref()) {
            (None, _) => html! { <p class="muted">{ "Missing article slug." }</p> },
            (Some(_), None) => html! { <p class="muted">{ "Loading article…" }</p> },
            (Some(slug), Some(store)) => match store.find_by_slug(slug) {
                None => html! { <p class="muted">{ "Article not found." }</p> },
                Some(post) => {
                    let tweet_url = utils::tweet_intent_url(&post.title, &utils::current_url());
                    html! {
                        <>
                            <div class="post-meta">
                                <span class="badge">{ utils::format_date(&post.date) }</span>
                                { for post.tags.iter().map(|tag| html! {
                                    <span class="badge accent">{ format!("#{}", tag) }</span>
                                }) }
                            </div>
                            <h1>{ &post.title }</h1>
                            <p class="muted">{ &post.excerpt }</p>
                            <RawHtml
                                html={AttrValue::from(render_post_body(post))}
                                class={classes!("content")}
                            />
                            <div class="share-row">
                                <button class="button secondary" onclick={on_copy}>
                                    { if *copied { "Copied!" } else { "Copy link" } }
                                </button>
                                <a
                                    class="button secondary"
                                    href={tweet_url}
                                    target="_blank"
                                    rel="noopener"
                                >
                                    { "Share" }
                                </a>
                            </div>
                        </>
                    }
                },
            },
        }
    };

    html! {
        <main class="container">
            <article class="card article">
                { body }
            </article>
        </main>
    }
}
