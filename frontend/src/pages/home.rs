use inkflow_shared::PostStore;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::{api, components::post_card::PostCard};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let store = use_state(PostStore::default);
    let loading = use_state(|| true);
    let load_error = use_state(|| false);

    let query = use_state(String::new);
    let selected_tag = use_state(String::new);
    let active_chip = use_state(|| None::<String>);
    let oldest_first = use_state(|| false);

    {
        let store = store.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_posts().await {
                    Ok(posts) => {
                        store.set(PostStore::new(posts));
                        loading.set(false);
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch posts: {}", err).into(),
                        );
                        load_error.set(true);
                        loading.set(false);
                    },
                }
            });
            || ()
        });
    }

    let tags = store.unique_tags();

    // Both the select and the chip row narrow the list; a post must carry
    // every active tag.
    let mut required_tags = Vec::new();
    if !selected_tag.is_empty() {
        required_tags.push((*selected_tag).clone());
    }
    if let Some(chip) = (*active_chip).clone() {
        required_tags.push(chip);
    }
    let visible = store.filtered(&query, &required_tags, *oldest_first);

    let on_query = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            query.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_tag = {
        let selected_tag = selected_tag.clone();
        Callback::from(move |e: Event| {
            selected_tag.set(e.target_unchecked_into::<HtmlSelectElement>().value());
        })
    };

    let on_sort = {
        let oldest_first = oldest_first.clone();
        Callback::from(move |e: Event| {
            oldest_first.set(e.target_unchecked_into::<HtmlSelectElement>().value() == "old");
        })
    };

    let chips = tags.iter().cloned().map(|tag| {
        let is_active = active_chip.as_deref() == Some(tag.as_str());
        let onclick = {
            let active_chip = active_chip.clone();
            let tag = tag.clone();
            Callback::from(move |_| {
                // clicking the active chip toggles it off
                if active_chip.as_deref() == Some(tag.as_str()) {
                    active_chip.set(None);
                } else {
                    active_chip.set(Some(tag.clone()));
                }
            })
        };
        html! {
            <button
                type="button"
                class={classes!("chip", is_active.then_some("active"))}
                onclick={onclick}
            >
                { tag }
            </button>
        }
    });

    let body = if *loading {
        html! { <p class="muted">{ "Loading articles…" }</p> }
    } else if *load_error {
        html! {
            <div class="card">
                <p class="muted">{ "Could not load posts.json" }</p>
            </div>
        }
    } else if visible.is_empty() {
        html! {
            <div class="card">
                <p class="muted">{ "No matching articles." }</p>
            </div>
        }
    } else {
        html! {
            <div class="post-grid">
                { for visible.into_iter().map(|post| html! { <PostCard post={post} /> }) }
            </div>
        }
    };

    html! {
        <main class="container">
            <section class="hero">
                <h1>{ "Articles" }</h1>
                <p class="muted">{ "Notes, essays and sources, all from one JSON file." }</p>
            </section>

            <section class="controls">
                <input
                    class="input"
                    type="search"
                    placeholder="Search articles…"
                    value={(*query).clone()}
                    oninput={on_query}
                />
                <select class="select" onchange={on_tag}>
                    <option value="" selected={selected_tag.is_empty()}>{ "All tags" }</option>
                    { for tags.iter().map(|tag| html! {
                        <option
                            value={tag.clone()}
                            selected={*selected_tag == *tag}
                        >
                            { tag }
                        </option>
                    }) }
                </select>
                <select class="select" onchange={on_sort}>
                    <option value="new" selected={!*oldest_first}>{ "Newest first" }</option>
                    <option value="old" selected={*oldest_first}>{ "Oldest first" }</option>
                </select>
            </section>

            <section class="chips">
                { for chips }
            </section>

            { body }
        </main>
    }
}
