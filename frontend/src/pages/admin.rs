use inkflow_shared::{
    post::{parse_tags, slugify, tags_to_field},
    Block, BlockKind, CalloutKind, EditorSession, PostStore, SourceItem, VideoProvider,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{api, components::raw_html::RawHtml, storage, utils};

/// Clone-mutate-set helper: every editor mutation goes through the session
/// so the preview is recomputed on the very next render.
fn apply(session: &UseStateHandle<EditorSession>, mutate: impl FnOnce(&mut EditorSession)) {
    let mut next = (**session).clone();
    mutate(&mut next);
    session.set(next);
}

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let session = use_state(EditorSession::default);
    let status = use_state(String::new);
    let filter = use_state(String::new);
    let add_kind = use_state(|| BlockKind::Paragraph);

    // Initial population: a saved local draft wins over the served
    // document, so a reload never loses in-progress work.
    {
        let session = session.clone();
        let status = status.clone();
        use_effect_with((), move |_| {
            if let Some(posts) = storage::load_draft() {
                session.set(EditorSession::new(PostStore::new(posts)));
                status.set("Loaded local draft".to_string());
            } else {
                wasm_bindgen_futures::spawn_local(async move {
                    match api::fetch_posts().await {
                        Ok(posts) => {
                            session.set(EditorSession::new(PostStore::new(posts)));
                            status.set("Loaded posts.json".to_string());
                        },
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("Failed to fetch posts: {}", err).into(),
                            );
                            status.set("Could not load posts.json".to_string());
                        },
                    }
                });
            }
            || ()
        });
    }

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            filter.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_load_server = {
        let session = session.clone();
        let status = status.clone();
        Callback::from(move |_| {
            let session = session.clone();
            let status = status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_posts().await {
                    Ok(posts) => {
                        session.set(EditorSession::new(PostStore::new(posts)));
                        status.set("Loaded posts.json".to_string());
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch posts: {}", err).into(),
                        );
                        status.set("Could not load posts.json".to_string());
                    },
                }
            });
        })
    };

    let on_import = {
        let session = session.clone();
        let status = status.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // reset so re-importing the same file fires another change event
            input.set_value("");

            let session = session.clone();
            let status = status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match utils::read_file_text(&file).await {
                    Some(raw) => {
                        let mut next = (*session).clone();
                        match next.import_json(&raw) {
                            Ok(()) => {
                                session.set(next);
                                status.set(format!("Imported {}", file.name()));
                            },
                            Err(err) => status.set(format!("Import failed: {}", err)),
                        }
                    },
                    None => status.set("Could not read file".to_string()),
                }
            });
        })
    };

    let on_export = {
        let session = session.clone();
        let status = status.clone();
        Callback::from(move |_| match session.export_json() {
            Ok(json) => {
                if utils::download_json("posts.json", &json) {
                    status.set("Exported posts.json (downloaded)".to_string());
                } else {
                    status.set("Could not export posts.json".to_string());
                }
            },
            Err(err) => {
                web_sys::console::error_1(&format!("Export failed: {}", err).into());
                status.set("Could not export posts.json".to_string());
            },
        })
    };

    let on_save_draft = {
        let session = session.clone();
        let status = status.clone();
        Callback::from(move |_| {
            if storage::save_draft(&session.store.posts) {
                status.set("Draft saved".to_string());
            } else {
                status.set("Could not save draft".to_string());
            }
        })
    };

    let on_load_draft = {
        let session = session.clone();
        let status = status.clone();
        Callback::from(move |_| match storage::load_draft() {
            Some(posts) => {
                session.set(EditorSession::new(PostStore::new(posts)));
                status.set("Loaded local draft".to_string());
            },
            None => status.set("No draft found".to_string()),
        })
    };

    let on_clear_draft = {
        let status = status.clone();
        Callback::from(move |_| {
            storage::clear_draft();
            status.set("Draft cleared".to_string());
        })
    };

    let on_new_post = {
        let session = session.clone();
        let status = status.clone();
        Callback::from(move |_| {
            apply(&session, |s| s.new_post(utils::now_ymd()));
            status.set("Created new post".to_string());
        })
    };

    let on_delete_post = {
        let session = session.clone();
        let status = status.clone();
        Callback::from(move |_| {
            apply(&session, |s| s.delete_selected());
            status.set("Deleted post".to_string());
        })
    };

    let on_add_kind = {
        let add_kind = add_kind.clone();
        Callback::from(move |e: Event| {
            let key = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(kind) = BlockKind::from_key(&key) {
                add_kind.set(kind);
            }
        })
    };

    let on_add_block = {
        let session = session.clone();
        let add_kind = add_kind.clone();
        Callback::from(move |_| {
            let kind = *add_kind;
            apply(&session, move |s| s.add_block(kind));
        })
    };

    let indices = session.store.filter_indices(&filter);
    let list = if indices.is_empty() {
        html! { <div class="muted">{ "No posts match." }</div> }
    } else {
        html! {
            { for indices.into_iter().map(|index| {
                let post = &session.store.posts[index];
                let active = session.selected == Some(index);
                let onclick = {
                    let session = session.clone();
                    let status = status.clone();
                    Callback::from(move |_| {
                        apply(&session, |s| s.select(index));
                        status.set("Editing post".to_string());
                    })
                };
                let title = if post.title.is_empty() {
                    "(untitled)".to_string()
                } else {
                    post.title.clone()
                };
                html! {
                    <div
                        class={classes!("card", "admin-item", active.then_some("active"))}
                        onclick={onclick}
                    >
                        <div class="post-meta">
                            <span class="badge">{ post.date.clone() }</span>
                            { for post.tags.iter().take(3).map(|tag| html! {
                                <span class="badge accent">{ format!("#{}", tag) }</span>
                            }) }
                        </div>
                        <div class="admin-item-title">{ title }</div>
                        <div class="muted mono">{ post.slug.clone() }</div>
                    </div>
                }
            }) }
        }
    };

    let editor = match session.selected_post() {
        None => html! {
            <div class="card">
                <p class="muted">{ "Select a post from the list, or create a new one." }</p>
            </div>
        },
        Some(post) => {
            let on_title = field_update(session.clone(), |post, value| post.title = value);
            let on_slug =
                field_update(session.clone(), |post, value| post.slug = value.trim().to_string());
            let on_date =
                field_update(session.clone(), |post, value| post.date = value.trim().to_string());
            let on_tags = field_update(session.clone(), |post, value| post.tags = parse_tags(&value));
            let on_excerpt = {
                let session = session.clone();
                Callback::from(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                    let mut next = (*session).clone();
                    if let Some(post) = next.selected_post_mut() {
                        post.excerpt = value;
                    }
                    session.set(next);
                })
            };

            let on_slug_from_title = {
                let session = session.clone();
                Callback::from(move |_| {
                    apply(&session, |s| {
                        if let Some(post) = s.selected_post_mut() {
                            post.slug = slugify(&post.title);
                        }
                    });
                })
            };

            let blocks = post.blocks.clone();
            let block_forms = if blocks.is_empty() {
                html! { <div class="muted">{ "No blocks yet. Use \u{201c}Add block\u{201d}." }</div> }
            } else {
                html! {
                    { for blocks.iter().enumerate().map(|(index, block)| {
                        block_editor(session.clone(), index, block)
                    }) }
                }
            };

            html! {
                <div class="editor">
                    <div class="field-grid">
                        <label class="field">
                            <span>{ "Title" }</span>
                            <input class="input" value={post.title.clone()} oninput={on_title} />
                        </label>
                        <label class="field">
                            <span>{ "Slug" }</span>
                            <div class="row">
                                <input
                                    class="input mono"
                                    value={post.slug.clone()}
                                    oninput={on_slug}
                                />
                                <button
                                    class="button secondary mini"
                                    onclick={on_slug_from_title}
                                >
                                    { "From title" }
                                </button>
                            </div>
                        </label>
                        <label class="field">
                            <span>{ "Date" }</span>
                            <input
                                class="input mono"
                                placeholder="YYYY-MM-DD"
                                value={post.date.clone()}
                                oninput={on_date}
                            />
                        </label>
                        <label class="field">
                            <span>{ "Tags (comma separated)" }</span>
                            <input
                                class="input"
                                value={tags_to_field(&post.tags)}
                                oninput={on_tags}
                            />
                        </label>
                        <label class="field">
                            <span>{ "Excerpt" }</span>
                            <textarea
                                class="input"
                                rows="2"
                                value={post.excerpt.clone()}
                                oninput={on_excerpt}
                            />
                        </label>
                    </div>

                    <h3>{ "Blocks" }</h3>
                    <div class="blocks">
                        { block_forms }
                    </div>

                    <div class="row add-block">
                        <select class="select" onchange={on_add_kind}>
                            { for BlockKind::ALL.iter().map(|kind| html! {
                                <option
                                    value={kind.key()}
                                    selected={*add_kind == *kind}
                                >
                                    { kind.label() }
                                </option>
                            }) }
                        </select>
                        <button class="button" onclick={on_add_block}>{ "Add block" }</button>
                        <button class="button secondary danger" onclick={on_delete_post}>
                            { "Delete post" }
                        </button>
                    </div>

                    <h3>{ "Preview" }</h3>
                    <RawHtml
                        html={AttrValue::from(session.preview_html())}
                        class={classes!("content", "preview")}
                    />
                </div>
            }
        },
    };

    html! {
        <main class="container admin">
            <div class="toolbar-row">
                <button class="button secondary" onclick={on_load_server}>
                    { "Load posts.json" }
                </button>
                <label class="button secondary">
                    { "Import JSON" }
                    <input
                        type="file"
                        accept="application/json"
                        class="file-input"
                        onchange={on_import}
                    />
                </label>
                <button class="button" onclick={on_export}>{ "Export" }</button>
                <button class="button secondary" onclick={on_save_draft}>{ "Save draft" }</button>
                <button class="button secondary" onclick={on_load_draft}>{ "Load draft" }</button>
                <button class="button secondary" onclick={on_clear_draft}>{ "Clear draft" }</button>
                <button class="button" onclick={on_new_post}>{ "New post" }</button>
                <span class="muted status">{ (*status).clone() }</span>
            </div>

            <div class="admin-columns">
                <aside class="post-list">
                    <input
                        class="input"
                        type="search"
                        placeholder="Filter posts…"
                        value={(*filter).clone()}
                        oninput={on_filter}
                    />
                    { list }
                </aside>
                <section class="editor-pane">
                    { editor }
                </section>
            </div>
        </main>
    }
}

/// Input binding for a post-level field.
fn field_update(
    session: UseStateHandle<EditorSession>,
    write: impl Fn(&mut inkflow_shared::Post, String) + 'static,
) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        let mut next = (*session).clone();
        if let Some(post) = next.selected_post_mut() {
            write(post, value);
        }
        session.set(next);
    })
}

/// Empty strings count as "absent" for the optional block fields.
fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// One form section per block: kind label, structure toolbar and the
/// kind-specific field bindings. Every binding mutates the block in place
/// through the session, which refreshes the preview.
fn block_editor(session: UseStateHandle<EditorSession>, index: usize, block: &Block) -> Html {
    let on_up = {
        let session = session.clone();
        Callback::from(move |_| apply(&session, |s| s.move_block_up(index)))
    };
    let on_down = {
        let session = session.clone();
        Callback::from(move |_| apply(&session, |s| s.move_block_down(index)))
    };
    let on_delete = {
        let session = session.clone();
        Callback::from(move |_| apply(&session, |s| s.delete_block(index)))
    };

    // Shorthand binders for the three flavors of control.
    let text_input = |write: fn(&mut Block, String)| {
        let session = session.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            apply(&session, move |s| {
                if let Some(block) = s.block_mut(index) {
                    write(block, value);
                }
            });
        })
    };
    let text_area = |write: fn(&mut Block, String)| {
        let session = session.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            apply(&session, move |s| {
                if let Some(block) = s.block_mut(index) {
                    write(block, value);
                }
            });
        })
    };
    let select_change = |write: fn(&mut Block, String)| {
        let session = session.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            apply(&session, move |s| {
                if let Some(block) = s.block_mut(index) {
                    write(block, value);
                }
            });
        })
    };

    let body = match block {
        Block::Paragraph { text } | Block::Heading { text } => {
            let on_text = text_area(|block, value| {
                if let Block::Paragraph { text } | Block::Heading { text } = block {
                    *text = value;
                }
            });
            html! {
                <textarea
                    class="input"
                    rows="3"
                    placeholder="Text…"
                    value={text.clone()}
                    oninput={on_text}
                />
            }
        },
        Block::List { items } => {
            let on_items = text_area(|block, value| {
                if let Block::List { items } = block {
                    *items = value.split('\n').map(|line| line.trim().to_string()).collect();
                }
            });
            html! {
                <>
                    <div class="help">{ "One item per line." }</div>
                    <textarea
                        class="input"
                        rows="5"
                        placeholder="Item 1\nItem 2"
                        value={items.join("\n")}
                        oninput={on_items}
                    />
                </>
            }
        },
        Block::Quote { text, by } => {
            let on_text = text_area(|block, value| {
                if let Block::Quote { text, .. } = block {
                    *text = value;
                }
            });
            let on_by = text_input(|block, value| {
                if let Block::Quote { by, .. } = block {
                    *by = optional(value);
                }
            });
            html! {
                <>
                    <textarea
                        class="input"
                        rows="3"
                        placeholder="Quote…"
                        value={text.clone()}
                        oninput={on_text}
                    />
                    <input
                        class="input"
                        placeholder="By (optional)"
                        value={by.clone().unwrap_or_default()}
                        oninput={on_by}
                    />
                </>
            }
        },
        Block::Callout { kind, title, text } => {
            let on_kind = select_change(|block, value| {
                if let Block::Callout { kind, .. } = block {
                    *kind = CalloutKind::from_key(&value);
                }
            });
            let on_title = text_input(|block, value| {
                if let Block::Callout { title, .. } = block {
                    *title = optional(value);
                }
            });
            let on_text = text_area(|block, value| {
                if let Block::Callout { text, .. } = block {
                    *text = value;
                }
            });
            html! {
                <>
                    <div class="row">
                        <select class="select" onchange={on_kind}>
                            <option value="note" selected={*kind == CalloutKind::Note}>
                                { "Note" }
                            </option>
                            <option value="hot" selected={*kind == CalloutKind::Hot}>
                                { "Hot take" }
                            </option>
                        </select>
                        <input
                            class="input"
                            placeholder="Title (optional)"
                            value={title.clone().unwrap_or_default()}
                            oninput={on_title}
                        />
                    </div>
                    <textarea
                        class="input"
                        rows="3"
                        placeholder="Callout text…"
                        value={text.clone()}
                        oninput={on_text}
                    />
                </>
            }
        },
        Block::Image { url, alt, caption } => {
            let on_url = text_input(|block, value| {
                if let Block::Image { url, .. } = block {
                    *url = value;
                }
            });
            let on_alt = text_input(|block, value| {
                if let Block::Image { alt, .. } = block {
                    *alt = optional(value);
                }
            });
            let on_caption = text_input(|block, value| {
                if let Block::Image { caption, .. } = block {
                    *caption = optional(value);
                }
            });
            html! {
                <>
                    <div class="row">
                        <input
                            class="input mono"
                            placeholder="https://image..."
                            value={url.clone()}
                            oninput={on_url}
                        />
                        <input
                            class="input"
                            placeholder="Alt text"
                            value={alt.clone().unwrap_or_default()}
                            oninput={on_alt}
                        />
                    </div>
                    <input
                        class="input"
                        placeholder="Caption (optional)"
                        value={caption.clone().unwrap_or_default()}
                        oninput={on_caption}
                    />
                </>
            }
        },
        Block::Video {
            provider,
            url,
            title,
            caption,
        } => {
            let on_provider = select_change(|block, value| {
                if let Block::Video { provider, .. } = block {
                    *provider = VideoProvider::from_key(&value);
                }
            });
            let on_url = text_input(|block, value| {
                if let Block::Video { url, .. } = block {
                    *url = value;
                }
            });
            let on_title = text_input(|block, value| {
                if let Block::Video { title, .. } = block {
                    *title = optional(value);
                }
            });
            let on_caption = text_input(|block, value| {
                if let Block::Video { caption, .. } = block {
                    *caption = optional(value);
                }
            });
            html! {
                <>
                    <div class="row">
                        <select class="select" onchange={on_provider}>
                            { for VideoProvider::ALL.iter().map(|candidate| html! {
                                <option
                                    value={candidate.as_str()}
                                    selected={*provider == *candidate}
                                >
                                    { candidate.label() }
                                </option>
                            }) }
                        </select>
                        <input
                            class="input mono"
                            placeholder="https://..."
                            value={url.clone()}
                            oninput={on_url}
                        />
                    </div>
                    <div class="row">
                        <input
                            class="input"
                            placeholder="Title (optional)"
                            value={title.clone().unwrap_or_default()}
                            oninput={on_title}
                        />
                        <input
                            class="input"
                            placeholder="Caption (optional)"
                            value={caption.clone().unwrap_or_default()}
                            oninput={on_caption}
                        />
                    </div>
                </>
            }
        },
        Block::Sources { items } => {
            let on_items = text_area(|block, value| {
                if let Block::Sources { items } = block {
                    *items = value
                        .split('\n')
                        .map(|line| {
                            let mut parts = line.splitn(2, '|');
                            let label = parts.next().unwrap_or("").trim().to_string();
                            let url = parts.next().unwrap_or("").trim().to_string();
                            SourceItem { label, url }
                        })
                        .collect();
                }
            });
            let value = items
                .iter()
                .map(|item| {
                    if item.label.is_empty() && item.url.is_empty() {
                        String::new()
                    } else {
                        format!("{} | {}", item.label, item.url)
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");
            html! {
                <>
                    <div class="help">
                        { "One source per line: " }
                        <span class="mono">{ "Label | https://link" }</span>
                    </div>
                    <textarea
                        class="input"
                        rows="6"
                        placeholder="Official report | https://..."
                        value={value}
                        oninput={on_items}
                    />
                </>
            }
        },
        Block::Unknown => html! {
            <div class="muted">{ "Unsupported block kind." }</div>
        },
    };

    html! {
        <div class="block card">
            <div class="block-head">
                <div class="block-type">{ block.tag().to_uppercase() }</div>
                <div class="toolbar">
                    <button class="button secondary mini" onclick={on_up}>{ "↑" }</button>
                    <button class="button secondary mini" onclick={on_down}>{ "↓" }</button>
                    <button class="button secondary mini danger" onclick={on_delete}>
                        { "Delete" }
                    </button>
                </div>
            </div>
            <div class="block-body">
                { body }
            </div>
        </div>
    }
}
